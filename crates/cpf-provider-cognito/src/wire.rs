//! Wire types for the Cognito `amz-json-1.1` protocol.

use serde::{Deserialize, Serialize};

/// `InitiateAuth` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthRequest<'a> {
    pub auth_flow: &'a str,
    pub client_id: &'a str,
    pub auth_parameters: AuthParameters<'a>,
}

/// Credential parameters; field names are dictated by the service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) struct AuthParameters<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub secret_hash: &'a str,
}

/// `InitiateAuth` success body.
///
/// Exactly one of `challenge_name` or `authentication_result` is expected;
/// a challenge means the pool demanded an interactive step.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct InitiateAuthResponse {
    #[serde(default)]
    pub challenge_name: Option<String>,
    #[serde(default)]
    pub authentication_result: Option<AuthenticationResult>,
}

/// Token set inside a successful response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct AuthenticationResult {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}

/// Error body for non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(rename = "__type", default)]
    pub error_type: String,
    #[serde(default, alias = "Message")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Returns the bare exception name.
    ///
    /// The service sometimes namespaces the type
    /// (`com.amazonaws...#NotAuthorizedException`); only the fragment after
    /// `#` identifies the error.
    pub(crate) fn code(&self) -> &str {
        self.error_type.rsplit('#').next().unwrap_or("")
    }
}
