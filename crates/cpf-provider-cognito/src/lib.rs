//! # cpf-provider-cognito
//!
//! Cognito-backed implementation of the [`IdentityProvider`] capability.
//!
//! Speaks the Cognito Identity Provider service's `amz-json-1.1` protocol
//! directly over HTTPS. Only the non-interactive `USER_PASSWORD_AUTH` flow
//! is used; a challenge raised by the pool is reported as an error, never
//! answered.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

mod wire;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use cpf_provider::{AuthRequest, AuthTokens, IdentityProvider, ProviderError, ProviderResult};

use crate::wire::{AuthParameters, ErrorBody, InitiateAuthRequest, InitiateAuthResponse};

/// `X-Amz-Target` header value for the authentication call.
const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";

/// Content type of the `amz-json-1.1` protocol.
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Non-interactive username/password flow.
const AUTH_FLOW: &str = "USER_PASSWORD_AUTH";

/// Per-call timeout; a slow provider is an authentication failure, not a
/// reason to queue requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Identity provider backed by an AWS Cognito user pool.
pub struct CognitoProvider {
    http: reqwest::Client,
    endpoint: String,
}

impl CognitoProvider {
    /// Creates a provider for the given AWS region.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(region: &str) -> ProviderResult<Self> {
        Self::with_endpoint(format!("https://cognito-idp.{region}.amazonaws.com/"))
    }

    /// Creates a provider pointed at an explicit endpoint URL.
    ///
    /// Used by tests that stub the Cognito API in-process.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn with_endpoint(endpoint: impl Into<String>) -> ProviderResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ProviderError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl IdentityProvider for CognitoProvider {
    async fn authenticate(&self, request: &AuthRequest) -> ProviderResult<AuthTokens> {
        let body = InitiateAuthRequest {
            auth_flow: AUTH_FLOW,
            client_id: &request.client_id,
            auth_parameters: AuthParameters {
                username: &request.username,
                password: &request.password,
                secret_hash: &request.secret_hash,
            },
        };

        let payload = serde_json::to_vec(&body)
            .map_err(|e| ProviderError::Transport(format!("failed to encode request: {e}")))?;

        tracing::debug!(
            client_id = %request.client_id,
            user_pool_id = %request.user_pool_id,
            "initiating password authentication"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, AMZ_JSON)
            .header("x-amz-target", INITIATE_AUTH_TARGET)
            .body(payload)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let error: ErrorBody = serde_json::from_slice(&bytes).map_err(|e| {
                ProviderError::InvalidResponse(format!("error body for status {status}: {e}"))
            })?;
            let code = error.code().to_string();
            return Err(ProviderError::Service {
                code,
                message: error.message.unwrap_or_default(),
            });
        }

        let parsed: InitiateAuthResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        if let Some(challenge) = parsed.challenge_name {
            return Err(ProviderError::Challenge(challenge));
        }

        let result = parsed.authentication_result.ok_or_else(|| {
            ProviderError::InvalidResponse(
                "response carried neither tokens nor a challenge".to_string(),
            )
        })?;

        Ok(AuthTokens {
            access_token: result.access_token,
            token_type: result.token_type,
            expires_in: result.expires_in,
            refresh_token: result.refresh_token,
            id_token: result.id_token,
        })
    }
}
