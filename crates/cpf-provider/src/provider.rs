//! Identity-provider capability trait.

use async_trait::async_trait;

use crate::error::ProviderResult;

/// A non-interactive password authentication request.
///
/// Carries everything the provider needs in one call; nothing is read from
/// ambient state.
#[derive(Debug, Clone)]
pub struct AuthRequest {
    /// Username exactly as supplied by the caller, not normalized.
    pub username: String,
    /// Password as supplied by the caller.
    pub password: String,
    /// Keyed hash proving possession of the client secret for this
    /// username.
    pub secret_hash: String,
    /// Client identifier registered with the provider.
    pub client_id: String,
    /// User-pool identifier the client belongs to.
    pub user_pool_id: String,
}

/// Token set returned by a successful authentication.
#[derive(Debug, Clone, Default)]
pub struct AuthTokens {
    /// Access token, when the provider issued one.
    pub access_token: Option<String>,
    /// Token type, typically `Bearer`.
    pub token_type: Option<String>,
    /// Access-token lifetime in seconds.
    pub expires_in: Option<i64>,
    /// Refresh token, when issued.
    pub refresh_token: Option<String>,
    /// OpenID Connect ID token, when issued.
    pub id_token: Option<String>,
}

/// Capability interface for the external identity provider.
///
/// Implementations must be thread-safe; the server shares one instance
/// across all requests. Substituting a test double here leaves validation
/// and hash derivation untouched.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Performs a non-interactive password authentication.
    ///
    /// One attempt per call; implementations do not retry.
    ///
    /// ## Errors
    ///
    /// Returns an error for any failure: rejected credentials, an
    /// unreachable provider, or a response the gateway cannot interpret.
    async fn authenticate(&self, request: &AuthRequest) -> ProviderResult<AuthTokens>;
}
