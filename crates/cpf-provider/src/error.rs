//! Provider error types.

use thiserror::Error;

/// Errors from an identity-provider authentication call.
///
/// The variants exist for diagnostics only. Callers must not relay them to
/// end users: every one of them maps to the same generic
/// authentication-failure response, so the caller cannot tell an unknown
/// user from a wrong password or a provider outage.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider could not be reached or did not answer in time.
    #[error("provider transport error: {0}")]
    Transport(String),

    /// The provider answered with an error of its own.
    #[error("provider rejected the request: {code}: {message}")]
    Service {
        /// Provider error code (e.g. `NotAuthorizedException`).
        code: String,
        /// Detail message reported by the provider.
        message: String,
    },

    /// The provider demanded an interactive challenge this gateway cannot
    /// answer.
    #[error("provider requires an interactive challenge: {0}")]
    Challenge(String),

    /// The provider's response could not be interpreted.
    #[error("malformed provider response: {0}")]
    InvalidResponse(String),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;
