//! Application state shared across request handlers.

use std::sync::Arc;

use cpf_core::Config;
use cpf_provider::IdentityProvider;

/// State shared by all request handlers.
///
/// Everything here is read-only after startup; concurrent requests share
/// it without locks.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration.
    pub config: Config,
    /// External identity provider.
    pub provider: Arc<dyn IdentityProvider>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(config: Config, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { config, provider }
    }
}
