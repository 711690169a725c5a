//! # cpf-server
//!
//! HTTP server for the CPF authentication gateway.
//!
//! One business route: `POST /auth/login` takes a CPF and password,
//! validates the CPF's check digits locally, derives the provider's
//! `SECRET_HASH`, and forwards the credentials to the identity provider.
//! The provider is injected behind a trait so deployments and tests can
//! swap it without touching the handler.
//!
//! ## Usage
//!
//! ```ignore
//! use cpf_core::Config;
//! use cpf_server::Server;
//!
//! let config = Config::from_env()?;
//! let server = Server::new(config)?;
//! server.run().await?;
//! ```

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;

use cpf_core::Config;
use cpf_provider::IdentityProvider;
use cpf_provider_cognito::CognitoProvider;

/// The CPF authentication gateway server.
pub struct Server {
    config: Config,
    provider: Arc<dyn IdentityProvider>,
}

impl Server {
    /// Creates a server wired to the Cognito identity provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider's HTTP client cannot be built.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let provider = CognitoProvider::new(&config.cognito.region)?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    /// Creates a server with an explicit identity provider.
    ///
    /// Tests use this to substitute a double or a stubbed endpoint.
    #[must_use]
    pub fn with_provider(config: Config, provider: Arc<dyn IdentityProvider>) -> Self {
        Self { config, provider }
    }

    /// Builds the application router for this server.
    #[must_use]
    pub fn router(&self) -> Router {
        let state = AppState::new(self.config.clone(), self.provider.clone());
        create_router(state)
    }

    /// Runs the server.
    ///
    /// Blocks until a shutdown signal (SIGINT/SIGTERM) is received.
    ///
    /// # Errors
    ///
    /// Returns an error if the listen address is invalid, the port cannot
    /// be bound, or the server loop fails.
    pub async fn run(self) -> anyhow::Result<()> {
        let app = self.router();

        let addr: SocketAddr =
            format!("{}:{}", self.config.server.host, self.config.server.port).parse()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Gateway listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Gateway shutdown complete");
        Ok(())
    }

    /// Returns the server configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}

/// Waits for a shutdown signal.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
