//! CPF authentication gateway entry point.

#![forbid(unsafe_code)]
#![deny(warnings)]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cpf_core::Config;
use cpf_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let server = Server::new(config)?;
    server.run().await
}
