//! Gateway configuration.
//!
//! Loaded from environment variables (with `.env` support) at process start.

/// Top-level gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Identity-provider (Cognito) configuration.
    pub cognito: CognitoConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to bind to.
    pub port: u16,
}

/// Cognito user-pool client configuration.
///
/// All four values are required; the provider call cannot be formed
/// without them.
#[derive(Debug, Clone)]
pub struct CognitoConfig {
    /// AWS region the user pool lives in (e.g. `us-east-1`).
    pub region: String,
    /// App-client identifier.
    pub client_id: String,
    /// App-client secret, the key for `SECRET_HASH` derivation.
    pub client_secret: String,
    /// User-pool identifier the client belongs to.
    pub user_pool_id: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// A `.env` file in the working directory is honored if present.
    /// `CPF_HOST` and `CPF_PORT` have defaults; the Cognito variables
    /// (`AWS_REGION`, `COGNITO_CLIENT_ID`, `COGNITO_CLIENT_SECRET`,
    /// `COGNITO_USER_POOL_ID`) are required.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing required variable.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let host = std::env::var("CPF_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("CPF_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Ok(Self {
            server: ServerConfig { host, port },
            cognito: CognitoConfig {
                region: required("AWS_REGION")?,
                client_id: required("COGNITO_CLIENT_ID")?,
                client_secret: required("COGNITO_CLIENT_SECRET")?,
                user_pool_id: required("COGNITO_USER_POOL_ID")?,
            },
        })
    }

    /// Creates a configuration for testing.
    ///
    /// Binds to an ephemeral localhost port and uses fixed Cognito
    /// placeholder values.
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            cognito: CognitoConfig {
                region: "us-east-1".to_string(),
                client_id: "test-client-id".to_string(),
                client_secret: "test-client-secret".to_string(),
                user_pool_id: "us-east-1_testpool".to_string(),
            },
        }
    }
}

/// Reads a required environment variable.
fn required(name: &str) -> anyhow::Result<String> {
    std::env::var(name).map_err(|_| anyhow::anyhow!("{name} environment variable is required"))
}
