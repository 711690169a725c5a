//! Common test utilities and fixtures.

use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::oneshot;
use tokio::time::sleep;

use cpf_core::Config;
use cpf_provider_cognito::CognitoProvider;
use cpf_server::Server;

/// Canned behavior for the stubbed Cognito endpoint.
#[derive(Clone)]
pub enum StubBehavior {
    /// Issue an access token.
    Success {
        /// The access token to return.
        access_token: &'static str,
    },
    /// Answer with an amz-json error body.
    Failure {
        /// Exception name for the `__type` field.
        code: &'static str,
        /// Detail message.
        message: &'static str,
    },
}

/// State shared with the stub handler.
pub struct StubState {
    behavior: StubBehavior,
    requests: Mutex<Vec<Value>>,
}

impl StubState {
    /// Returns the request bodies the stub has seen so far.
    pub fn requests(&self) -> Vec<Value> {
        self.requests.lock().unwrap().clone()
    }
}

/// Test environment: a stubbed Cognito endpoint plus a running gateway.
pub struct TestEnv {
    /// Base URL of the running gateway.
    pub base_url: String,
    /// HTTP client for tests.
    pub client: reqwest::Client,
    /// Stub state, for asserting on captured provider traffic.
    pub cognito: Arc<StubState>,
    _gateway_shutdown: oneshot::Sender<()>,
    _stub_shutdown: Option<oneshot::Sender<()>>,
}

impl TestEnv {
    /// Starts a stub Cognito endpoint with the given behavior and a
    /// gateway pointed at it.
    pub async fn new(behavior: StubBehavior) -> anyhow::Result<Self> {
        init_tracing();

        let cognito = Arc::new(StubState {
            behavior,
            requests: Mutex::new(Vec::new()),
        });

        // Stub Cognito endpoint on an ephemeral port.
        let stub_router = Router::new()
            .route("/", post(stub_cognito))
            .with_state(cognito.clone());
        let stub_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let stub_url = format!("http://{}/", stub_listener.local_addr()?);

        let (stub_shutdown, stub_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::select! {
                result = axum::serve(stub_listener, stub_router) => {
                    if let Err(e) = result {
                        tracing::error!("stub endpoint error: {e}");
                    }
                }
                _ = stub_rx => {}
            }
        });

        let (base_url, client, gateway_shutdown) = start_gateway(stub_url).await?;

        Ok(Self {
            base_url,
            client,
            cognito,
            _gateway_shutdown: gateway_shutdown,
            _stub_shutdown: Some(stub_shutdown),
        })
    }

    /// Starts a gateway whose provider endpoint refuses connections.
    pub async fn with_unreachable_provider() -> anyhow::Result<Self> {
        init_tracing();

        let (base_url, client, gateway_shutdown) =
            start_gateway("http://127.0.0.1:1/".to_string()).await?;

        Ok(Self {
            base_url,
            client,
            cognito: Arc::new(StubState {
                behavior: StubBehavior::Failure {
                    code: "unused",
                    message: "unused",
                },
                requests: Mutex::new(Vec::new()),
            }),
            _gateway_shutdown: gateway_shutdown,
            _stub_shutdown: None,
        })
    }

    /// URL of the login endpoint.
    pub fn login_url(&self) -> String {
        format!("{}/auth/login", self.base_url)
    }
}

/// Spawns the gateway on an ephemeral port with its provider pointed at
/// `endpoint`, and waits until it answers health checks.
async fn start_gateway(
    endpoint: String,
) -> anyhow::Result<(String, reqwest::Client, oneshot::Sender<()>)> {
    // Find an available port for the gateway.
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let port = listener.local_addr()?.port();
    drop(listener);

    let mut config = Config::for_testing();
    config.server.port = port;
    let base_url = format!("http://127.0.0.1:{port}");

    let provider = CognitoProvider::with_endpoint(endpoint)?;
    let server = Server::with_provider(config, Arc::new(provider));

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::select! {
            result = server.run() => {
                if let Err(e) = result {
                    tracing::error!("gateway error: {e}");
                }
            }
            _ = shutdown_rx => {}
        }
    });

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    wait_for_server(&client, &base_url).await?;

    Ok((base_url, client, shutdown_tx))
}

/// Stub handler speaking the Cognito wire shapes.
async fn stub_cognito(State(stub): State<Arc<StubState>>, body: String) -> Response {
    let parsed: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    stub.requests.lock().unwrap().push(parsed);

    match &stub.behavior {
        StubBehavior::Success { access_token } => (
            StatusCode::OK,
            Json(json!({
                "ChallengeParameters": {},
                "AuthenticationResult": {
                    "AccessToken": access_token,
                    "TokenType": "Bearer",
                    "ExpiresIn": 3600,
                },
            })),
        )
            .into_response(),
        StubBehavior::Failure { code, message } => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "__type": code, "message": message })),
        )
            .into_response(),
    }
}

/// Polls the health endpoint until the gateway answers.
async fn wait_for_server(client: &reqwest::Client, base_url: &str) -> anyhow::Result<()> {
    for _ in 0..50 {
        if let Ok(response) = client.get(format!("{base_url}/health")).send().await
            && response.status().is_success()
        {
            return Ok(());
        }
        sleep(Duration::from_millis(100)).await;
    }
    anyhow::bail!("gateway did not become ready at {base_url}")
}

/// Initializes tracing once for the test binary.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("cpf_server=debug,cpf_provider_cognito=debug")
        .try_init();
}
