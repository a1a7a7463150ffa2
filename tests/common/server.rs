//! Test server lifecycle management.
//!
//! Spawns the HTTP app on a random port, backed by an unpaced MCP client
//! pointed at a [`MockMospi`]. Each test gets an isolated server, mock and
//! aggregate cache; dropping the server shuts everything down.

use super::fixtures::configure_dashboard_records;
use super::mock_mospi::MockMospi;
use plfs_tracker_server::dashboard::DashboardAssembler;
use plfs_tracker_server::mcp::{McpClient, McpSettings};
use plfs_tracker_server::server::{make_app, HttpCacheSettings, RequestsLoggingLevel, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

const SERVER_READY_TIMEOUT_MS: u64 = 5_000;
const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

pub struct TestServer {
    /// Base URL for making requests, e.g. "http://127.0.0.1:12345".
    pub base_url: String,

    /// The mock MoSPI remote behind this server, for call inspection and
    /// failure injection.
    pub mock: MockMospi,

    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawn a server whose mock serves the full canned dashboard dataset.
    pub async fn spawn() -> Self {
        let mock = MockMospi::spawn().await;
        configure_dashboard_records(&mock);
        Self::spawn_with(mock).await
    }

    /// Spawn a server over a caller-configured mock.
    pub async fn spawn_with(mock: MockMospi) -> Self {
        let client = McpClient::unpaced(McpSettings {
            url: mock.url.clone(),
            ..Default::default()
        })
        .expect("Failed to build MCP client");
        let assembler = Arc::new(DashboardAssembler::new(Arc::new(client)));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port,
            http_cache: HttpCacheSettings::default(),
        };
        let app = make_app(config, assembler);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            mock,
            _shutdown_tx: Some(shutdown_tx),
        };
        server.wait_for_ready().await;
        server
    }

    /// Poll the status endpoint until the server answers.
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client
                .get(format!("{}/api/status", self.base_url))
                .send()
                .await
            {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
