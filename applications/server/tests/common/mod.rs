/// Common test utilities and fixtures
use std::net::SocketAddr;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use userhub_server::{config::ServerConfig, server, AppState, Listeners};

/// A server running on ephemeral localhost ports
pub struct TestServer {
    pub grpc_addr: SocketAddr,
    pub health_addr: Option<SocketAddr>,
    pub state: AppState,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<userhub_server::Result<()>>,
}

impl TestServer {
    pub fn endpoint(&self) -> String {
        format!("http://{}", self.grpc_addr)
    }

    /// Trigger graceful shutdown and wait for the serve loop to finish
    pub async fn stop(mut self) -> userhub_server::Result<()> {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.expect("serve task panicked")
    }
}

/// Test config: loopback, ephemeral ports, demo users seeded
pub fn test_config(with_health: bool) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 0;
    config.server.health_port = with_health.then_some(0);
    config
}

/// Start a server with the two demo users
pub async fn start_server() -> TestServer {
    start_server_with(test_config(false)).await
}

pub async fn start_server_with(config: ServerConfig) -> TestServer {
    let state = AppState::from_config(&config).unwrap();
    let listeners = Listeners::bind(&config).await.unwrap();
    let grpc_addr = listeners.grpc_addr().unwrap();
    let health_addr = listeners.health_addr().unwrap();

    let (tx, rx) = oneshot::channel::<()>();
    let handle = tokio::spawn(server::run(listeners, state.clone(), async move {
        let _ = rx.await;
    }));

    TestServer {
        grpc_addr,
        health_addr,
        state,
        shutdown: Some(tx),
        handle,
    }
}

/// Demo user fixtures
pub mod fixtures {
    pub const JOHN_ID: &str = "1";
    pub const JANE_ID: &str = "2";
}
