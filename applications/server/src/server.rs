//! Network binding for the registry
//!
//! Runs the gRPC server (`user.UserService` plus the standard health
//! service) and, when configured, the HTTP health endpoint. Both stop
//! together when the shutdown future resolves.

use crate::api;
use crate::config::ServerConfig;
use crate::error::Result;
use crate::service::RegistryService;
use crate::state::AppState;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tracing::info;
use userhub_proto::user_service_server::UserServiceServer;

/// Bound sockets for the gRPC endpoint and the optional health endpoint
pub struct Listeners {
    pub grpc: TcpListener,
    pub health: Option<TcpListener>,
}

impl Listeners {
    /// Bind the addresses named in `config`
    pub async fn bind(config: &ServerConfig) -> Result<Self> {
        let grpc = TcpListener::bind(config.grpc_addr()?).await?;
        let health = match config.health_addr()? {
            Some(addr) => Some(TcpListener::bind(addr).await?),
            None => None,
        };
        Ok(Self { grpc, health })
    }

    /// Actual gRPC address (resolves port 0)
    pub fn grpc_addr(&self) -> Result<SocketAddr> {
        Ok(self.grpc.local_addr()?)
    }

    /// Actual health address, when enabled
    pub fn health_addr(&self) -> Result<Option<SocketAddr>> {
        Ok(self.health.as_ref().map(TcpListener::local_addr).transpose()?)
    }
}

/// Forwards one shutdown trigger to both servers.
///
/// The forwarding task is aborted when the relay is dropped, so it never
/// outlives [`run`], whichever way `run` exits.
struct ShutdownRelay {
    stopped: watch::Receiver<bool>,
    task: JoinHandle<()>,
}

impl ShutdownRelay {
    fn spawn<F>(shutdown: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let (tx, stopped) = watch::channel(false);
        let task = tokio::spawn(async move {
            shutdown.await;
            info!("Shutdown signal received");
            tx.send_replace(true);
        });
        Self { stopped, task }
    }

    /// Resolves once shutdown was triggered, including before this call
    fn stopped(&self) -> impl Future<Output = ()> + Send + 'static {
        let mut stopped = self.stopped.clone();
        async move {
            let _ = stopped.wait_for(|stopped| *stopped).await;
        }
    }
}

impl Drop for ShutdownRelay {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Serve until `shutdown` resolves, then drain in-flight calls
pub async fn run<F>(listeners: Listeners, app_state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let (health_reporter, health_service) = tonic_health::server::health_reporter();
    health_reporter
        .set_serving::<UserServiceServer<RegistryService>>()
        .await;

    let relay = ShutdownRelay::spawn(shutdown);

    info!("gRPC server listening on {}", listeners.grpc_addr()?);

    let grpc_server = Server::builder()
        .add_service(health_service)
        .add_service(RegistryService::new(app_state.clone()).into_server())
        .serve_with_incoming_shutdown(TcpListenerStream::new(listeners.grpc), relay.stopped());

    match listeners.health {
        Some(listener) => {
            info!("Health checks listening on {}", listener.local_addr()?);
            let health_server = axum::serve(listener, api::router(app_state))
                .with_graceful_shutdown(relay.stopped())
                .into_future();

            let (grpc_result, health_result) = tokio::join!(grpc_server, health_server);
            grpc_result?;
            health_result?;
        }
        None => grpc_server.await?,
    }

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
