//! Server lifecycle: bind, serve, drain, stop.
//!
//! ```text
//! Created ──bind──▶ Listening ──SIGINT/SIGTERM──▶ ShuttingDown ──drained / window elapsed──▶ Stopped
//! ```
//!
//! On shutdown the listener is paused first so no new connections are
//! accepted, then in-flight requests get up to [`DRAIN_WINDOW`] to finish.
//! Whatever is still open after that is closed.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use actix_web::HttpServer;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::config::WebServerConfig;
use crate::routes::create_app;
use crate::state::AppState;
use crate::types::error::ServerError;

pub const DRAIN_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Created,
    Listening(SocketAddr),
    ShuttingDown,
    Stopped,
}

pub struct Lifecycle {
    address: String,
    state: AppState,
    drain_window: Duration,
    status: watch::Sender<ServerState>,
}

impl Lifecycle {
    pub fn new(web: &WebServerConfig, state: AppState) -> Self {
        Self::with_address(web.address(), state)
    }

    pub fn with_address(address: impl Into<String>, state: AppState) -> Self {
        let (status, _) = watch::channel(ServerState::Created);
        Self {
            address: address.into(),
            state,
            drain_window: DRAIN_WINDOW,
            status,
        }
    }

    pub fn with_drain_window(mut self, window: Duration) -> Self {
        self.drain_window = window;
        self
    }

    /// Follow the state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ServerState> {
        self.status.subscribe()
    }

    /// Serve until SIGINT or SIGTERM.
    pub async fn run(self) -> Result<(), ServerError> {
        self.run_until(shutdown_signal()).await
    }

    /// Serve until `shutdown` resolves, then drain.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), ServerError>
    where
        F: Future<Output = ()>,
    {
        let app_state = self.state.clone();
        let server = HttpServer::new(move || create_app(app_state.clone()))
            .disable_signals()
            .bind(self.address.as_str())
            .map_err(|source| ServerError::Bind {
                addr: self.address.clone(),
                source,
            })?;

        let local_addr = server.addrs().first().copied().ok_or_else(|| ServerError::Bind {
            addr: self.address.clone(),
            source: std::io::Error::new(std::io::ErrorKind::AddrNotAvailable, "no address bound"),
        })?;

        let server = server.run();
        let handle = server.handle();
        let mut server_task = tokio::spawn(server);

        self.status.send_replace(ServerState::Listening(local_addr));
        info!("Server is running on http://{}", local_addr);

        tokio::select! {
            result = &mut server_task => {
                // The server only ends by itself if something went badly wrong.
                self.status.send_replace(ServerState::Stopped);
                return match result {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(e)) => Err(ServerError::Io(e)),
                    Err(e) => Err(ServerError::Io(std::io::Error::other(e))),
                };
            }
            _ = shutdown => {}
        }

        self.status.send_replace(ServerState::ShuttingDown);
        info!("Server is shutting down...");
        handle.pause().await;

        let in_flight = self.state.in_flight.clone();
        let drained = tokio::time::timeout(self.drain_window, in_flight.wait_idle())
            .await
            .is_ok();
        let remaining = in_flight.active();
        if !drained {
            warn!(
                in_flight = remaining,
                window = ?self.drain_window,
                "Drain window elapsed, force-closing connections"
            );
        }

        handle.stop(false).await;
        if let Err(e) = server_task.await {
            error!(error = %e, "Server task ended abnormally");
        }
        self.status.send_replace(ServerState::Stopped);

        if drained {
            Ok(())
        } else {
            Err(ServerError::ShutdownTimeout {
                window: self.drain_window,
                in_flight: remaining,
            })
        }
    }
}

/// Resolves on Ctrl+C (SIGINT) or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
