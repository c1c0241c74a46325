//! Server lifecycle with deferred startup.
//!
//! `new()` creates resources, `start()` binds the TCP listener, and
//! `serve()` starts accepting requests. The split lets the owning process
//! observe bind failures (which are fatal for a controller: there is no
//! useful degraded mode without a listening socket) before committing to
//! the serve loop. There is deliberately no rebind or reconnect logic.

use std::future::Future;

use tokio::net::TcpListener;
use tracing::info;

use crate::api::{build_router, ApiState};
use crate::config::ServerConfig;

/// Manages the controller API server lifecycle.
///
/// Follows the deferred startup pattern:
/// 1. `new()` -- captures configuration and store handles
/// 2. `start()` -- binds the TCP listener to the configured address
/// 3. `serve()` -- accepts requests until the shutdown future resolves
pub struct ApiServer {
    config: ServerConfig,
    state: ApiState,
    listener: Option<TcpListener>,
}

impl ApiServer {
    /// Creates a new server without binding any port.
    #[must_use]
    pub fn new(config: ServerConfig, state: ApiState) -> Self {
        Self {
            config,
            state,
            listener: None,
        }
    }

    /// Binds the TCP listener to the configured host and port.
    ///
    /// Returns the actual bound port, which may differ from the configured
    /// port when port 0 is used (OS-assigned ephemeral port).
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound (e.g., port in use).
    /// The caller must treat this as fatal and exit non-zero.
    pub async fn start(&mut self) -> anyhow::Result<u16> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let port = listener.local_addr()?.port();

        info!(host = %self.config.host, port, "controller API listener bound");

        self.listener = Some(listener);
        Ok(port)
    }

    /// Accepts requests until the shutdown future resolves.
    ///
    /// Consumes `self` because the listener is moved into the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server encounters a fatal I/O error.
    ///
    /// # Panics
    ///
    /// Panics if `start()` was not called before `serve()`.
    pub async fn serve(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> anyhow::Result<()> {
        let listener = self
            .listener
            .expect("start() must be called before serve()");
        let router = build_router(self.state, &self.config);

        info!("controller API serving");

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }
}
