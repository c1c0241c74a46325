//! Nimbus controller entry point.
//!
//! Wires in-memory stores into the API state, binds the listener, and
//! serves until ctrl-c. A bind failure surfaces as a non-zero exit.

use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nimbus_core::{Environment, Function, HttpTrigger};
use nimbus_server::{ApiServer, ApiState, MemoryStore, ServerConfig};

/// Nimbus controller: REST control plane for functions, HTTP triggers, and environments.
#[derive(Debug, Parser)]
#[command(name = "nimbus-controller")]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "NIMBUS_PORT", default_value_t = 8888)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let state = ApiState {
        functions: Arc::new(MemoryStore::<Function>::new()),
        http_triggers: Arc::new(MemoryStore::<HttpTrigger>::new()),
        environments: Arc::new(MemoryStore::<Environment>::new()),
    };
    let config = ServerConfig {
        port: args.port,
        ..ServerConfig::default()
    };

    let mut server = ApiServer::new(config, state);
    let port = server.start().await?;
    info!(port, "nimbus controller started");

    server.serve(shutdown_signal()).await
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
