// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  pingd: liveness, health and URL probe service
//
//  Runtime:  tokio multi-thread, one task per connection
//  HTTP:     axum, stateless between requests
//  Config:   defaults / YAML / PINGD_ env / CLI flags
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

mod bootstrap;

use bootstrap::{Cli, check_port};
use clap::Parser;
use pingd_api::ApiState;
use pingd_core::{Endpoint, PingdError, ServerInfo, ServiceConfig};
use pingd_probe::Prober;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            init_tracing("info");
            error!(error = %e, "Failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_level);

    info!(version = env!("CARGO_PKG_VERSION"), "pingd starting");

    // ── Port check ──
    if let Err(e) = check_port(&config.server.host, config.server.port) {
        error!("{e}");
        if let Some(next) = e.suggested_port() {
            error!("try another port, e.g. pingd --port {next}");
        }
        return ExitCode::FAILURE;
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(config)) {
        Ok(()) => {
            info!("pingd stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Server error");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .init();
}

async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr())
        .await
        .map_err(|source| PingdError::PortUnavailable { port: config.server.port, source })?;
    let server = ServerInfo::from(listener.local_addr()?);

    let state = Arc::new(ApiState::new(server.clone(), Prober::new()?));

    info!(addr = %format!("http://{}:{}", server.host, server.port), "Service address");
    info!(host = %server.host, port = server.port, "Listening");
    for usage in Endpoint::available() {
        info!("  - http://localhost:{}{}", server.port, usage);
    }
    info!("Press Ctrl+C to stop");

    pingd_api::serve(listener, state, shutdown_signal()).await
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, stopping...");
}
