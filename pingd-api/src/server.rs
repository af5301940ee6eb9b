use crate::{handlers, middleware};
use axum::http::HeaderValue;
use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::routing::get;
use axum::{Router, middleware::from_fn};
use pingd_core::ServerInfo;
use pingd_core::endpoint::paths;
use pingd_probe::Prober;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

/// Immutable per-process state handed to every request.
pub struct ApiState {
    /// Address the listener actually bound to.
    pub server: ServerInfo,
    pub prober: Prober,
    pub started_at: Instant,
}

impl ApiState {
    pub fn new(server: ServerInfo, prober: Prober) -> Self {
        Self {
            server,
            prober,
            started_at: Instant::now(),
        }
    }
}

/// Build the router. Paths match exactly; anything else hits the 404 fallback.
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(paths::PING, get(handlers::ping::ping))
        .route(paths::HEALTH, get(handlers::health::health_check))
        .route(paths::PING_URL, get(handlers::probe::ping_url))
        .fallback(handlers::not_found::not_found)
        .layer(from_fn(middleware::client_identity))
        // Covers responses produced outside our handlers (e.g. 405).
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}

/// Serve until `shutdown` resolves. Each connection runs on its own task.
pub async fn serve<F>(listener: TcpListener, state: Arc<ApiState>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let app = build_router(state);

    info!(addr = %addr, "Serving pingd");

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
