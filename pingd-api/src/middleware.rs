use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use pingd_core::probe::elapsed_ms;
use pingd_core::{ClientIdentity, Endpoint};
use pingd_observability::AccessLogEntry;
use std::net::SocketAddr;
use std::time::Instant;

/// Resolves the client identity once per request, hands it to the handler
/// as an extension, and logs the request after the response is built.
pub async fn client_identity(
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    mut request: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let identity = ClientIdentity::resolve(peer, request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    request.extensions_mut().insert(identity.clone());

    let response = next.run(request).await;

    AccessLogEntry::new(
        Endpoint::from_path(&path),
        &identity,
        method.as_str(),
        &path,
        response.status().as_u16(),
        elapsed_ms(started.elapsed()),
    )
    .emit();

    response
}
