//! Request logging middleware.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use dioxus_logger::tracing;

const IPV4_MAPPED_PREFIX: &str = "::ffff:";

/// Logs method, path and client address of every request passing through.
pub async fn log_request(request: Request, next: Next) -> Response {
    let remote = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr);
    let client = client_address(request.headers(), remote);

    tracing::info!(
        method = %request.method(),
        uri = %request.uri(),
        client = %client,
        "Request"
    );

    next.run(request).await
}

/// Address of the client that sent a request.
///
/// Behind a reverse proxy this is the first (originating) address of `x-forwarded-for`,
/// otherwise the peer address of the connection. Any IPv4-mapped IPv6 prefix is removed.
/// Returns `"-"` when neither is known.
pub fn client_address(headers: &HeaderMap, remote: Option<SocketAddr>) -> String {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    match forwarded.or_else(|| remote.map(|addr| addr.ip().to_string())) {
        Some(address) => address
            .strip_prefix(IPV4_MAPPED_PREFIX)
            .map(str::to_string)
            .unwrap_or(address),
        None => "-".to_string(),
    }
}
