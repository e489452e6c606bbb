use axum::{
    body::Body,
    extract::ConnectInfo,
    http::Request,
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use tracing::info;

/// 简单的请求来源日志
pub async fn simple_ip_logger(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request<Body>,
    next: Next,
) -> Response {
    info!("📥 {} {} from {}", request.method(), request.uri().path(), addr.ip());

    next.run(request).await
}
