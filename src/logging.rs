use std::time::Instant;

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Coarse result of a request as seen by the dispatcher.
pub fn outcome(status: StatusCode) -> &'static str {
    match status {
        StatusCode::NOT_FOUND => "unrouted",
        status if status.is_success() => "handled",
        status if status.is_client_error() => "rejected",
        _ => "failed",
    }
}

pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let target = request.uri().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let outcome = outcome(status);

    if status.is_server_error() {
        warn!(
            method = %method,
            target = %target,
            status = status.as_u16(),
            outcome,
            duration_ms = started_at.elapsed().as_millis(),
            "bedrock request failed"
        );
    } else {
        info!(
            method = %method,
            target = %target,
            status = status.as_u16(),
            outcome,
            duration_ms = started_at.elapsed().as_millis(),
            "request served"
        );
    }

    response
}
