use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::handlers;

/// Routes match on the exact method and request target. axum would answer
/// HEAD through a GET handler and ignore the query string, so both are
/// turned away here before routing.
pub async fn require_exact_request(request: Request, next: Next) -> Response {
    if request.method() == Method::HEAD || request.uri().query().is_some() {
        return handlers::not_found().await.into_response();
    }

    next.run(request).await
}
