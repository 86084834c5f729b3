use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod errors;
pub mod http;
pub mod logging;
pub mod scripts;

use config::Config;
use http::handlers;
use scripts::ScriptRunner;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub script_runner: Arc<dyn ScriptRunner>,
}

impl AppState {
    pub fn new(config: Config, script_runner: Arc<dyn ScriptRunner>) -> Self {
        Self {
            config: Arc::new(config),
            script_runner,
        }
    }
}

/// Fixed route table. Anything else, including a known path with the wrong
/// method, a HEAD request or a query string, answers 404 `Not found`.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index).fallback(handlers::not_found))
        .route(
            "/check-bedrock",
            get(handlers::check_bedrock).fallback(handlers::not_found),
        )
        .route(
            "/configure-bedrock",
            post(handlers::configure_bedrock)
                .fallback(handlers::not_found)
                .layer(DefaultBodyLimit::disable()),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(http::filter::require_exact_request))
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
