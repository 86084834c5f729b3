//! Axum HTTP handlers for the web server
//!
//! Serves the split-view page and fronts the bedrock check/configure scripts.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tracing::warn;

use crate::errors::{AppError, ConfigureResponse};
use crate::AppState;

pub async fn index(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let html = tokio::fs::read(&state.config.html_path)
        .await
        .map_err(|err| {
            warn!(path = %state.config.html_path.display(), error = %err, "failed to read page");
            AppError::PageUnavailable
        })?;

    Ok(([(header::CONTENT_TYPE, "text/html")], html))
}

pub async fn check_bedrock(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let script = state.config.check_script();
    let output = state.script_runner.run(&script, &[]).await.map_err(|err| {
        warn!(error = %err, "check script could not be started");
        AppError::NotConfigured
    })?;

    if !output.success {
        warn!(status = ?output.status, "check script reported failure");
        return Err(AppError::NotConfigured);
    }

    Ok((
        [(header::CONTENT_TYPE, "text/plain")],
        output.stdout.trim().to_string(),
    ))
}

pub async fn configure_bedrock(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConfigureResponse>, AppError> {
    let token = parse_token(&body)?;
    let script = state.config.configure_script();

    let output = state
        .script_runner
        .run(&script, &[token])
        .await
        .map_err(|err| {
            warn!(error = %err, "configure script could not be started");
            AppError::configure_failed(err.to_string())
        })?;

    if !output.success {
        warn!(status = ?output.status, "configure script reported failure");
        let message = if output.stderr.is_empty() {
            output.failure_message(&script)
        } else {
            output.stderr
        };
        return Err(AppError::configure_failed(message));
    }

    Ok(Json(ConfigureResponse::success()))
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Extracts the trimmed `token` field from a configure request body.
fn parse_token(body: &[u8]) -> Result<String, AppError> {
    let payload: Value = serde_json::from_slice(body).map_err(|_| AppError::InvalidJson)?;

    // `null` has no fields to look up, so it counts as malformed input.
    if payload.is_null() {
        return Err(AppError::InvalidJson);
    }

    payload
        .get("token")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .ok_or(AppError::TokenRequired)
}
