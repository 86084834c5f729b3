use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to read split-view.html")]
    PageUnavailable,
    #[error("not-configured")]
    NotConfigured,
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("Token is required")]
    TokenRequired,
    #[error("{message}")]
    ConfigureFailed { message: String },
}

/// Body of every `/configure-bedrock` response.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConfigureResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConfigureResponse {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
        }
    }
}

impl AppError {
    pub fn configure_failed(message: impl Into<String>) -> Self {
        Self::ConfigureFailed {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidJson | Self::TokenRequired => StatusCode::BAD_REQUEST,
            Self::PageUnavailable | Self::NotConfigured | Self::ConfigureFailed { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::PageUnavailable | Self::NotConfigured => {
                (status, self.to_string()).into_response()
            }
            Self::InvalidJson | Self::TokenRequired | Self::ConfigureFailed { .. } => {
                (status, Json(ConfigureResponse::failure(self.to_string()))).into_response()
            }
        }
    }
}
