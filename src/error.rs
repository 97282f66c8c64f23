use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::conversation::{CatalogError, ConversationServiceError};

/// Top-level application error for the CLI and server wiring.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("conversation error: {0}")]
    Conversation(#[from] ConversationServiceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Conversation(ConversationServiceError::Catalog(
                CatalogError::UnknownJob(_) | CatalogError::UnknownCompany(_),
            ))
            | AppError::Conversation(ConversationServiceError::UnknownSession(_)) => {
                StatusCode::NOT_FOUND
            }
            AppError::Conversation(ConversationServiceError::Closed(_)) => StatusCode::CONFLICT,
            AppError::Conversation(_)
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
