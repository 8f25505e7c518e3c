use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::ProviderError;

pub const INVALID_OUTPUT_MESSAGE: &str =
    "AI output was not a valid JSON, please try again with a simpler prompt!";
pub const PROVIDER_FAILURE_MESSAGE: &str =
    "An internal API error occurred while generating the CV";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Every variant renders as `{ "error": "<message>" }`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider answered, but not with the JSON document it was asked for.
    #[error("Invalid model output: {0}")]
    InvalidOutput(String),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Origin not allowed: {0}")]
    Forbidden(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidOutput(detail) => {
                tracing::error!("Failed to parse AI output as JSON: {detail}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INVALID_OUTPUT_MESSAGE.to_string(),
                )
            }
            AppError::Provider(e) => {
                tracing::error!("API ERROR: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PROVIDER_FAILURE_MESSAGE.to_string(),
                )
            }
            AppError::Forbidden(origin) => {
                tracing::warn!("Rejected request from origin {origin}");
                (StatusCode::FORBIDDEN, "Not allowed by CORS".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
