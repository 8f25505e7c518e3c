//! Axum route handler for the Tailor API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::CvFormat;
use crate::llm_client::{strip_json_fences, ProviderError};
use crate::state::AppState;
use crate::tailor::models::{TailorJob, TailorRequest, TailorResponse};

/// POST /api/tailor
///
/// Validates the request, routes it to the selected provider and returns the
/// tailored CV. Malformed bodies are reported with the same `{ "error" }`
/// envelope as missing fields.
pub async fn handle_tailor(
    State(state): State<AppState>,
    payload: Result<Json<TailorRequest>, JsonRejection>,
) -> Result<Json<TailorResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let job = request.validate()?;

    let tailored_cv_object = tailor_cv(&state, &job).await?;

    Ok(Json(TailorResponse {
        success: true,
        tailored_cv_object,
    }))
}

/// Runs one provider call for a validated job and normalizes its output.
///
/// `state.output_format` is both the prompt variant requested and the parsing
/// rule applied, so the two cannot disagree.
pub async fn tailor_cv(state: &AppState, job: &TailorJob) -> Result<Value, AppError> {
    let format = state.output_format;
    let provider = state.provider(job.model);
    info!("Routing request to {} model", provider.name());

    let raw = match provider
        .tailor(format, &job.cv_text, &job.job_description)
        .await
    {
        Ok(raw) => raw,
        // An empty answer to a strict-JSON prompt is a broken output contract, not an outage.
        Err(ProviderError::EmptyContent) if format == CvFormat::Json => {
            return Err(AppError::InvalidOutput("provider returned no text".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    normalize_output(format, raw)
}

/// Strict-JSON output is parsed (tolerating a surrounding code fence);
/// markdown output is passed through as a string.
fn normalize_output(format: CvFormat, raw: String) -> Result<Value, AppError> {
    match format {
        CvFormat::Markdown => Ok(Value::String(raw)),
        CvFormat::Json => serde_json::from_str(strip_json_fences(&raw))
            .map_err(|e| AppError::InvalidOutput(format!("{e}; raw output: {raw}"))),
    }
}
