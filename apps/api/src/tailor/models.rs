use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;

pub const MISSING_FIELD_MESSAGE: &str =
    "Missing required field: cv_text, job_description, or selected_model.";
pub const INVALID_MODEL_MESSAGE: &str = "Invalid model selected: Choose openai or gemini";

/// Which provider tailors the CV. Wire tags: `"gemini"`, `"openai"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelChoice {
    Gemini,
    OpenAi,
}

impl FromStr for ModelChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "gemini" => Ok(ModelChoice::Gemini),
            "openai" => Ok(ModelChoice::OpenAi),
            _ => Err(AppError::Validation(INVALID_MODEL_MESSAGE.to_string())),
        }
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelChoice::Gemini => f.write_str("gemini"),
            ModelChoice::OpenAi => f.write_str("openai"),
        }
    }
}

/// Request body for `POST /api/tailor`. Fields are optional on the wire so that
/// absence is reported with our own message rather than a deserializer error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TailorRequest {
    #[serde(default)]
    pub cv_text: Option<String>,
    #[serde(default)]
    pub job_description: Option<String>,
    #[serde(default)]
    pub selected_model: Option<String>,
}

/// A request that passed validation and is ready to dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailorJob {
    pub cv_text: String,
    pub job_description: String,
    pub model: ModelChoice,
}

impl TailorRequest {
    /// Checks presence first, then the model tag.
    pub fn validate(self) -> Result<TailorJob, AppError> {
        let present = |field: Option<String>| field.filter(|v| !v.trim().is_empty());

        match (
            present(self.cv_text),
            present(self.job_description),
            present(self.selected_model),
        ) {
            (Some(cv_text), Some(job_description), Some(selected_model)) => Ok(TailorJob {
                cv_text,
                job_description,
                model: selected_model.parse()?,
            }),
            _ => Err(AppError::Validation(MISSING_FIELD_MESSAGE.to_string())),
        }
    }
}

/// Success envelope. `tailored_cv_object` is a JSON object in strict-JSON mode
/// and a markdown string otherwise.
#[derive(Debug, Serialize)]
pub struct TailorResponse {
    pub success: bool,
    pub tailored_cv_object: Value,
}
