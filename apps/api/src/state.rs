use std::sync::Arc;

use crate::llm_client::prompts::CvFormat;
use crate::llm_client::CvProvider;
use crate::tailor::models::ModelChoice;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Provider handles are built once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<dyn CvProvider>,
    pub openai: Arc<dyn CvProvider>,
    /// Prompt variant both providers answer with; decides how output is normalized.
    pub output_format: CvFormat,
}

impl AppState {
    pub fn provider(&self, choice: ModelChoice) -> &dyn CvProvider {
        match choice {
            ModelChoice::Gemini => self.gemini.as_ref(),
            ModelChoice::OpenAi => self.openai.as_ref(),
        }
    }
}
