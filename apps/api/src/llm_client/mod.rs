//! LLM Client: the single point of entry for all provider calls in the tailor API.
//!
//! ARCHITECTURAL RULE: No other module may call a vendor API directly.
//! Handlers only see the `CvProvider` trait; the vendor adapters live here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use self::prompts::CvFormat;

pub mod gemini;
pub mod openai;
pub mod prompts;

#[cfg(test)]
pub mod fake;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{provider} API key is not configured")]
    MissingApiKey { provider: &'static str },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A text-generation backend that can tailor a CV to a job description.
///
/// Carried in `AppState` as `Arc<dyn CvProvider>`. Implementations do no input
/// validation and never retry; any vendor failure is returned as-is.
#[async_trait]
pub trait CvProvider: Send + Sync {
    /// Short provider name used in logs.
    fn name(&self) -> &'static str;

    /// Sends the tailoring prompt in the requested variant and returns the raw model output.
    async fn tailor(
        &self,
        format: CvFormat,
        cv_text: &str,
        job_description: &str,
    ) -> Result<String, ProviderError>;
}

/// Builds the shared outbound HTTP client. The timeout bounds every provider call.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let inner = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"));
    match inner {
        Some(inner) => {
            let inner = inner.trim_start();
            inner.strip_suffix("```").unwrap_or(inner).trim()
        }
        None => text,
    }
}
