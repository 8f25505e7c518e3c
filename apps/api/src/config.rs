use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::llm_client::prompts::CvFormat;

/// Origins allowed to call the API when `ALLOWED_ORIGINS` is not set.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:3000",
    "http://localhost:5173",
    "https://cv-tailor-frontend.onrender.com",
];

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 120;

/// Application configuration loaded from environment variables.
///
/// Provider API keys are optional here: a missing key only fails the calls
/// routed to that provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub openai_api_key: Option<String>,
    /// Overrides the vendor endpoints, e.g. for a corporate proxy or gateway.
    pub gemini_base_url: Option<String>,
    pub openai_base_url: Option<String>,
    pub port: u16,
    pub allowed_origins: Vec<String>,
    pub output_format: CvFormat,
    pub provider_timeout: Duration,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let allowed_origins = match get("ALLOWED_ORIGINS") {
            Some(raw) => parse_origins(&raw),
            None => parse_origins(&DEFAULT_ALLOWED_ORIGINS.join(",")),
        };
        if allowed_origins.is_empty() {
            bail!("ALLOWED_ORIGINS must name at least one origin");
        }

        let output_format = match get("CV_OUTPUT_FORMAT") {
            Some(raw) => raw
                .parse::<CvFormat>()
                .map_err(anyhow::Error::msg)
                .context("CV_OUTPUT_FORMAT must be 'json' or 'markdown'")?,
            None => CvFormat::default(),
        };

        let timeout_secs = match get("PROVIDER_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_PROVIDER_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("PROVIDER_TIMEOUT_SECS must be greater than zero");
        }

        Ok(Config {
            gemini_api_key: get("GEMINI_API_KEY"),
            openai_api_key: get("OPENAI_API_KEY"),
            gemini_base_url: get("GEMINI_BASE_URL"),
            openai_base_url: get("OPENAI_BASE_URL"),
            port,
            allowed_origins,
            output_format,
            provider_timeout: Duration::from_secs(timeout_secs),
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

/// Splits a comma-separated origin list, dropping blanks, trailing slashes and duplicates.
fn parse_origins(raw: &str) -> Vec<String> {
    let mut origins: Vec<String> = Vec::new();
    for origin in raw.split(',') {
        let origin = origin.trim().trim_end_matches('/');
        if !origin.is_empty() && !origins.iter().any(|o| o == origin) {
            origins.push(origin.to_string());
        }
    }
    origins
}
