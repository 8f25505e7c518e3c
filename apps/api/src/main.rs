mod config;
mod errors;
mod llm_client;
mod routes;
mod state;
mod tailor;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::gemini::{GeminiProvider, GEMINI_MODEL};
use crate::llm_client::openai::{OpenAiProvider, OPENAI_MODEL};
use crate::llm_client::build_http_client;
use crate::routes::build_router;
use crate::routes::cors::OriginPolicy;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Tailor API v{}", env!("CARGO_PKG_VERSION"));

    // One HTTP client shared by both providers; the timeout bounds every vendor call.
    let http = build_http_client(config.provider_timeout)?;

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; requests routed to gemini will fail");
    }
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; requests routed to openai will fail");
    }

    let mut gemini = GeminiProvider::new(http.clone(), config.gemini_api_key.clone());
    if let Some(base_url) = &config.gemini_base_url {
        info!("Gemini base URL overridden: {base_url}");
        gemini = gemini.with_base_url(base_url.as_str());
    }

    let mut openai = OpenAiProvider::new(http, config.openai_api_key.clone());
    if let Some(base_url) = &config.openai_base_url {
        info!("OpenAI base URL overridden: {base_url}");
        openai = openai.with_base_url(base_url.as_str());
    }
    info!(
        "Providers initialized (gemini: {}, openai: {}, output: {}, timeout: {}s)",
        GEMINI_MODEL,
        OPENAI_MODEL,
        config.output_format,
        config.provider_timeout.as_secs()
    );

    let state = AppState {
        gemini: Arc::new(gemini),
        openai: Arc::new(openai),
        output_format: config.output_format,
    };

    let origins = OriginPolicy::new(&config.allowed_origins)?;
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let app = build_router(state, origins).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");
    info!("Backend API endpoint: http://localhost:{}/api/tailor", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
