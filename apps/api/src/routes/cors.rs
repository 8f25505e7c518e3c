//! Cross-origin policy: an explicit origin allow-list, POST only.
//!
//! `CorsLayer` answers preflights and adds the response headers for allowed
//! origins. It does not stop a disallowed request from reaching the handler,
//! so `reject_disallowed_origins` runs in front of it and refuses those outright.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::{Request, State},
    http::{
        header::{CONTENT_TYPE, ORIGIN},
        HeaderValue, Method,
    },
    middleware::Next,
    response::Response,
};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct OriginPolicy {
    allowed: Vec<HeaderValue>,
}

impl OriginPolicy {
    pub fn new(origins: &[String]) -> Result<Self> {
        let allowed = origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o.trim_end_matches('/'))
                    .with_context(|| format!("Invalid origin in allow-list: '{o}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { allowed })
    }

    pub fn allows(&self, origin: &HeaderValue) -> bool {
        let origin = origin.as_bytes();
        let origin = origin.strip_suffix(b"/").unwrap_or(origin);
        self.allowed.iter().any(|a| a.as_bytes() == origin)
    }

    /// Origin matching goes through `allows`, so the guard and the response
    /// headers agree on every origin.
    pub fn cors_layer(&self) -> CorsLayer {
        let policy = self.clone();
        CorsLayer::new()
            .allow_origin(AllowOrigin::predicate(move |origin, _parts| {
                policy.allows(origin)
            }))
            .allow_methods([Method::POST])
            .allow_headers([CONTENT_TYPE])
    }
}

/// Rejects requests whose `Origin` is not allow-listed, and cross-origin
/// requests other than POST and its preflight. Requests without `Origin` pass.
pub async fn reject_disallowed_origins(
    State(policy): State<Arc<OriginPolicy>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if let Some(origin) = request.headers().get(ORIGIN) {
        let shown = String::from_utf8_lossy(origin.as_bytes()).into_owned();
        if !policy.allows(origin) {
            return Err(AppError::Forbidden(shown));
        }
        let method = request.method();
        if *method != Method::POST && *method != Method::OPTIONS {
            return Err(AppError::Forbidden(format!("{shown} ({method})")));
        }
    }

    Ok(next.run(request).await)
}
