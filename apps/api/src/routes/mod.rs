pub mod cors;
pub mod health;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;

use crate::routes::cors::{reject_disallowed_origins, OriginPolicy};
use crate::state::AppState;
use crate::tailor::handlers;

/// Builds the full router. The origin guard is the outermost layer so a
/// disallowed origin never reaches CORS handling or a route.
pub fn build_router(state: AppState, origins: OriginPolicy) -> Router {
    let cors = origins.cors_layer();
    let origins = Arc::new(origins);

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/tailor", post(handlers::handle_tailor))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn_with_state(
                    origins,
                    reject_disallowed_origins,
                ))
                .layer(cors),
        )
}
