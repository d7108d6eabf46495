use crate::api::users::users::{get_user_info, upload_user_info_csv};
use crate::{AppState, health};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // User endpoints
        .route("/api/v1/users", get(get_user_info))
        .route("/api/v1/users/csv", post(upload_user_info_csv))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Cap upload bodies at the configured size
        .layer(DefaultBodyLimit::max(state.api.max_upload_bytes))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
