pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::extraction::handlers as resume_handlers;
use crate::matching::handlers as match_handlers;
use crate::state::AppState;

/// Two 5 MB uploads per request, plus headroom for the multipart framing.
const MAX_REQUEST_BYTES: usize = 11 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes",
            post(resume_handlers::handle_upload_resume),
        )
        .route(
            "/api/v1/resumes/:id",
            get(resume_handlers::handle_get_resume),
        )
        .route("/api/v1/match", post(match_handlers::handle_match))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .with_state(state)
}
