pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .route("/api/v1/resumes/export", post(handlers::handle_export))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
