pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant;
use crate::scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assistant API — always 200, errors encoded as response text
        .route(
            "/api/v1/assistant",
            post(assistant::handlers::handle_assistant),
        )
        // Scoring API
        .route(
            "/api/v1/resume/analyze",
            post(scoring::handlers::handle_analyze_resume),
        )
        .with_state(state)
}
