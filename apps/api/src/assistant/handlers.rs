//! Axum route handlers for the Assistant API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assistant::pipeline;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssistantRequest {
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct AssistantResponse {
    pub response: String,
}

/// POST /api/v1/assistant
///
/// Always replies HTTP 200 with a text payload: refusals and backend
/// failures are encoded as response text, not status codes. That contract
/// is what the chat UI expects.
pub async fn handle_assistant(
    State(state): State<AppState>,
    Json(request): Json<AssistantRequest>,
) -> Json<AssistantResponse> {
    let response = pipeline::respond(state.llm.as_ref(), &request.prompt).await;
    Json(AssistantResponse { response })
}
