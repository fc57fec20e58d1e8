//! Pipeline orchestrator for the chat flow.
//!
//! Rule match → relevance gate → answer generation, with a fixed string for
//! every failure branch. The orchestrator never returns an error: refusals
//! and backend failures are all encoded as response text.

use tracing::{debug, error};

use crate::assistant::gate;
use crate::assistant::prompts::{FALLBACK_MESSAGE, REJECTION_MESSAGE};
use crate::assistant::rules::match_override;
use crate::llm_client::TextGenerator;

/// Produces the assistant's reply for one user prompt.
///
/// Ordering is fixed: rule matching completes before gating, gating before
/// generation. A rule match skips both backend calls entirely. An off-topic
/// verdict skips generation. A degraded (fail-open) verdict proceeds to
/// generation like any on-topic verdict.
pub async fn respond(backend: &dyn TextGenerator, prompt: &str) -> String {
    if let Some(fixed) = match_override(prompt) {
        debug!("Override rule matched, skipping backend");
        return fixed.to_string();
    }

    let verdict = gate::check(backend, prompt).await;
    if !verdict.on_topic {
        return REJECTION_MESSAGE.to_string();
    }

    match backend.generate(prompt).await {
        Ok(text) => text,
        Err(e) => {
            error!("Answer generation failed: {e}");
            FALLBACK_MESSAGE.to_string()
        }
    }
}
