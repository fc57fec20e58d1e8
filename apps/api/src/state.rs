use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generative backend. Production wires in `LlmClient`;
    /// tests substitute a scripted implementation.
    pub llm: Arc<dyn TextGenerator>,
    /// Kept for handlers that need runtime settings; currently only `main`
    /// reads it after startup.
    #[allow(dead_code)]
    pub config: Config,
}
