//! Relevance Gate — asks the backend a YES/NO question about the prompt's
//! topic and fails open on any backend error.

use tracing::warn;

use crate::assistant::prompts::RELEVANCE_GATE_PROMPT_TEMPLATE;
use crate::llm_client::TextGenerator;

/// Outcome of a relevance check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub on_topic: bool,
    /// True when the verdict came from the fail-open fallback rather than
    /// an actual backend answer. A degraded verdict is always on-topic and
    /// is never surfaced as an error.
    pub degraded: bool,
}

/// Classifies `text` as on-topic or off-topic.
///
/// The backend's phrasing is not guaranteed exact ("Yes." or "YES, it is"
/// must both count), so the verdict is on-topic iff the case-folded reply
/// contains "yes" as a substring. Backend errors are swallowed here and
/// converted to a degraded, permissive verdict — the gate never blocks a
/// user on a transient backend failure, and never returns an error.
pub async fn check(backend: &dyn TextGenerator, text: &str) -> Verdict {
    let prompt = RELEVANCE_GATE_PROMPT_TEMPLATE.replace("{question}", text);

    match backend.generate(&prompt).await {
        Ok(reply) => Verdict {
            on_topic: reply.trim().to_lowercase().contains("yes"),
            degraded: false,
        },
        Err(e) => {
            warn!("Relevance gate backend error, failing open: {e}");
            Verdict {
                on_topic: true,
                degraded: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that serves one canned result per call.
    struct ScriptedBackend {
        replies: Mutex<Vec<Result<String, LlmError>>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    #[tokio::test]
    async fn test_bare_yes_is_on_topic() {
        let backend = ScriptedBackend::new(vec![Ok("YES".to_string())]);
        let verdict = check(&backend, "how do I learn Rust?").await;
        assert_eq!(
            verdict,
            Verdict {
                on_topic: true,
                degraded: false
            }
        );
    }

    #[tokio::test]
    async fn test_yes_with_surrounding_phrasing_is_on_topic() {
        for reply in ["Yes.", "YES, it is", "  yes  ", "Yes, that is career-related."] {
            let backend = ScriptedBackend::new(vec![Ok(reply.to_string())]);
            let verdict = check(&backend, "resume tips?").await;
            assert!(verdict.on_topic, "expected on-topic for reply {reply:?}");
            assert!(!verdict.degraded);
        }
    }

    #[tokio::test]
    async fn test_no_is_off_topic() {
        let backend = ScriptedBackend::new(vec![Ok("NO".to_string())]);
        let verdict = check(&backend, "what's the weather today?").await;
        assert_eq!(
            verdict,
            Verdict {
                on_topic: false,
                degraded: false
            }
        );
    }

    #[tokio::test]
    async fn test_reply_without_yes_substring_is_off_topic() {
        let backend = ScriptedBackend::new(vec![Ok("Not related to those topics.".to_string())]);
        let verdict = check(&backend, "best pizza in town?").await;
        assert!(!verdict.on_topic);
    }

    #[tokio::test]
    async fn test_backend_error_fails_open() {
        let backend = ScriptedBackend::new(vec![Err(LlmError::Api {
            status: 503,
            message: "overloaded".to_string(),
        })]);
        let verdict = check(&backend, "how do I prepare for interviews?").await;
        assert_eq!(
            verdict,
            Verdict {
                on_topic: true,
                degraded: true
            }
        );
    }

    #[tokio::test]
    async fn test_empty_reply_is_off_topic_not_degraded() {
        let backend = ScriptedBackend::new(vec![Ok(String::new())]);
        let verdict = check(&backend, "anything").await;
        assert!(!verdict.on_topic);
        assert!(!verdict.degraded);
    }
}
