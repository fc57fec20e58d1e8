//! Scoring pipeline: one templated backend call piped into the extractor.
//!
//! Unlike the relevance gate, extraction is strict: a malformed backend
//! reply surfaces as a distinct error rather than a defaulted score, and
//! the raw unparseable text is discarded, never shown to the caller.

use tracing::debug;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::scoring::extractor::{self, AtsAnalysis};
use crate::scoring::prompts::ATS_ANALYSIS_PROMPT_TEMPLATE;

/// Runs the full resume analysis: template → backend → extract.
pub async fn analyze_resume(
    backend: &dyn TextGenerator,
    resume_text: &str,
    job_description: &str,
) -> Result<AtsAnalysis, AppError> {
    let prompt = ATS_ANALYSIS_PROMPT_TEMPLATE
        .replace("{job_description}", job_description)
        .replace("{resume_text}", resume_text);

    let raw = backend
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(format!("resume analysis failed: {e}")))?;

    debug!("ATS analysis reply received: {} chars", raw.len());

    extractor::extract(&raw).map_err(|e| AppError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedBackend {
        replies: Mutex<Vec<Result<String, LlmError>>>,
        last_prompt: Mutex<Option<String>>,
    }

    impl ScriptedBackend {
        fn new(replies: Vec<Result<String, LlmError>>) -> Self {
            Self {
                replies: Mutex::new(replies),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for ScriptedBackend {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.replies
                .lock()
                .unwrap()
                .pop()
                .unwrap_or(Err(LlmError::EmptyContent))
        }
    }

    #[tokio::test]
    async fn test_well_formed_reply_yields_analysis() {
        let backend = ScriptedBackend::new(vec![Ok(
            "SCORE: 72\nSTRENGTHS: Good keywords\nAREAS FOR IMPROVEMENT: Add metrics\nKEYWORD MATCHING: 8/10 matched".to_string(),
        )]);
        let analysis = analyze_resume(&backend, "my resume", "the jd").await.unwrap();
        assert_eq!(analysis.score, 72);
        assert_eq!(analysis.strengths, "Good keywords");
    }

    #[tokio::test]
    async fn test_prompt_embeds_resume_and_jd() {
        let backend = ScriptedBackend::new(vec![Ok(
            "SCORE: 50\nSTRENGTHS: a\nAREAS FOR IMPROVEMENT: b\nKEYWORD MATCHING: c".to_string(),
        )]);
        analyze_resume(&backend, "RESUME BODY", "JD BODY").await.unwrap();

        let prompt = backend.last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("RESUME BODY"));
        assert!(prompt.contains("JD BODY"));
        assert!(prompt.contains("SCORE: [number]"));
    }

    #[tokio::test]
    async fn test_malformed_reply_is_a_distinct_error_without_raw_text() {
        let backend = ScriptedBackend::new(vec![Ok(
            "I would rate this resume rather highly overall.".to_string(),
        )]);
        let err = analyze_resume(&backend, "resume", "jd").await.unwrap_err();
        match err {
            AppError::MalformedResponse(msg) => {
                assert!(!msg.contains("rather highly"), "raw text leaked: {msg}");
            }
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_backend_failure_is_an_llm_error() {
        let backend = ScriptedBackend::new(vec![Err(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        })]);
        let err = analyze_resume(&backend, "resume", "jd").await.unwrap_err();
        assert!(matches!(err, AppError::Llm(_)));
    }
}
