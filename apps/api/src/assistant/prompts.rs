// All LLM prompt constants and fixed user-facing strings for the Assistant
// pipeline. Each service that needs LLM calls defines its own prompts.rs
// alongside it.

/// Relevance-gate prompt template. Replace `{question}` before sending.
/// The gate parses the reply with a substring check (see `gate::check`),
/// so the backend does not have to answer with the bare token.
pub const RELEVANCE_GATE_PROMPT_TEMPLATE: &str = r#"Decide whether the following question is related to technology, programming, career, jobs, resumes, or IT topics.

Answer with exactly one word: YES if it is related, NO if it is not.

Question: "{question}""#;

/// Fixed sentence returned when the gate judges a question off-topic.
pub const REJECTION_MESSAGE: &str = "I can only answer questions about technology, career, and \
    IT-related topics. Please ask something related to those fields.";

/// Fixed sentence returned when answer generation fails.
/// The pipeline never surfaces a raw backend error to the caller.
pub const FALLBACK_MESSAGE: &str =
    "An error occurred while generating the response. Please try again.";
