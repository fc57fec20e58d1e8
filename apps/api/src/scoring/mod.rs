//! Resume scoring pipeline: one templated LLM call, then strict extraction
//! of the labeled score/feedback sections.

pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
