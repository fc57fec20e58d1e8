//! Assistant pipeline: override rules → relevance gate → answer generation.

pub mod gate;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod rules;
