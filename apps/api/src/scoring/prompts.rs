// All LLM prompt constants for the Scoring module.

/// ATS analysis prompt template.
/// Replace `{job_description}` and `{resume_text}` before sending.
/// The emission order here is fixed, but the extractor anchors on the label
/// tokens themselves and tolerates any order.
pub const ATS_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this resume for Applicant Tracking System (ATS) compatibility with the given job description and provide:
1. A numerical score from 0-100 (just the number)
2. Feedback divided into "Strengths", "Areas for Improvement", and "Keyword Matching" sections

Job Description:
{job_description}

Resume:
{resume_text}

Respond in this exact format:
SCORE: [number]
STRENGTHS: [text]
AREAS FOR IMPROVEMENT: [text]
KEYWORD MATCHING: [text]"#;
