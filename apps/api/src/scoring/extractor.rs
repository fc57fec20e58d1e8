//! Response Extractor — parses the backend's free-text ATS reply into a
//! typed analysis, or fails as a whole.
//!
//! Four independent label-anchored rules, each capturing from its label to
//! the next known label or end of text. All four must succeed or the result
//! is a `MalformedResponse`-class failure: a partial score/feedback pairing
//! is worse than no result.

use serde::Serialize;
use thiserror::Error;

pub const SCORE_LABEL: &str = "SCORE:";
pub const STRENGTHS_LABEL: &str = "STRENGTHS:";
pub const IMPROVEMENTS_LABEL: &str = "AREAS FOR IMPROVEMENT:";
pub const KEYWORD_MATCH_LABEL: &str = "KEYWORD MATCHING:";

const LABELS: [&str; 4] = [
    SCORE_LABEL,
    STRENGTHS_LABEL,
    IMPROVEMENTS_LABEL,
    KEYWORD_MATCH_LABEL,
];

/// Fully extracted ATS analysis. All fields present and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AtsAnalysis {
    /// Score as emitted by the backend. The prompt asks for 0-100; a value
    /// outside that range is a backend contract violation and is passed
    /// through unclamped.
    pub score: u32,
    pub strengths: String,
    pub improvements: String,
    pub keyword_match: String,
}

/// Why extraction failed. Carries the offending label, never the raw text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("missing or empty '{0}' section")]
    MissingSection(&'static str),

    #[error("'SCORE:' is not followed by a number")]
    InvalidScore,
}

/// Parses `raw` against the expected four-label grammar.
pub fn extract(raw: &str) -> Result<AtsAnalysis, ExtractError> {
    let score_text =
        capture_section(raw, SCORE_LABEL).ok_or(ExtractError::MissingSection(SCORE_LABEL))?;
    let score = parse_score(score_text)?;

    let strengths = capture_section(raw, STRENGTHS_LABEL)
        .ok_or(ExtractError::MissingSection(STRENGTHS_LABEL))?;
    let improvements = capture_section(raw, IMPROVEMENTS_LABEL)
        .ok_or(ExtractError::MissingSection(IMPROVEMENTS_LABEL))?;
    let keyword_match = capture_section(raw, KEYWORD_MATCH_LABEL)
        .ok_or(ExtractError::MissingSection(KEYWORD_MATCH_LABEL))?;

    Ok(AtsAnalysis {
        score,
        strengths: strengths.to_string(),
        improvements: improvements.to_string(),
        keyword_match: keyword_match.to_string(),
    })
}

/// Captures the trimmed text between `label` and the nearest other known
/// label (or end of text). Returns `None` when the label is absent or the
/// capture is empty. Anchoring on the label token makes extraction
/// order-independent.
fn capture_section<'a>(raw: &'a str, label: &str) -> Option<&'a str> {
    let start = raw.find(label)? + label.len();
    let rest = &raw[start..];

    let end = LABELS
        .iter()
        .copied()
        .filter(|&l| l != label)
        .filter_map(|l| rest.find(l))
        .min()
        .unwrap_or(rest.len());

    let captured = rest[..end].trim();
    if captured.is_empty() {
        None
    } else {
        Some(captured)
    }
}

/// Parses the leading digit run of the SCORE capture as an integer.
fn parse_score(text: &str) -> Result<u32, ExtractError> {
    let digits: &str = {
        let end = text
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(text.len());
        &text[..end]
    };

    if digits.is_empty() {
        return Err(ExtractError::InvalidScore);
    }

    digits.parse::<u32>().map_err(|_| ExtractError::InvalidScore)
}
