//! Override rules — hand-authored pattern→response pairs checked before any
//! backend call. First match wins; order is significant.

/// A single override rule. `pattern` is matched as a case-insensitive
/// substring of the user prompt, so it must be stored lowercase.
pub struct OverrideRule {
    pub pattern: &'static str,
    pub response: &'static str,
}

/// The ordered rule list. Immutable, declared at compile time.
pub const OVERRIDE_RULES: &[OverrideRule] = &[
    OverrideRule {
        pattern: "how to use proprep ",
        response: "Users need to sign up via Google or email, then enter their details such as \
            specialization and experience. Based on this, they receive insights about salaries, \
            job requirements, and access to AI-powered career growth tools.",
    },
    OverrideRule {
        pattern: "features of proprep",
        response: "Proprep offers AI Resume Maker, AI Cover Letter Generator, personalized mock \
            tests, and industry insights—all in one place.",
    },
    OverrideRule {
        pattern: "who created proprep",
        response: "Wave Setters is a team participating in GNA Hackathon 3.0, dedicated to \
            building AI-powered career tools.",
    },
    OverrideRule {
        pattern: "rahul",
        response: "Rahul is the owner of this Project.",
    },
];

/// Returns the response of the first rule whose pattern matches `text`,
/// or `None` if no rule matches. Pure, no I/O.
pub fn match_override(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    OVERRIDE_RULES
        .iter()
        .find(|rule| lowered.contains(rule.pattern))
        .map(|rule| rule.response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creator_question_matches_fixed_response() {
        let response = match_override("who created proprep").unwrap();
        assert!(response.contains("Wave Setters"));
        assert!(response.contains("GNA Hackathon 3.0"));
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let response = match_override("WHO CREATED PROPREP?").unwrap();
        assert!(response.contains("Wave Setters"));
    }

    #[test]
    fn test_match_is_substring_anywhere_in_prompt() {
        let response = match_override("hey, tell me about the features of proprep please");
        assert!(response.unwrap().contains("AI Resume Maker"));
    }

    #[test]
    fn test_no_rule_matches_returns_none() {
        assert!(match_override("what is the time complexity of quicksort?").is_none());
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Matches both "who created proprep" and "rahul"; the creator rule
        // is declared first and must win.
        let response = match_override("who created proprep, was it rahul?").unwrap();
        assert!(response.contains("Wave Setters"));
        assert!(!response.contains("owner"));
    }

    #[test]
    fn test_patterns_are_stored_lowercase() {
        for rule in OVERRIDE_RULES {
            assert_eq!(rule.pattern, rule.pattern.to_lowercase());
        }
    }
}
