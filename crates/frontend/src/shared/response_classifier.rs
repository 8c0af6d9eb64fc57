//! Success/failure classification of free-text backend replies.
//!
//! The connect and upload endpoints answer with a plain status sentence
//! instead of a structured result, so the outcome is inferred from keywords.

/// Checked first; any hit means failure even if a success keyword is present.
const ERROR_KEYWORDS: [&str; 4] = ["error", "failed", "invalid", "not found"];

const SUCCESS_KEYWORDS: [&str; 4] = ["success", "connected", "created", "uploaded"];

/// Returns `true` when the response text reads as a successful outcome.
///
/// Matching is case-insensitive substring search. Text without any keyword
/// counts as success unless it mentions "error".
pub fn classify_response(text: &str) -> bool {
    let lower = text.to_lowercase();

    if ERROR_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return false;
    }
    if SUCCESS_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return true;
    }
    !lower.contains("error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_sentence() {
        assert!(classify_response("Connected successfully to database"));
        assert!(classify_response("File UPLOADED"));
    }

    #[test]
    fn test_error_sentence() {
        assert!(!classify_response("Error: invalid password"));
        assert!(!classify_response("Login FAILED for user 'sa'"));
        assert!(!classify_response("Database not found"));
    }

    #[test]
    fn test_error_keyword_wins_over_success_keyword() {
        assert!(!classify_response("uploaded but error parsing row 4"));
        assert!(!classify_response("Connected, but schema is invalid"));
    }

    #[test]
    fn test_neutral_text_defaults_to_success() {
        assert!(classify_response("OK"));
        assert!(classify_response(""));
        assert!(classify_response("42 tables imported"));
    }
}
