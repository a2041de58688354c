//! # Format Validator
//!
//! Checks that a serialized knowledge line is well-formed before it is parsed:
//!
//! ```text
//! <question>? "<answer1>" "<answer2>" ... "<answerX>"
//! ```
//!
//! - The FIRST question mark splits the line into question side and answer side
//! - Further question marks belong to the answer side
//! - The answer side must contain an even number of quotation marks
//!
//! The quote check is parity only. It does not verify that quotes pair up
//! around content, so `"a" b"c"` passes while `"blue"white"` does not.

use crate::FormatError;
use crate::primitives::{QUESTION_MARK, QUOTE};

/// Split a serialized line at its first question mark.
///
/// Returns `(head, tail)` with the separator removed from both, or `None`
/// if the line has no question mark at all.
#[must_use]
pub fn split_serialized(line: &str) -> Option<(&str, &str)> {
    line.split_once(QUESTION_MARK)
}

/// Validate the format of a serialized knowledge line.
///
/// This does not validate the question or the answers themselves, only the
/// shape of the line.
pub fn validate_format(line: &str) -> Result<(), FormatError> {
    let (_, answers_part) = split_serialized(line).ok_or(FormatError::MissingSeparator)?;

    let mut balanced = true;
    for c in answers_part.chars() {
        if c == QUOTE {
            balanced = !balanced;
        }
    }

    if !balanced {
        return Err(FormatError::UnbalancedQuotation);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_uses_first_question_mark() {
        assert_eq!(
            split_serialized("Why? \"because?\""),
            Some(("Why", " \"because?\""))
        );
        assert_eq!(split_serialized("?"), Some(("", "")));
        assert_eq!(split_serialized("no separator"), None);
    }

    #[test]
    fn accepts_well_formed_lines() {
        assert!(validate_format("What are Peters favorite colors? \"blue\" \"red\" \"white\"").is_ok());
        assert!(validate_format("What are Peters favorite colors? \"red\" some text \"yellow\"").is_ok());
        assert!(validate_format("What are Peters favorite colors?    \"red\" some \"yellow\" text").is_ok());
    }

    #[test]
    fn question_without_answers_is_well_formed() {
        assert!(validate_format("How old is Peter?").is_ok());
    }

    #[test]
    fn rejects_missing_separator() {
        assert_eq!(
            validate_format("What are Peters favorite colors \"blue\" \"red\" \"white\""),
            Err(FormatError::MissingSeparator)
        );
        assert_eq!(validate_format(""), Err(FormatError::MissingSeparator));
    }

    #[test]
    fn rejects_odd_quote_count() {
        for line in [
            "What are Peters favorite colors? \"blue\" \"red\" \"white",
            "What are Peters favorite colors? blue\" \"red\" \"white\"",
            "What are Peters favorite colors? \"blue\"white\"",
        ] {
            assert_eq!(validate_format(line), Err(FormatError::UnbalancedQuotation));
        }
    }

    #[test]
    fn quotes_in_question_side_are_not_counted() {
        assert!(validate_format("Is \"x a word? \"yes\"").is_ok());
    }

    #[test]
    fn parity_accepts_stray_quotes_mid_token() {
        assert!(validate_format("Odd? \"a\" b\"c\"").is_ok());
    }
}
