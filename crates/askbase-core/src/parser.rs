//! # Knowledge Parser
//!
//! Splits a serialized knowledge line into a question and its answers.
//!
//! - The question is everything before the first question mark, with the
//!   question mark appended back
//! - Every quoted span after it becomes one answer, left to right
//! - Text between quoted spans is ignored
//!
//! The parser does not check field content. An empty answer list or a
//! blank question is returned as-is and rejected by the field validator.

use crate::format::{split_serialized, validate_format};
use crate::primitives::{QUESTION_MARK, QUOTE};
use crate::{FormatError, KnowledgeEntry};

/// Parse a serialized knowledge line.
///
/// The line is format-validated first, so a malformed line is never parsed.
///
/// # Errors
/// Returns the `FormatError` raised by [`validate_format`].
pub fn parse(line: &str) -> Result<KnowledgeEntry, FormatError> {
    validate_format(line)?;

    let (head, tail) = split_serialized(line).ok_or(FormatError::MissingSeparator)?;

    let mut question = String::with_capacity(head.len() + 1);
    question.push_str(head);
    question.push(QUESTION_MARK);

    let answers = QuotedAnswers::new(tail).map(str::to_owned).collect();

    Ok(KnowledgeEntry { question, answers })
}

/// Iterator over the quoted spans of an answer part.
///
/// A span opens at a quotation mark, takes at least one character, and
/// closes at the next quotation mark after that character. Spans never
/// overlap; scanning resumes after each closing quote. Line breaks inside a
/// span are kept.
///
/// ```
/// use askbase_core::parser::QuotedAnswers;
///
/// let answers: Vec<&str> = QuotedAnswers::new(r#" "red" maybe "blue""#).collect();
/// assert_eq!(answers, vec!["red", "blue"]);
/// ```
#[derive(Debug, Clone)]
pub struct QuotedAnswers<'a> {
    rest: &'a str,
}

impl<'a> QuotedAnswers<'a> {
    /// Start scanning the given answer part.
    #[must_use]
    pub fn new(answers_part: &'a str) -> Self {
        Self {
            rest: answers_part,
        }
    }
}

impl<'a> Iterator for QuotedAnswers<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let open = self.rest.find(QUOTE)?;
        let after_open = &self.rest[open + QUOTE.len_utf8()..];

        // The span needs at least one character, even if that is a quote.
        let first_len = after_open.chars().next().map(char::len_utf8);
        let Some(first_len) = first_len else {
            self.rest = "";
            return None;
        };

        let Some(close) = after_open[first_len..].find(QUOTE) else {
            self.rest = "";
            return None;
        };
        let close = first_len + close;

        let answer = &after_open[..close];
        self.rest = &after_open[close + QUOTE.len_utf8()..];
        Some(answer)
    }
}

// =============================================================================
// TESTS
// =============================================================================
