//! # Core Type Definitions
//!
//! This module contains the core types shared by every askbase component:
//! - Knowledge representation (`KnowledgeEntry`)
//! - Input error taxonomy (`FormatError`, `QuestionError`, `AnswerError`, `AnswersError`)
//! - The umbrella error (`KnowledgeError`)
//!
//! ## Error Messages
//!
//! Every error kind carries its own message template through `#[error]`.
//! Messages are resolved when the error is displayed; there is no shared
//! mutable message table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// KNOWLEDGE ENTRY
// =============================================================================

/// A question together with its ordered answers.
///
/// Answer order is the order in which the answers were parsed or submitted
/// and is reproduced verbatim on retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// The question, including its trailing question mark.
    pub question: String,
    /// The answers, in insertion order.
    pub answers: Vec<String>,
}

impl KnowledgeEntry {
    /// Create a new entry.
    #[must_use]
    pub fn new(question: impl Into<String>, answers: Vec<String>) -> Self {
        Self {
            question: question.into(),
            answers,
        }
    }

    /// Render the entry back into its single-line serialized form.
    ///
    /// `What color? "red" "blue"`
    #[must_use]
    pub fn to_serialized(&self) -> String {
        let mut line = self.question.clone();
        for answer in &self.answers {
            line.push_str(" \"");
            line.push_str(answer);
            line.push('"');
        }
        line
    }
}

// =============================================================================
// INPUT ERRORS
// =============================================================================

/// The serialized line is not well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// No question mark splits the line into a question and an answer part.
    #[error("Question format is incorrect! No question mark defined in the question!")]
    MissingSeparator,

    /// The answer part contains an odd number of quotation marks.
    #[error("The answers format is incorrect!")]
    UnbalancedQuotation,
}

/// A question violates the content rules.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    /// The question is the empty string.
    #[error("No valid question given!")]
    Empty,

    /// The question is longer than the configured maximum.
    #[error("The question length of {{'{question}'}} exceeds the maximum of {max} characters!")]
    TooLong { question: String, max: usize },

    /// The question does not end with a question mark.
    #[error("the question {{'{0}'}} does not have a question mark at the end of the question!")]
    MissingQuestionMark(String),

    /// Nothing but whitespace precedes the question mark.
    #[error("The question {{'{0}'}} is empty or blank!")]
    Blank(String),
}

/// A single answer violates the content rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswerError {
    /// The answer is absent (e.g. `null` in structured input).
    #[error("Invalid answer given!")]
    Invalid,

    /// The answer is longer than the configured maximum.
    #[error("The answer length of {{'{answer}'}} exceeds the maximum length of {max} characters!")]
    TooLong { answer: String, max: usize },

    /// The answer is empty or consists only of whitespace.
    #[error("The answer {{'{0}'}} is empty or blank!")]
    Blank(String),
}

/// The answer list as a whole is invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnswersError {
    /// No answers were given.
    #[error("No answers in quotations defined!")]
    NoneGiven,

    /// The first invalid answer in the list.
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

// =============================================================================
// UMBRELLA ERROR
// =============================================================================

/// Errors that can occur in the askbase system.
///
/// - Input errors (`Format`, `Question`, `Answers`) are reported to the caller
///   as-is and never retried
/// - Exactly one error is raised per call: the first violation found
/// - No operation leaves the store partially updated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnowledgeError {
    /// The serialized line is malformed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The question is invalid.
    #[error(transparent)]
    Question(#[from] QuestionError),

    /// The answers are invalid.
    #[error(transparent)]
    Answers(#[from] AnswersError),

    /// The storage backend failed internally.
    ///
    /// `MemoryStore` never returns it; fallible `KnowledgeStore` backends do.
    #[error("Knowledge store error: {0}")]
    Storage(String),

    /// An I/O error occurred (app layer).
    #[error("I/O error: {0}")]
    Io(String),

    /// The configuration could not be parsed (app layer).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<AnswerError> for KnowledgeError {
    fn from(err: AnswerError) -> Self {
        Self::Answers(AnswersError::Answer(err))
    }
}

impl KnowledgeError {
    /// Whether the caller supplied malformed data, as opposed to an internal failure.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Format(_) | Self::Question(_) | Self::Answers(_))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_messages_embed_the_question() {
        let err = QuestionError::Blank("  ?".to_string());
        assert_eq!(err.to_string(), "The question {'  ?'} is empty or blank!");

        let err = QuestionError::MissingQuestionMark("What is the answer to life".to_string());
        assert_eq!(
            err.to_string(),
            "the question {'What is the answer to life'} does not have a question mark at the end of the question!"
        );
    }

    #[test]
    fn answer_errors_are_transparent_through_the_umbrella() {
        let err: KnowledgeError = AnswerError::Blank(" ".to_string()).into();
        assert_eq!(err.to_string(), "The answer {' '} is empty or blank!");
        assert!(matches!(
            err,
            KnowledgeError::Answers(AnswersError::Answer(AnswerError::Blank(_)))
        ));
    }

    #[test]
    fn client_errors_are_distinguished_from_internal_ones() {
        assert!(KnowledgeError::from(FormatError::MissingSeparator).is_client_error());
        assert!(KnowledgeError::from(AnswersError::NoneGiven).is_client_error());
        assert!(!KnowledgeError::Storage("poisoned".to_string()).is_client_error());
        assert!(!KnowledgeError::Io("denied".to_string()).is_client_error());
    }

    #[test]
    fn entry_serializes_back_to_a_line() {
        let entry = KnowledgeEntry::new("How old is Peter?", vec!["35".to_string()]);
        assert_eq!(entry.to_serialized(), "How old is Peter? \"35\"");
    }
}
