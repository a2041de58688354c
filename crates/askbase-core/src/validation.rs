//! # Field Validator
//!
//! Content rules for questions and answers, applied to freshly parsed
//! fields and to knowledge submitted directly as (question, answers).
//!
//! Checks run in a fixed order and the first violation is reported:
//!
//! | Field    | Order                                                     |
//! |----------|-----------------------------------------------------------|
//! | question | empty, too long, missing question mark, blank             |
//! | answers  | none given, then per answer: absent, too long, blank      |

use crate::primitives::{MAX_FIELD_LENGTH, QUESTION_MARK};
use crate::{AnswerError, AnswersError, QuestionError};

// =============================================================================
// VALIDATOR CAPABILITY
// =============================================================================

/// Validates knowledge before it reaches a store.
///
/// Generic over the question type `Q` and the answer type `A` so that
/// non-textual knowledge can plug in its own rules.
pub trait KnowledgeValidator<Q, A> {
    /// Validate a single question.
    fn validate_question(&self, question: &Q) -> Result<(), QuestionError>;

    /// Validate a list of answers, stopping at the first invalid one.
    fn validate_answers(&self, answers: &[A]) -> Result<(), AnswersError>;
}

// =============================================================================
// TEXTUAL VALIDATOR
// =============================================================================

/// Validator for plain-text questions and answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextualValidator {
    max_length: usize,
}

impl Default for TextualValidator {
    fn default() -> Self {
        Self {
            max_length: MAX_FIELD_LENGTH,
        }
    }
}

impl TextualValidator {
    /// Create a validator with the default limit of 255 characters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with a custom field length limit.
    #[must_use]
    pub const fn with_max_length(max_length: usize) -> Self {
        Self { max_length }
    }

    /// The field length limit, in characters.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validate a question string.
    pub fn check_question(&self, question: &str) -> Result<(), QuestionError> {
        if question.is_empty() {
            return Err(QuestionError::Empty);
        }

        if question.chars().count() > self.max_length {
            return Err(QuestionError::TooLong {
                question: question.to_string(),
                max: self.max_length,
            });
        }

        let Some(body) = question.strip_suffix(QUESTION_MARK) else {
            return Err(QuestionError::MissingQuestionMark(question.to_string()));
        };

        if is_blank(body) {
            return Err(QuestionError::Blank(question.to_string()));
        }

        Ok(())
    }

    /// Validate a single answer. `None` stands for an absent answer.
    pub fn check_answer(&self, answer: Option<&str>) -> Result<(), AnswerError> {
        let answer = answer.ok_or(AnswerError::Invalid)?;

        if answer.chars().count() > self.max_length {
            return Err(AnswerError::TooLong {
                answer: answer.to_string(),
                max: self.max_length,
            });
        }

        if is_blank(answer) {
            return Err(AnswerError::Blank(answer.to_string()));
        }

        Ok(())
    }

    fn check_answers<'a>(
        &self,
        answers: impl ExactSizeIterator<Item = Option<&'a str>>,
    ) -> Result<(), AnswersError> {
        if answers.len() == 0 {
            return Err(AnswersError::NoneGiven);
        }

        for answer in answers {
            self.check_answer(answer)?;
        }

        Ok(())
    }
}

/// Unicode whitespace without the non-breaking spaces, plus the ASCII
/// information separators U+001C..=U+001F.
fn field_whitespace(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}

/// Empty, or whitespace only.
fn is_blank(s: &str) -> bool {
    s.chars().all(field_whitespace)
}

impl KnowledgeValidator<String, String> for TextualValidator {
    fn validate_question(&self, question: &String) -> Result<(), QuestionError> {
        self.check_question(question)
    }

    fn validate_answers(&self, answers: &[String]) -> Result<(), AnswersError> {
        self.check_answers(answers.iter().map(|a| Some(a.as_str())))
    }
}

/// Raw answers from structured input, where an answer may be missing.
impl KnowledgeValidator<String, Option<String>> for TextualValidator {
    fn validate_question(&self, question: &String) -> Result<(), QuestionError> {
        self.check_question(question)
    }

    fn validate_answers(&self, answers: &[Option<String>]) -> Result<(), AnswersError> {
        self.check_answers(answers.iter().map(|a| a.as_deref()))
    }
}

// =============================================================================
// TESTS
// =============================================================================
