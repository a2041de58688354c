//! # Primitives
//!
//! Fixed constants for the askbase CORE.
//!
//! These are compiled into the binary. The maximum field length can be
//! overridden per validator instance, everything else is immutable.

/// Maximum length of a question or an answer, in characters.
///
/// For questions the trailing question mark counts towards the limit.
pub const MAX_FIELD_LENGTH: usize = 255;

/// Separates the question from its answers and terminates every question.
pub const QUESTION_MARK: char = '?';

/// Delimits a single answer in a serialized line.
pub const QUOTE: char = '"';

/// Answer returned for questions that are not in the knowledge base.
pub const DEFAULT_ANSWER: &str = "the answer to life, universe and everything is 42";
