//! # askbase-core
//!
//! The question/answer knowledge engine for askbase - THE LOGIC.
//!
//! Knowledge is submitted either as a question with its answers, or as one
//! serialized line:
//!
//! ```text
//! <question>? "<answer1>" "<answer2>" ... "<answerX>"
//! ```
//!
//! A line flows through three stateless stages before it reaches storage:
//!
//! 1. `format` - the line has a question mark separator and balanced quotes
//! 2. `parser` - the line is split into a question and ordered answers
//! 3. `validation` - each field satisfies the content rules
//!
//! ## Architectural Constraints
//!
//! - No I/O, no async, no logging; the app layer owns those concerns
//! - Validation and parsing are pure and safe to call from any thread
//! - Storage is written only after every check has passed
//!
//! ```
//! use askbase_core::TextualKnowledgeBase;
//!
//! let mut kb = TextualKnowledgeBase::new();
//! kb.add_serialized(r#"How old is Peter? "35""#).expect("valid line");
//! assert_eq!(kb.ask_str("How old is Peter?").expect("valid question"), vec!["35"]);
//! ```

// =============================================================================
// MODULES
// =============================================================================

pub mod format;
pub mod knowledge;
pub mod parser;
pub mod primitives;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{
    AnswerError, AnswersError, FormatError, KnowledgeEntry, KnowledgeError, QuestionError,
};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use format::{split_serialized, validate_format};
pub use knowledge::{KnowledgeBase, TextualKnowledgeBase};
pub use parser::{QuotedAnswers, parse};
pub use store::{KnowledgeStore, MemoryStore};
pub use validation::{KnowledgeValidator, TextualValidator};
