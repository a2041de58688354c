//! # Knowledge Base
//!
//! Composes a store, a validator and a default answer.
//!
//! - `ask` validates the question, then looks it up by exact key
//! - `add` validates the question, then the answers, and only then writes
//! - A rejected call never touches the store
//!
//! The textual flavour additionally accepts serialized lines through
//! [`TextualKnowledgeBase::add_serialized`].

use crate::parser::parse;
use crate::primitives::DEFAULT_ANSWER;
use crate::store::{KnowledgeStore, MemoryStore};
use crate::validation::{KnowledgeValidator, TextualValidator};
use crate::{KnowledgeEntry, KnowledgeError};
use std::collections::BTreeMap;
use std::marker::PhantomData;

/// A question/answer knowledge base.
///
/// Generic over the question type `Q`, the answer type `A`, the store `S`
/// and the validator `V`.
#[derive(Debug, Clone)]
pub struct KnowledgeBase<Q, A, S, V> {
    store: S,
    validator: V,
    default_answer: A,
    _question: PhantomData<Q>,
}

/// Knowledge base with plain-text questions and answers held in memory.
pub type TextualKnowledgeBase =
    KnowledgeBase<String, String, MemoryStore<String, String>, TextualValidator>;

impl<Q, A, S, V> KnowledgeBase<Q, A, S, V>
where
    A: Clone,
    S: KnowledgeStore<Q, A>,
    V: KnowledgeValidator<Q, A>,
{
    /// Create a knowledge base from its parts.
    pub fn from_parts(store: S, validator: V, default_answer: A) -> Self {
        Self {
            store,
            validator,
            default_answer,
            _question: PhantomData,
        }
    }

    /// Answer a question.
    ///
    /// Returns the stored answers, or the default answer as the only item
    /// if the question is unknown.
    ///
    /// # Errors
    /// `KnowledgeError::Question` if the question is invalid, or a storage
    /// error from the backend.
    pub fn ask(&self, question: &Q) -> Result<Vec<A>, KnowledgeError> {
        self.validator.validate_question(question)?;

        Ok(self
            .store
            .get(question)?
            .unwrap_or_else(|| vec![self.default_answer.clone()]))
    }

    /// Add a question with its answers, replacing any previous answers.
    ///
    /// # Errors
    /// The first violated rule, question before answers. Nothing is written
    /// on error.
    pub fn add(&mut self, question: Q, answers: Vec<A>) -> Result<(), KnowledgeError> {
        self.validator.validate_question(&question)?;
        self.validator.validate_answers(&answers)?;
        self.store.put(question, answers)
    }

    /// All stored knowledge.
    pub fn knowledge(&self) -> Result<Vec<(Q, Vec<A>)>, KnowledgeError> {
        self.store.entries()
    }

    /// Number of known questions.
    pub fn len(&self) -> Result<usize, KnowledgeError> {
        self.store.len()
    }

    /// Whether no knowledge has been added yet.
    pub fn is_empty(&self) -> Result<bool, KnowledgeError> {
        self.store.is_empty()
    }

    /// The answer given for unknown questions.
    pub fn default_answer(&self) -> &A {
        &self.default_answer
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The validator in use.
    pub fn validator(&self) -> &V {
        &self.validator
    }
}

// =============================================================================
// TEXTUAL KNOWLEDGE BASE
// =============================================================================

impl Default for TextualKnowledgeBase {
    fn default() -> Self {
        Self::from_parts(
            MemoryStore::new(),
            TextualValidator::new(),
            DEFAULT_ANSWER.to_string(),
        )
    }
}

impl TextualKnowledgeBase {
    /// Create an empty knowledge base with the default answer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a knowledge base with predefined knowledge and a default answer.
    ///
    /// The predefined knowledge is taken as-is; it is trusted input.
    #[must_use]
    pub fn with_knowledge(
        knowledge: BTreeMap<String, Vec<String>>,
        default_answer: impl Into<String>,
    ) -> Self {
        Self::from_parts(
            MemoryStore::from(knowledge),
            TextualValidator::new(),
            default_answer.into(),
        )
    }

    /// Add knowledge from a serialized line.
    ///
    /// `<question>? "<answer1>" "<answer2>" ... "<answerX>"`
    ///
    /// Returns the entry as stored.
    ///
    /// # Errors
    /// - `KnowledgeError::Format` if the line is malformed
    /// - `KnowledgeError::Question` / `KnowledgeError::Answers` if a field is invalid
    pub fn add_serialized(&mut self, line: &str) -> Result<KnowledgeEntry, KnowledgeError> {
        let entry = parse(line)?;
        self.add(entry.question.clone(), entry.answers.clone())?;
        Ok(entry)
    }

    /// Look up a question given as a string slice.
    pub fn ask_str(&self, question: &str) -> Result<Vec<String>, KnowledgeError> {
        self.ask(&question.to_string())
    }

    /// All stored knowledge as entries.
    pub fn entries(&self) -> Result<Vec<KnowledgeEntry>, KnowledgeError> {
        Ok(self
            .knowledge()?
            .into_iter()
            .map(|(question, answers)| KnowledgeEntry { question, answers })
            .collect())
    }
}

// =============================================================================
// TESTS
// =============================================================================
