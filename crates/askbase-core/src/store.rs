//! # Knowledge Store
//!
//! The storage capability behind a knowledge base.
//!
//! A store maps a question to its ordered answers by exact key. It does no
//! validation of its own; callers validate before `put`.

use crate::KnowledgeError;
use std::collections::BTreeMap;

// =============================================================================
// STORE CAPABILITY
// =============================================================================

/// Exact-key storage of questions and their answers.
///
/// All operations return `Result<T, KnowledgeError>` so that backends which
/// can fail internally are handled the same way as the in-memory one.
pub trait KnowledgeStore<Q, A> {
    /// Get the answers stored for a question, if any.
    fn get(&self, question: &Q) -> Result<Option<Vec<A>>, KnowledgeError>;

    /// Store answers for a question, replacing any previous answers entirely.
    fn put(&mut self, question: Q, answers: Vec<A>) -> Result<(), KnowledgeError>;

    /// All stored entries.
    fn entries(&self) -> Result<Vec<(Q, Vec<A>)>, KnowledgeError>;

    /// Number of stored questions.
    fn len(&self) -> Result<usize, KnowledgeError>;

    /// Whether the store holds no questions.
    fn is_empty(&self) -> Result<bool, KnowledgeError> {
        Ok(self.len()? == 0)
    }
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// In-memory store backed by a `BTreeMap`.
///
/// Listings come out in question order, answers keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryStore<Q: Ord, A> {
    knowledge: BTreeMap<Q, Vec<A>>,
}

impl<Q: Ord, A> Default for MemoryStore<Q, A> {
    fn default() -> Self {
        Self {
            knowledge: BTreeMap::new(),
        }
    }
}

impl<Q: Ord, A> MemoryStore<Q, A> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Q: Ord, A> From<BTreeMap<Q, Vec<A>>> for MemoryStore<Q, A> {
    fn from(knowledge: BTreeMap<Q, Vec<A>>) -> Self {
        Self { knowledge }
    }
}

impl<Q: Ord, A> FromIterator<(Q, Vec<A>)> for MemoryStore<Q, A> {
    fn from_iter<I: IntoIterator<Item = (Q, Vec<A>)>>(iter: I) -> Self {
        Self {
            knowledge: iter.into_iter().collect(),
        }
    }
}

impl<Q: Ord + Clone, A: Clone> KnowledgeStore<Q, A> for MemoryStore<Q, A> {
    fn get(&self, question: &Q) -> Result<Option<Vec<A>>, KnowledgeError> {
        Ok(self.knowledge.get(question).cloned())
    }

    fn put(&mut self, question: Q, answers: Vec<A>) -> Result<(), KnowledgeError> {
        self.knowledge.insert(question, answers);
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(Q, Vec<A>)>, KnowledgeError> {
        Ok(self
            .knowledge
            .iter()
            .map(|(q, a)| (q.clone(), a.clone()))
            .collect())
    }

    fn len(&self) -> Result<usize, KnowledgeError> {
        Ok(self.knowledge.len())
    }
}

// =============================================================================
// TESTS
// =============================================================================
