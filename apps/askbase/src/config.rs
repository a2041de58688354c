//! # Configuration
//!
//! Optional TOML configuration for the askbase binary.
//!
//! ```toml
//! default_answer = "the answer to life, universe and everything is 42"
//! max_length = 255
//!
//! [[knowledge]]
//! question = "What is Peters favorite food?"
//! answers = ["Pizza", "Spaghetti", "Ice cream"]
//! ```
//!
//! Every field is optional. Predefined knowledge goes through the same
//! validation as anything typed into the shell.

use askbase_core::{
    KnowledgeError, MemoryStore, TextualKnowledgeBase, TextualValidator,
    primitives::{DEFAULT_ANSWER, MAX_FIELD_LENGTH},
};
use serde::Deserialize;
use std::path::Path;

/// Maximum configuration file size (1 MB).
const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Answer returned for unknown questions.
    pub default_answer: String,
    /// Maximum length of questions and answers, in characters.
    pub max_length: usize,
    /// Predefined knowledge.
    pub knowledge: Vec<ConfigEntry>,
}

/// A predefined question with its answers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigEntry {
    pub question: String,
    pub answers: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_answer: DEFAULT_ANSWER.to_string(),
            max_length: MAX_FIELD_LENGTH,
            knowledge: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let metadata = std::fs::metadata(path).map_err(|e| {
            KnowledgeError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(KnowledgeError::Config(format!(
                "Config size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            KnowledgeError::Io(format!("Cannot read config '{}': {}", path.display(), e))
        })?;

        let config = Self::from_toml_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            entries = config.knowledge.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse the configuration from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self, KnowledgeError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| KnowledgeError::Config(e.to_string()))?;

        if config.max_length == 0 {
            return Err(KnowledgeError::Config(
                "max_length must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }

    /// Build a knowledge base holding the predefined knowledge.
    ///
    /// Fails on the first invalid entry.
    pub fn build_knowledge_base(&self) -> Result<TextualKnowledgeBase, KnowledgeError> {
        let mut kb = TextualKnowledgeBase::from_parts(
            MemoryStore::new(),
            TextualValidator::with_max_length(self.max_length),
            self.default_answer.clone(),
        );

        for entry in &self.knowledge {
            kb.add(entry.question.clone(), entry.answers.clone())
                .inspect_err(|e| {
                    tracing::warn!(question = %entry.question, "Rejected predefined knowledge: {}", e);
                })?;
        }

        Ok(kb)
    }
}

// =============================================================================
// TESTS
// =============================================================================
