//! # Seed Knowledge
//!
//! Loads knowledge files into a knowledge base at startup.
//!
//! - Text files: one serialized line per entry, blank lines skipped
//! - JSON files (`.json`): an array of `{ "question": ..., "answers": [...] }`
//!
//! Invalid entries are logged and skipped; the report says which ones.
//! Internal failures abort loading.

use askbase_core::{KnowledgeError, KnowledgeValidator, TextualKnowledgeBase};
use serde::Deserialize;
use std::path::Path;

/// Maximum seed file size (16 MB).
const MAX_SEED_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Outcome of loading one seed source.
#[derive(Debug, Default)]
pub struct SeedReport {
    /// Number of entries added.
    pub added: usize,
    /// Rejected entries as (1-based line or entry number, error).
    pub rejected: Vec<(usize, KnowledgeError)>,
}

impl SeedReport {
    fn record(&mut self, position: usize, result: Result<(), KnowledgeError>) -> Result<(), KnowledgeError> {
        match result {
            Ok(()) => {
                self.added += 1;
                Ok(())
            }
            Err(e) if e.is_client_error() => {
                self.rejected.push((position, e));
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

/// A JSON seed entry. Answers may be `null`, which is rejected as invalid.
#[derive(Debug, Deserialize)]
struct RawEntry {
    question: String,
    answers: Vec<Option<String>>,
}

/// Load serialized lines.
pub fn load_lines(kb: &mut TextualKnowledgeBase, text: &str) -> Result<SeedReport, KnowledgeError> {
    let mut report = SeedReport::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let result = kb.add_serialized(line).map(|_| ());
        report.record(index + 1, result)?;
    }

    Ok(report)
}

/// Load a JSON array of entries.
pub fn load_json(kb: &mut TextualKnowledgeBase, text: &str) -> Result<SeedReport, KnowledgeError> {
    let entries: Vec<RawEntry> = serde_json::from_str(text)
        .map_err(|e| KnowledgeError::Config(format!("Invalid JSON seed: {}", e)))?;

    let mut report = SeedReport::default();

    for (index, entry) in entries.into_iter().enumerate() {
        let result = add_raw(kb, entry);
        report.record(index + 1, result)?;
    }

    Ok(report)
}

/// Load a seed file, choosing the format by extension.
pub fn load_file(kb: &mut TextualKnowledgeBase, path: &Path) -> Result<SeedReport, KnowledgeError> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        KnowledgeError::Io(format!("Cannot read seed '{}': {}", path.display(), e))
    })?;

    if metadata.len() > MAX_SEED_FILE_SIZE {
        return Err(KnowledgeError::Io(format!(
            "Seed size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            MAX_SEED_FILE_SIZE
        )));
    }

    let text = std::fs::read_to_string(path).map_err(|e| {
        KnowledgeError::Io(format!("Cannot read seed '{}': {}", path.display(), e))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let report = if is_json {
        load_json(kb, &text)?
    } else {
        load_lines(kb, &text)?
    };

    tracing::info!(
        path = %path.display(),
        added = report.added,
        rejected = report.rejected.len(),
        "Loaded seed knowledge"
    );

    Ok(report)
}

/// Validate a raw entry in field order, then add it.
fn add_raw(kb: &mut TextualKnowledgeBase, entry: RawEntry) -> Result<(), KnowledgeError> {
    let validator = *kb.validator();
    validator.check_question(&entry.question)?;
    KnowledgeValidator::<String, Option<String>>::validate_answers(&validator, &entry.answers)?;

    let answers = entry.answers.into_iter().flatten().collect();
    kb.add(entry.question, answers)
}

// =============================================================================
// TESTS
// =============================================================================
