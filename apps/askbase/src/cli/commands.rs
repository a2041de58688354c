//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.
//! Every command writes to the given writer so it can run against stdout
//! or a buffer.

use crate::config::AppConfig;
use crate::seed;
use askbase_core::{KnowledgeEntry, KnowledgeError, KnowledgeValidator, TextualKnowledgeBase, parse};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Write one line of output.
pub(crate) fn emit<W: Write>(out: &mut W, line: impl Display) -> Result<(), KnowledgeError> {
    writeln!(out, "{}", line).map_err(|e| KnowledgeError::Io(format!("Write output: {}", e)))
}

/// Write an entry as its question followed by indented answers.
pub(crate) fn write_entry<W: Write>(out: &mut W, entry: &KnowledgeEntry) -> Result<(), KnowledgeError> {
    emit(out, &entry.question)?;
    for answer in &entry.answers {
        emit(out, format!("  - {}", answer))?;
    }
    Ok(())
}

fn emit_json<W: Write>(out: &mut W, value: &impl serde::Serialize) -> Result<(), KnowledgeError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| KnowledgeError::Io(format!("Serialize output: {}", e)))?;
    emit(out, json)
}

// =============================================================================
// SHELL COMMAND
// =============================================================================

/// Run the interactive shell.
pub fn cmd_shell<R: BufRead, W: Write>(
    kb: &mut TextualKnowledgeBase,
    input: R,
    out: &mut W,
    quiet: bool,
) -> Result<(), KnowledgeError> {
    if !quiet {
        emit(out, format!("askbase v{}", env!("CARGO_PKG_VERSION")))?;
        emit(
            out,
            format!(
                "{} question(s) known. Unknown questions are answered with: {}",
                kb.len()?,
                kb.default_answer()
            ),
        )?;
        emit(out, "")?;
    }

    super::shell::run_shell(kb, input, out, !quiet)
}

// =============================================================================
// ASK COMMAND
// =============================================================================

/// Answer a question, one answer per line.
pub fn cmd_ask<W: Write>(
    kb: &TextualKnowledgeBase,
    out: &mut W,
    json_mode: bool,
    question: &str,
) -> Result<(), KnowledgeError> {
    let answers = kb.ask_str(question)?;
    tracing::debug!(question, answers = answers.len(), "Answered question");

    if json_mode {
        return emit_json(out, &answers);
    }

    for answer in &answers {
        emit(out, answer)?;
    }
    Ok(())
}

// =============================================================================
// ADD COMMAND
// =============================================================================

/// Add a serialized line and print the stored entry.
pub fn cmd_add<W: Write>(
    kb: &mut TextualKnowledgeBase,
    out: &mut W,
    json_mode: bool,
    line: &str,
) -> Result<(), KnowledgeError> {
    let entry = kb.add_serialized(line)?;
    tracing::info!(question = %entry.question, answers = entry.answers.len(), "Knowledge added");

    if json_mode {
        return emit_json(out, &entry);
    }

    write_entry(out, &entry)?;
    emit(out, format!("{} question(s) known", kb.len()?))
}

// =============================================================================
// CHECK COMMAND
// =============================================================================

/// Validate a serialized line without adding it.
pub fn cmd_check<W: Write>(
    kb: &TextualKnowledgeBase,
    out: &mut W,
    json_mode: bool,
    line: &str,
) -> Result<(), KnowledgeError> {
    let entry = parse(line)?;

    let validator = kb.validator();
    validator.check_question(&entry.question)?;
    KnowledgeValidator::<String, String>::validate_answers(validator, &entry.answers)?;

    if json_mode {
        return emit_json(out, &entry);
    }

    emit(out, "OK")?;
    write_entry(out, &entry)
}

// =============================================================================
// LIST COMMAND
// =============================================================================

/// List all known questions with their answers.
pub fn cmd_list<W: Write>(
    kb: &TextualKnowledgeBase,
    out: &mut W,
    json_mode: bool,
) -> Result<(), KnowledgeError> {
    let entries = kb.entries()?;

    if json_mode {
        return emit_json(out, &entries);
    }

    if entries.is_empty() {
        return emit(out, "No knowledge yet");
    }

    for entry in &entries {
        write_entry(out, entry)?;
    }
    Ok(())
}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Build the session knowledge base from the config file and seed files.
pub fn load_knowledge_base(
    config_path: Option<&Path>,
    seeds: &[PathBuf],
) -> Result<TextualKnowledgeBase, KnowledgeError> {
    let config = match config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    let mut kb = config.build_knowledge_base()?;

    for path in seeds {
        let report = seed::load_file(&mut kb, path)?;
        for (position, e) in &report.rejected {
            tracing::warn!(path = %path.display(), position, "Rejected: {}", e);
        }
    }

    tracing::debug!(questions = kb.len()?, "Knowledge base ready");
    Ok(kb)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<(), KnowledgeError>) -> String {
        let mut out = Vec::new();
        run(&mut out).expect("command");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn ask_prints_one_answer_per_line() {
        let mut kb = TextualKnowledgeBase::new();
        kb.add_serialized("Colors? \"red\" \"blue\"").expect("add");

        let text = output(|out| cmd_ask(&kb, out, false, "Colors?"));
        assert_eq!(text, "red\nblue\n");
    }

    #[test]
    fn ask_json_mode_prints_array() {
        let kb = TextualKnowledgeBase::new();
        let text = output(|out| cmd_ask(&kb, out, true, "What is 2+2?"));

        let answers: Vec<String> = serde_json::from_str(&text).expect("json");
        assert_eq!(answers, vec!["the answer to life, universe and everything is 42"]);
    }

    #[test]
    fn check_does_not_add() {
        let kb = TextualKnowledgeBase::new();
        let text = output(|out| cmd_check(&kb, out, false, "Age? \"35\""));

        assert!(text.starts_with("OK\nAge?\n  - 35\n"));
        assert!(kb.is_empty().expect("empty"));
    }

    #[test]
    fn check_reports_field_errors() {
        let kb = TextualKnowledgeBase::new();
        let mut out = Vec::new();
        let err = cmd_check(&kb, &mut out, false, "Age? \" \"").expect_err("blank");
        assert_eq!(err.to_string(), "The answer {' '} is empty or blank!");
        assert!(out.is_empty());
    }

    #[test]
    fn add_json_mode_prints_entry() {
        let mut kb = TextualKnowledgeBase::new();
        let text = output(|out| cmd_add(&mut kb, out, true, "Age? \"35\""));

        let entry: KnowledgeEntry = serde_json::from_str(&text).expect("json");
        assert_eq!(entry, KnowledgeEntry::new("Age?", vec!["35".to_string()]));
    }

    #[test]
    fn list_prints_entries() {
        let mut kb = TextualKnowledgeBase::new();
        kb.add_serialized("B? \"b\"").expect("add");
        kb.add_serialized("A? \"a1\" \"a2\"").expect("add");

        let text = output(|out| cmd_list(&kb, out, false));
        assert_eq!(text, "A?\n  - a1\n  - a2\nB?\n  - b\n");
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let result = load_knowledge_base(Some(Path::new("/nonexistent/askbase.toml")), &[]);
        assert!(matches!(result, Err(KnowledgeError::Io(_))));
    }
}
