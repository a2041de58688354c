//! # Interactive Shell
//!
//! Menu-driven loop over any `BufRead`/`Write` pair.
//!
//! ```text
//! 1) Add knowledge      <question>? "<answer1>" "<answer2>" ...
//! 2) Ask a question     <question>?
//! 3) List knowledge
//! q) Quit
//! ```
//!
//! Invalid input is reported and the loop goes on. The loop ends on `q` or
//! end of input.

use super::commands::{emit, write_entry};
use askbase_core::{KnowledgeError, TextualKnowledgeBase};
use std::io::{BufRead, Write};

const MENU: &str = "\
1) Add knowledge
2) Ask a question
3) List knowledge
q) Quit";

/// A single menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Add,
    Ask,
    List,
    Quit,
}

impl Choice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" | "add" => Some(Self::Add),
            "2" | "ask" => Some(Self::Ask),
            "3" | "list" => Some(Self::List),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Run the shell until the user quits or input ends.
pub fn run_shell<R: BufRead, W: Write>(
    kb: &mut TextualKnowledgeBase,
    mut input: R,
    out: &mut W,
    show_menu: bool,
) -> Result<(), KnowledgeError> {
    if show_menu {
        emit(out, MENU)?;
    }

    loop {
        prompt(out, "> ")?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let choice = match Choice::parse(&line) {
            Some(choice) => choice,
            None if line.trim().is_empty() => continue,
            None => {
                emit(out, format!("Unknown option '{}'", line.trim()))?;
                emit(out, MENU)?;
                continue;
            }
        };

        match choice {
            Choice::Add => {
                prompt(out, "question and answers> ")?;
                let Some(line) = read_line(&mut input)? else {
                    break;
                };
                match kb.add_serialized(&line) {
                    Ok(entry) => {
                        tracing::info!(question = %entry.question, answers = entry.answers.len(), "Knowledge added");
                        emit(out, format!("Added: {}", entry.question))?;
                    }
                    Err(e) if e.is_client_error() => emit(out, format!("Error: {}", e))?,
                    Err(e) => return Err(e),
                }
            }
            Choice::Ask => {
                prompt(out, "question> ")?;
                let Some(line) = read_line(&mut input)? else {
                    break;
                };
                match kb.ask_str(&line) {
                    Ok(answers) => {
                        for answer in &answers {
                            emit(out, answer)?;
                        }
                    }
                    Err(e) if e.is_client_error() => emit(out, format!("Error: {}", e))?,
                    Err(e) => return Err(e),
                }
            }
            Choice::List => {
                let entries = kb.entries()?;
                if entries.is_empty() {
                    emit(out, "No knowledge yet")?;
                }
                for entry in &entries {
                    write_entry(out, entry)?;
                }
            }
            Choice::Quit => break,
        }
    }

    Ok(())
}

fn prompt<W: Write>(out: &mut W, text: &str) -> Result<(), KnowledgeError> {
    write!(out, "{}", text)
        .and_then(|()| out.flush())
        .map_err(|e| KnowledgeError::Io(format!("Write prompt: {}", e)))
}

/// Read one line without its line terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, KnowledgeError> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| KnowledgeError::Io(format!("Read input: {}", e)))?;

    if read == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

// =============================================================================
// TESTS
// =============================================================================
