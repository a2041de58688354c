//! # askbase CLI Module
//!
//! This module implements the CLI interface for askbase.
//!
//! ## Available Commands
//!
//! - `shell` - Interactive add/ask loop (default)
//! - `ask` - Answer a single question
//! - `add` - Add a serialized line and show the stored entry
//! - `check` - Validate a serialized line without adding it
//! - `list` - List all known questions and answers
//!
//! Knowledge lives only for the duration of the process. Use `--config`
//! and `--seed` to start from predefined knowledge.

mod commands;
mod shell;

use askbase_core::KnowledgeError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::*;
pub use shell::run_shell;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// askbase - question/answer knowledge base
///
/// Add knowledge as `<question>? "<answer1>" "<answer2>"` and ask it back
/// by exact question text.
#[derive(Parser, Debug)]
#[command(name = "askbase")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner and menu output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed knowledge file (serialized lines, or JSON with a .json extension); repeatable
    #[arg(short, long = "seed", global = true)]
    pub seeds: Vec<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive shell
    Shell,

    /// Answer a question
    Ask {
        /// The question, including its question mark
        question: String,
    },

    /// Add knowledge from a serialized line
    Add {
        /// `<question>? "<answer1>" "<answer2>" ...`
        line: String,
    },

    /// Validate a serialized line without adding it
    Check {
        /// `<question>? "<answer1>" "<answer2>" ...`
        line: String,
    },

    /// List all known questions and answers
    List,
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), KnowledgeError> {
    let mut kb = load_knowledge_base(cli.config.as_deref(), &cli.seeds)?;
    let json_mode = cli.json_mode;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Ask { question }) => cmd_ask(&kb, &mut out, json_mode, &question),
        Some(Commands::Add { line }) => cmd_add(&mut kb, &mut out, json_mode, &line),
        Some(Commands::Check { line }) => cmd_check(&kb, &mut out, json_mode, &line),
        Some(Commands::List) => cmd_list(&kb, &mut out, json_mode),
        Some(Commands::Shell) | None => {
            // No subcommand - interactive shell by default
            let stdin = std::io::stdin();
            cmd_shell(&mut kb, stdin.lock(), &mut out, cli.quiet)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "askbase",
            "ask",
            "How old is Peter?",
            "--seed",
            "a.txt",
            "-s",
            "b.json",
            "--json-mode",
        ])
        .expect("parse");

        assert!(cli.json_mode);
        assert_eq!(cli.seeds, vec![PathBuf::from("a.txt"), PathBuf::from("b.json")]);
        assert!(matches!(
            cli.command,
            Some(Commands::Ask { ref question }) if question == "How old is Peter?"
        ));
    }

    #[test]
    fn no_subcommand_defaults_to_shell() {
        let cli = Cli::try_parse_from(["askbase", "-q"]).expect("parse");
        assert!(cli.quiet);
        assert!(cli.command.is_none());
    }
}
