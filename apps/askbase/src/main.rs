//! # askbase - Question/Answer Knowledge Base
//!
//! The main binary for askbase.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                  apps/askbase (THE BINARY)                │
//! │                                                           │
//! │  ┌─────────────┐    ┌─────────────┐    ┌──────────────┐  │
//! │  │   CLI       │    │   Shell     │    │ Config/Seed  │  │
//! │  │  (clap)     │    │ (stdin/out) │    │ (toml/json)  │  │
//! │  └──────┬──────┘    └──────┬──────┘    └──────┬───────┘  │
//! │         └──────────────────┼──────────────────┘          │
//! │                            ▼                             │
//! │                    ┌───────────────┐                     │
//! │                    │ askbase-core  │                     │
//! │                    │  (THE LOGIC)  │                     │
//! │                    └───────────────┘                     │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Interactive shell
//! askbase --config askbase.toml
//!
//! # One-shot operations
//! askbase --seed knowledge.txt ask "How old is Peter?"
//! askbase check 'What color? "red" "blue"'
//! ```

use askbase::cli;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Initialize tracing. ASKBASE_LOG_FORMAT=json enables machine-parseable output.
    // Logs go to stderr; stdout carries answers.
    let log_format = std::env::var("ASKBASE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_log_filter(cli.verbose).into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    // Execute command
    if let Err(e) = cli::execute(cli) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Filter used when `RUST_LOG` is not set.
fn default_log_filter(verbose: bool) -> &'static str {
    if verbose {
        "askbase=debug,askbase_core=debug"
    } else {
        "askbase=info"
    }
}
