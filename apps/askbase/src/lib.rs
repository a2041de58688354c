//! # askbase
//!
//! Library side of the askbase binary: CLI commands, the interactive
//! shell, configuration and seed loading. Integration tests drive the
//! application through this crate.

pub mod cli;
pub mod config;
pub mod seed;

pub use config::{AppConfig, ConfigEntry};
pub use seed::SeedReport;
