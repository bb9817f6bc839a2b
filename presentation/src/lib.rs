//! Presentation layer for group-context
//!
//! This crate contains CLI definitions and output formatters.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ModeArg, OutputFormat, UpdateArgs};
pub use output::console::ConsoleFormatter;
