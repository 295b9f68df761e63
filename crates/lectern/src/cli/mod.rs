//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the lectern binary.

mod commands;
mod serve;
mod summarize;

pub use commands::{Cli, Commands};
pub use serve::handle_serve_command;
pub use summarize::handle_summarize_command;
