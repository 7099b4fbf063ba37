//! Presentation layer for quotebox
//!
//! This crate contains the CLI definition, console output, document file
//! I/O and the interactive REPL. It plays the presentation boundary for the
//! widget: it implements [`QuotePresenter`](quotebox_application::QuotePresenter)
//! and turns user input into widget calls.

pub mod cli;
pub mod config;
pub mod documents;
pub mod output;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::OutputConfig;
pub use documents::{export_to, import_from, read_document, write_document};
pub use output::console::{ConsoleFormatter, ConsolePresenter};
pub use repl::{ReplCommand, WidgetRepl};
