//! Provscreen CLI library.
//!
//! Batch screening of collection records from the command line: loading
//! record exports, running the classifier over them, and rendering reports.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::{Formatter, ReportEntry};
