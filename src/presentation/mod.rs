//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with the host wired in
//! - Record output formatting (table/CSV/JSON/YAML)

pub mod cli;
pub mod factory;
pub mod formatter;

pub use cli::{Cli, ColorWhen, Commands, OutputArgs};
pub use formatter::Formatter;
