//! Domain Value Objects
//!
//! Small immutable types shared by configuration, use cases and the CLI.

mod async_policy;
mod config_warning;
mod output_format;

pub use async_policy::AsyncPolicy;
pub use config_warning::ConfigWarning;
pub use output_format::OutputFormat;
