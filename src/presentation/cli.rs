//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--snapshot, --color, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::OutputFormat;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// site-health - inspect a site's health checks and debug information
#[derive(Parser, Debug)]
#[command(name = "site-health")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Site health snapshot exported by the host (`-` reads stdin)
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// `--fields` and `--format`, shared by the listing commands
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Limit the output to specific fields (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,

    /// Render output in a particular format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run site health checks
    Check {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Check site health status (good, recommended, critical)
    Status,

    /// List site health info sections
    ListInfoSections {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Display site health info
    Info {
        /// Section slug
        section: Option<String>,

        /// Display info for all sections
        #[arg(long)]
        all: bool,

        /// Display private fields
        #[arg(long)]
        private: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
}
