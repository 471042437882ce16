//! site-health CLI - run a site's health checks and inspect its debug information
//!
//! Usage: site-health <COMMAND>
//!
//! Commands:
//!   check               Run site health checks
//!   status              Print the overall verdict (good, recommended, critical)
//!   list-info-sections  List debug information sections
//!   info                Display debug information fields

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use site_health::application::InfoOptions;
use site_health::config::Config;
use site_health::presentation::{Cli, Commands};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use commands::CommandContext;

/// Overrides the `-v` derived log level, using `EnvFilter` directives.
const LOG_ENV: &str = "SITE_HEALTH_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        ui::error::print_error(&err);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn run(cli: Cli) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(Some(&project_root))?;
    for warning in &warnings {
        warn!("{}", ui::error::format_config_warning(warning));
    }

    let ctx = CommandContext {
        config: &config,
        ui: ui::context::UiContext::new(cli.color, &config),
        snapshot: cli.snapshot.as_deref(),
    };

    match cli.command {
        Commands::Check { output } => commands::check::cmd_check(&ctx, &output),
        Commands::Status => commands::status::cmd_status(&ctx),
        Commands::ListInfoSections { output } => {
            commands::info::cmd_list_info_sections(&ctx, &output)
        }
        Commands::Info {
            section,
            all,
            private,
            output,
        } => {
            let options = InfoOptions {
                section,
                all,
                include_private: private,
            };
            commands::info::cmd_info(&ctx, &options, &output)
        }
    }
}
