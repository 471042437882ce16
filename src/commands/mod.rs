//! Command handlers for the `site-health` binary.

pub mod check;
pub mod info;
pub mod status;

use std::path::Path;

use anyhow::Result;
use site_health::config::Config;
use site_health::infrastructure::HostSnapshot;
use site_health::presentation::{factory, Formatter, OutputArgs};

use crate::ui::context::UiContext;

/// Everything a handler needs besides its own arguments.
pub struct CommandContext<'a> {
    pub config: &'a Config,
    pub ui: UiContext,
    pub snapshot: Option<&'a Path>,
}

impl CommandContext<'_> {
    pub fn load_host(&self) -> Result<HostSnapshot> {
        Ok(factory::load_host(self.snapshot, self.config)?)
    }

    /// Formatter for `--fields`/`--format`, falling back to the configured format.
    pub fn formatter(
        &self,
        output: &OutputArgs,
        defaults: &[&str],
        available: &[&str],
    ) -> Result<Formatter> {
        let format = output.format.unwrap_or(self.config.output.format);
        let formatter =
            Formatter::with_fields(format, output.fields.as_deref(), defaults, available)?;
        Ok(formatter.with_color(self.ui.color))
    }
}
