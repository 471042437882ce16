use anyhow::Result;
use site_health::domain::entities::CHECK_RESULT_FIELDS;
use site_health::presentation::{factory, OutputArgs};
use tracing::debug;

use super::CommandContext;

const DEFAULT_FIELDS: &[&str] = &["check", "type", "status", "label"];

pub fn cmd_check(ctx: &CommandContext<'_>, output: &OutputArgs) -> Result<()> {
    let formatter = ctx.formatter(output, DEFAULT_FIELDS, CHECK_RESULT_FIELDS)?;
    let host = ctx.load_host()?;
    debug!(source = %host.source_name(), checks = host.definition_count(), "snapshot loaded");

    let results = factory::create_check_use_case(&host, ctx.config).execute()?;

    let mut out = std::io::stdout().lock();
    formatter.display_items(&mut out, &results)?;
    Ok(())
}
