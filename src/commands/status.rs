use anyhow::Result;
use site_health::presentation::factory;

use super::CommandContext;

pub fn cmd_status(ctx: &CommandContext<'_>) -> Result<()> {
    let host = ctx.load_host()?;
    let report = factory::create_status_use_case(&host, ctx.config).execute()?;

    println!("{}", report.token());
    Ok(())
}
