use anyhow::Result;
use site_health::application::InfoOptions;
use site_health::domain::entities::{INFO_ROW_FIELDS, SECTION_SUMMARY_FIELDS};
use site_health::presentation::{factory, OutputArgs};

use super::CommandContext;

const DEFAULT_INFO_FIELDS: &[&str] = &["field", "label", "value", "debug"];
const DEFAULT_PRIVATE_INFO_FIELDS: &[&str] = &["field", "private", "label", "value", "debug"];

pub fn cmd_list_info_sections(ctx: &CommandContext<'_>, output: &OutputArgs) -> Result<()> {
    let formatter = ctx.formatter(output, SECTION_SUMMARY_FIELDS, SECTION_SUMMARY_FIELDS)?;
    let host = ctx.load_host()?;
    let sections = factory::create_info_use_case(&host).sections()?;

    let mut out = std::io::stdout().lock();
    formatter.display_items(&mut out, &sections)?;
    Ok(())
}

pub fn cmd_info(ctx: &CommandContext<'_>, options: &InfoOptions, output: &OutputArgs) -> Result<()> {
    options.validate()?;
    let defaults = if options.include_private {
        DEFAULT_PRIVATE_INFO_FIELDS
    } else {
        DEFAULT_INFO_FIELDS
    };
    let formatter = ctx.formatter(output, defaults, INFO_ROW_FIELDS)?;
    let host = ctx.load_host()?;
    let rows = factory::create_info_use_case(&host).execute(options)?;

    let mut out = std::io::stdout().lock();
    formatter.display_items(&mut out, &rows)?;
    Ok(())
}
