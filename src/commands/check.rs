use anyhow::Result;
use tracing::debug;

use crate::cli::CheckArgs;

use tag_checker::tag::validate_tags;

pub(crate) fn cmd_check(args: CheckArgs) -> Result<()> {
    debug!(count = args.tags.len(), "checking commit tags");

    validate_tags(&args.tags)?;

    debug!("all commit tags accepted");
    Ok(())
}
