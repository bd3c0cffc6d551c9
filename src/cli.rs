use anyhow::Result;
use clap::{Args, Parser};

use crate::commands;

#[derive(Parser, Debug)]
#[command(
    name = "tag-check",
    version,
    about = "Fail unless every tag is in the form sprint_X.Y or special_...",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    #[command(flatten)]
    check: CheckArgs,
}

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Tags to check, in order (the first invalid one is reported)
    #[arg(value_name = "TAG", allow_hyphen_values = true)]
    pub(crate) tags: Vec<String>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    commands::check::cmd_check(cli.check)
}
