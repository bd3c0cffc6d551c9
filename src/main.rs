mod cli;
mod commands;
mod logging;

fn main() -> anyhow::Result<()> {
    crate::logging::init();
    crate::cli::run()
}
