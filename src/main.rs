use anyhow::{Context, Result};
use json_pydantic::cli::CommandLineInterface;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("failed to install log subscriber")
}

fn main() -> Result<()> {
    let command_line_interface = CommandLineInterface::load();
    init_tracing(command_line_interface.verbose())?;
    command_line_interface.run()
}
