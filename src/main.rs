use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = taskpad::cli::Cli::parse();
    taskpad::telemetry::init(cli.log_level.as_deref())?;

    let options = taskpad::config::from_cli(&cli);
    taskpad::tui::run(options)?;

    Ok(())
}
