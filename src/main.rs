use anyhow::Result;
use clap::Parser;

use textmorph::cli::Cli;
use textmorph::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = if let Some(config_path) = &cli.config {
        Config::load_from(config_path)?
    } else {
        Config::load()?
    };

    cli.command.execute(config)?;

    Ok(())
}
