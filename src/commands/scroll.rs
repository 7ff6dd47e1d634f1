use anyhow::Result;
use std::time::Duration;

use crate::cli::ScrollArgs;
use crate::config::Config;
use crate::scroll;

pub fn handle_scroll_command(config: Config, args: &ScrollArgs) -> Result<()> {
    let delay = Duration::from_millis(args.delay.unwrap_or(config.scroll_delay_ms));
    scroll::scroll(&args.text, delay)?;
    Ok(())
}
