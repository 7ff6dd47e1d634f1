use anyhow::Result;

use crate::cli::CodeArgs;
use crate::codes;
use crate::config::Config;
use crate::history::HistoryStore;
use crate::utils::print_success;

pub fn handle_code_command(config: Config, kind: &str, args: &CodeArgs) -> Result<()> {
    let store = HistoryStore::new(&config.history_dir);
    let path = codes::generate(kind, &args.text, args.output.as_deref(), &store, &config)?;

    let label = if kind == "qr" { "QR code" } else { "Barcode" };
    print_success(&format!("{} saved as {}", label, path.display()));

    Ok(())
}
