use anyhow::Result;

use crate::cli::ArtArgs;
use crate::config::Config;
use crate::history::HistoryStore;
use crate::transform::art;
use crate::utils::print_success;

pub fn handle_art_command(config: Config, args: &ArtArgs) -> Result<()> {
    let (mode, rendered) = if args.border {
        ("border", art::bordered_art(&args.text)?)
    } else {
        ("ascii", art::ascii_art(&args.text)?)
    };

    println!("{}", rendered);

    if args.save {
        let store = HistoryStore::new(&config.history_dir);
        let path = store.save(mode, &rendered)?;
        print_success(&format!("Result saved to {}", path.display()));
    }

    Ok(())
}
