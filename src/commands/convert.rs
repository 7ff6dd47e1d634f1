use anyhow::Result;

use crate::cli::ConvertArgs;
use crate::commands::stats::print_stats;
use crate::config::Config;
use crate::history::HistoryStore;
use crate::transform::{Operation, TransformOptions, TransformOutcome};
use crate::utils::print_success;

pub fn handle_convert_command(config: Config, args: &ConvertArgs) -> Result<()> {
    let operation = Operation::from_name(&args.operation)?;

    let options = TransformOptions {
        case_mode: args.mode.clone().unwrap_or_else(|| "upper".to_string()),
        shift: args.shift.unwrap_or(config.default_shift),
        shadow_offset: args.offset.unwrap_or(config.shadow_offset),
    };

    let mut rng = rand::rng();
    let outcome = operation.apply(&args.text, &options, &mut rng)?;

    match &outcome {
        TransformOutcome::Text(result) => {
            println!("{}", result);
            if args.save {
                let store = HistoryStore::new(&config.history_dir);
                let path = store.save(operation.name(), result)?;
                print_success(&format!("Result saved to {}", path.display()));
            }
        }
        TransformOutcome::Analysis(stats) => {
            print_stats(stats);
        }
    }

    Ok(())
}
