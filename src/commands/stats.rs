use anyhow::Result;

use crate::cli::StatsArgs;
use crate::transform::analysis::{self, TextStats};
use crate::utils::OutputStyle;

pub fn handle_stats_command(args: &StatsArgs) -> Result<()> {
    let stats = analysis::analyze(&args.text);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }

    Ok(())
}

/// Print the analysis in the styled field format.
pub fn print_stats(stats: &TextStats) {
    OutputStyle::print_header("🤓 Text Statistics");

    OutputStyle::print_field_colored("Words", &stats.word_count.to_string(), OutputStyle::info);
    OutputStyle::print_field_colored(
        "Characters",
        &stats.char_count.to_string(),
        OutputStyle::info,
    );

    if stats.char_frequency.is_empty() {
        return;
    }

    println!("\n{}:", OutputStyle::header("Character frequency"));
    let mut sorted: Vec<_> = stats.char_frequency.iter().collect();
    sorted.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));

    for (c, count) in sorted {
        let shown = if *c == ' ' { "␣".to_string() } else { c.to_string() };
        println!("  {}: {}", OutputStyle::label(&shown), OutputStyle::info(&count.to_string()));
    }
}
