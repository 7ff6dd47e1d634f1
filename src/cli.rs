use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{art, codes, convert, list, scroll, stats};
use crate::config::Config;

#[derive(Parser)]
#[command(name = "textmorph")]
#[command(about = "A Rust-based text transformation tool")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Convert(args) => {
                convert::handle_convert_command(config, &args)?;
            }
            Commands::Stats(args) => {
                stats::handle_stats_command(&args)?;
            }
            Commands::Art(args) => {
                art::handle_art_command(config, &args)?;
            }
            Commands::Qr(args) => {
                codes::handle_code_command(config, "qr", &args)?;
            }
            Commands::Barcode(args) => {
                codes::handle_code_command(config, "barcode", &args)?;
            }
            Commands::Scroll(args) => {
                scroll::handle_scroll_command(config, &args)?;
            }
            Commands::List => {
                list::handle_list_command();
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a named transform to the given text
    Convert(ConvertArgs),

    /// Word count, character count and character frequency
    Stats(StatsArgs),

    /// Render text as ASCII art
    Art(ArtArgs),

    /// Generate a QR code PNG from the text
    Qr(CodeArgs),

    /// Generate a Code 128 barcode PNG from the text
    Barcode(CodeArgs),

    /// Print text one character at a time
    Scroll(ScrollArgs),

    /// List the available transform operations
    List,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// Operation name, e.g. reverse, caesar, morse
    pub operation: String,

    /// Input text
    pub text: String,

    /// Signed shift for the caesar cipher
    #[arg(long, allow_negative_numbers = true)]
    pub shift: Option<i32>,

    /// Case target for the case transform: upper or lower
    #[arg(long)]
    pub mode: Option<String>,

    /// Indent width for the shadow transform
    #[arg(long)]
    pub offset: Option<usize>,

    /// Append the result to the operation's history log
    #[arg(short, long)]
    pub save: bool,
}

#[derive(Args)]
pub struct StatsArgs {
    /// Input text
    pub text: String,

    /// Emit the analysis as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ArtArgs {
    /// Input text
    pub text: String,

    /// Frame the art with a box border
    #[arg(short, long)]
    pub border: bool,

    /// Append the result to the operation's history log
    #[arg(short, long)]
    pub save: bool,
}

#[derive(Args)]
pub struct CodeArgs {
    /// Data to encode
    pub text: String,

    /// Output filename without extension
    #[arg(short, long)]
    pub output: Option<String>,
}

#[derive(Args)]
pub struct ScrollArgs {
    /// Input text
    pub text: String,

    /// Milliseconds between characters
    #[arg(long)]
    pub delay: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_args_parse() {
        let cli = Cli::try_parse_from(["textmorph", "convert", "caesar", "hello", "--shift", "7"])
            .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.operation, "caesar");
                assert_eq!(args.text, "hello");
                assert_eq!(args.shift, Some(7));
                assert!(!args.save);
            }
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_convert_accepts_negative_shift() {
        let cli =
            Cli::try_parse_from(["textmorph", "convert", "caesar", "attack", "--shift", "-3"])
                .unwrap();
        match cli.command {
            Commands::Convert(args) => assert_eq!(args.shift, Some(-3)),
            _ => panic!("expected convert command"),
        }
    }

    #[test]
    fn test_qr_args_default_output() {
        let cli = Cli::try_parse_from(["textmorph", "qr", "hello"]).unwrap();
        match cli.command {
            Commands::Qr(args) => {
                assert_eq!(args.text, "hello");
                assert!(args.output.is_none());
            }
            _ => panic!("expected qr command"),
        }
    }
}
