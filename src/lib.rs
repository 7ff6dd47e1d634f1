//! Textmorph - A Rust-based text transformation tool
//!
//! This library provides a registry of named text transforms (reverse,
//! caesar, morse, braille and friends), an append-only per-operation
//! history log, and QR/barcode image generation.

pub mod cli;
pub mod codes;
pub mod commands;
pub mod config;
pub mod history;
pub mod scroll;
pub mod transform;
pub mod utils;

// Re-export core types for easier use
pub use history::HistoryStore;
pub use transform::{ALL_OPERATIONS, Operation, TransformOptions, TransformOutcome};
pub use utils::error::{AppResult, TransformError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
pub struct Textmorph {
    config: config::Config,
}

impl Textmorph {
    /// Create a new Textmorph instance with the given configuration
    pub fn new(config: config::Config) -> Self {
        Self { config }
    }

    /// Apply a named operation with the default options and the
    /// process-wide random source.
    pub fn transform(&self, operation: &str, text: &str) -> AppResult<TransformOutcome> {
        let op = Operation::from_name(operation)?;
        let options = TransformOptions {
            shift: self.config.default_shift,
            shadow_offset: self.config.shadow_offset,
            ..TransformOptions::default()
        };
        op.apply(text, &options, &mut rand::rng())
    }

    /// History store rooted at the configured directory.
    pub fn history(&self) -> HistoryStore {
        HistoryStore::new(&self.config.history_dir)
    }
}
