//! Append-only conversion history
//!
//! One text log per operation under a fixed root directory, plus
//! dedicated subdirectories for generated QR code and barcode images.
//! Logs are write-only from this library's perspective: entries are
//! newline-prefixed raw text, never read back, never rotated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::utils::{AppResult, TransformError};

/// Fixed operation-name to log-file mapping.
const HISTORY_FILES: [(&str, &str); 16] = [
    ("reverse", "reverse_history.txt"),
    ("flip", "flip_history.txt"),
    ("enchant", "enchant_history.txt"),
    ("case", "case_history.txt"),
    ("leetspeak", "leetspeak_history.txt"),
    ("scramble", "scramble_history.txt"),
    ("piglatin", "piglatin_history.txt"),
    ("caesar", "caesar_history.txt"),
    ("ascii", "ascii_history.txt"),
    ("border", "border_history.txt"),
    ("zalgo", "zalgo_history.txt"),
    ("morse", "morse_history.txt"),
    ("binary", "binary_history.txt"),
    ("braille", "braille_history.txt"),
    ("shadow", "shadow_history.txt"),
    ("emoticons", "emoticons_history.txt"),
];

const QR_DIR: &str = "qr_codes";
const BARCODE_DIR: &str = "barcodes";

/// Append-only history store rooted at a fixed directory.
pub struct HistoryStore {
    root: PathBuf,
}

impl HistoryStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Log file path for an operation name, without touching the disk.
    ///
    /// Fails with a lookup error for names outside the fixed mapping.
    pub fn log_path(&self, operation: &str) -> AppResult<PathBuf> {
        HISTORY_FILES
            .iter()
            .find(|(name, _)| *name == operation)
            .map(|(_, file)| self.root.join(file))
            .ok_or_else(|| TransformError::UnknownOperation(operation.to_string()))
    }

    /// Append a result to the operation's log, creating the history
    /// directory on demand. Returns the log file path.
    ///
    /// Entries are prefixed with a newline, so concurrent writers may
    /// interleave at the OS's append granularity; no locking is done.
    pub fn save(&self, operation: &str, result: &str) -> AppResult<PathBuf> {
        let path = self.log_path(operation)?;
        std::fs::create_dir_all(&self.root)?;

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        write!(file, "\n{}", result)?;
        Ok(path)
    }

    /// Path for a generated QR code image, creating `qr_codes/` on
    /// demand. The default filename applies when none is supplied.
    pub fn qr_path(&self, filename: Option<&str>) -> AppResult<PathBuf> {
        self.image_path(QR_DIR, filename.unwrap_or("qr_code"))
    }

    /// Path for a generated barcode image, creating `barcodes/` on
    /// demand. The default filename applies when none is supplied.
    pub fn barcode_path(&self, filename: Option<&str>) -> AppResult<PathBuf> {
        self.image_path(BARCODE_DIR, filename.unwrap_or("barcode"))
    }

    fn image_path(&self, subdir: &str, filename: &str) -> AppResult<PathBuf> {
        let dir = self.root.join(subdir);
        std::fs::create_dir_all(&dir)?;
        Ok(dir.join(format!("{}.png", filename)))
    }
}
