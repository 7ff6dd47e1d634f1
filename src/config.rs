//! Ambient settings
//!
//! A small TOML-backed settings file for the handful of knobs the CLI
//! exposes defaults for. Absence of the file is not an error; defaults
//! apply and CLI flags override whatever was loaded.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "textmorph.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory for history logs and generated images.
    pub history_dir: PathBuf,
    /// Default signed shift for the caesar cipher.
    pub default_shift: i32,
    /// Default indent width for the shadow transform.
    pub shadow_offset: usize,
    /// Milliseconds between characters in the scroll animation.
    pub scroll_delay_ms: u64,
    /// Pixel size of a single QR module.
    pub qr_box_size: u32,
    /// Whether to render the QR quiet zone border.
    pub qr_quiet_zone: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from("conversion-history"),
            default_shift: 3,
            shadow_offset: 1,
            scroll_delay_ms: 100,
            qr_box_size: 10,
            qr_quiet_zone: true,
        }
    }
}

impl Config {
    /// Load settings from `textmorph.toml` in the working directory,
    /// falling back to defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.history_dir, PathBuf::from("conversion-history"));
        assert_eq!(config.qr_box_size, 10);
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("textmorph.toml");
        std::fs::write(&path, "default_shift = 13\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.default_shift, 13);
        assert_eq!(config.shadow_offset, 1);
    }
}
