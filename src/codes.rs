//! QR code and barcode image generation
//!
//! Rendering is delegated to the `qrcode` and `barcoders` collaborators
//! through a narrow interface; the only contract here is "write a PNG
//! under the history store's image directory and return its path".

use std::path::PathBuf;

use barcoders::generators::image::Image as BarcodeImage;
use barcoders::sym::code128::Code128;
use qrcode::{EcLevel, QrCode};

use crate::config::Config;
use crate::history::HistoryStore;
use crate::utils::{AppResult, TransformError};

// Code 128 character-set B selector expected by the encoder.
const CODE128_CHARSET_B: char = '\u{0181}';

const BARCODE_HEIGHT: u32 = 80;

/// Generate a code image of the requested kind ("qr" or "barcode").
///
/// Any other kind fails with an invalid-argument error.
pub fn generate(
    kind: &str,
    data: &str,
    filename: Option<&str>,
    store: &HistoryStore,
    config: &Config,
) -> AppResult<PathBuf> {
    match kind {
        "qr" => qr_code(data, filename, store, config),
        "barcode" => barcode(data, filename, store),
        other => Err(TransformError::InvalidArgument(format!(
            "Code type must be 'qr' or 'barcode', got '{}'",
            other
        ))),
    }
}

/// Encode the data as a QR code and save it under `qr_codes/`.
///
/// Low error correction, configurable module size; the renderer's
/// standard four-module quiet zone serves as the border.
pub fn qr_code(
    data: &str,
    filename: Option<&str>,
    store: &HistoryStore,
    config: &Config,
) -> AppResult<PathBuf> {
    let code = QrCode::with_error_correction_level(data, EcLevel::L)
        .map_err(|e| TransformError::Render(e.to_string()))?;

    let image = code
        .render::<image::Luma<u8>>()
        .module_dimensions(config.qr_box_size, config.qr_box_size)
        .quiet_zone(config.qr_quiet_zone)
        .build();

    let path = store.qr_path(filename)?;
    image
        .save(&path)
        .map_err(|e| TransformError::Render(e.to_string()))?;
    Ok(path)
}

/// Encode the data as a Code 128 barcode and save it under `barcodes/`.
pub fn barcode(data: &str, filename: Option<&str>, store: &HistoryStore) -> AppResult<PathBuf> {
    let payload = format!("{}{}", CODE128_CHARSET_B, data);
    let code =
        Code128::new(payload).map_err(|e| TransformError::Render(e.to_string()))?;
    let encoded = code.encode();

    let png = BarcodeImage::png(BARCODE_HEIGHT);
    let bytes = png
        .generate(&encoded[..])
        .map_err(|e| TransformError::Render(e.to_string()))?;

    let path = store.barcode_path(filename)?;
    std::fs::write(&path, bytes)?;
    Ok(path)
}
