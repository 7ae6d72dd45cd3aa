//! QR encoder for ticket access URLs.

use crate::error::{CatalogError, Result};
use crate::providers::TicketCodeEncoder;
use crate::types::CodePayload;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// QR encoder producing `data:image/png;base64,…` payloads.
///
/// Codes are generated at error-correction level High so a partially
/// obscured print still scans at the gate.
#[derive(Debug, Clone, Copy, Default)]
pub struct QrTicketEncoder;

impl QrTicketEncoder {
    /// Create a new encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TicketCodeEncoder for QrTicketEncoder {
    fn encode(&self, url: &str) -> Result<CodePayload> {
        let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::H)
            .map_err(|e| CatalogError::Encoding(e.to_string()))?;

        let rendered = code
            .render::<Luma<u8>>()
            .min_dimensions(200, 200)
            .build();

        let mut png = Vec::new();
        rendered
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| CatalogError::Encoding(e.to_string()))?;

        Ok(CodePayload::new(format!(
            "data:image/png;base64,{}",
            STANDARD.encode(&png)
        )))
    }
}
