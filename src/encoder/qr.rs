use qrcode::{Color, EcLevel, QrCode};

use super::{Bitmap, Symbology};
use crate::constants::qr::{MODULE_PIXELS, QUIET_ZONE_MODULES};
use crate::error::CodeError;
use crate::types::CodeType;

/// QR encoder: error correction level L, smallest version that fits
pub struct QrSymbology;

impl Symbology for QrSymbology {
    fn code_type(&self) -> CodeType {
        CodeType::Qr
    }

    fn encode(&self, text: &str) -> Result<Bitmap, CodeError> {
        if text.is_empty() {
            return Err(CodeError::encoding(CodeType::Qr, "payload is empty"));
        }

        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::L)
            .map_err(|e| CodeError::encoding(CodeType::Qr, e.to_string()))?;
        let width = code.width();
        let colors = code.to_colors();

        Ok(Bitmap::from_modules(
            width,
            width,
            MODULE_PIXELS,
            QUIET_ZONE_MODULES * MODULE_PIXELS,
            |x, y| colors[y * width + x] == Color::Dark,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_version_one_size() {
        // "HELLO" fits version 1 (21 modules)
        let bitmap = QrSymbology.encode("HELLO").unwrap();
        let expected = (21 + 2 * QUIET_ZONE_MODULES) * MODULE_PIXELS;
        assert_eq!(bitmap.width(), expected);
        assert_eq!(bitmap.height(), expected);
    }

    #[test]
    fn test_encode_grows_with_payload() {
        let small = QrSymbology.encode("a").unwrap();
        let large = QrSymbology.encode(&"a".repeat(200)).unwrap();
        assert!(large.width() > small.width());
    }

    #[test]
    fn test_encode_rejects_empty() {
        assert!(matches!(
            QrSymbology.encode(""),
            Err(CodeError::Encoding { code_type: CodeType::Qr, .. })
        ));
    }

    #[test]
    fn test_encode_rejects_oversized_payload() {
        // Version 40-L tops out below 3000 bytes
        assert!(QrSymbology.encode(&"x".repeat(4000)).is_err());
    }
}
