use ::datamatrix::{DataMatrix, SymbolList};

use super::{Bitmap, Symbology};
use crate::constants::datamatrix::{MARGIN_PIXELS, MODULE_PIXELS};
use crate::error::CodeError;
use crate::types::CodeType;

/// Data Matrix encoder over the UTF-8 bytes of the payload.
/// Only square symbol sizes are used.
pub struct DataMatrixSymbology;

impl Symbology for DataMatrixSymbology {
    fn code_type(&self) -> CodeType {
        CodeType::DataMatrix
    }

    fn encode(&self, text: &str) -> Result<Bitmap, CodeError> {
        if text.is_empty() {
            return Err(CodeError::encoding(CodeType::DataMatrix, "payload is empty"));
        }

        let code = DataMatrix::encode(text.as_bytes(), SymbolList::default().enforce_square())
            .map_err(|e| CodeError::encoding(CodeType::DataMatrix, format!("{e:?}")))?;
        let modules = code.bitmap();
        let (columns, rows) = (modules.width(), modules.height());

        let mut dark = vec![false; columns * rows];
        for (x, y) in modules.pixels() {
            dark[y * columns + x] = true;
        }

        Ok(Bitmap::from_modules(
            columns,
            rows,
            MODULE_PIXELS,
            MARGIN_PIXELS,
            |x, y| dark[y * columns + x],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_short_payload_square_symbol() {
        let bitmap = DataMatrixSymbology.encode("ts").unwrap();
        assert_eq!(bitmap.width(), bitmap.height());
        // Smallest square symbol is 10x10 modules
        assert!(bitmap.width() >= 10 * MODULE_PIXELS + 2 * MARGIN_PIXELS);
    }

    #[test]
    fn test_encode_longer_payloads_stay_square() {
        for len in [1, 5, 12, 16, 20, 31, 44, 60] {
            let payload = "A".repeat(len);
            let bitmap = DataMatrixSymbology.encode(&payload).unwrap();
            assert_eq!(bitmap.width(), bitmap.height(), "payload length {len}");
        }
    }

    #[test]
    fn test_encode_multibyte_payload() {
        assert!(DataMatrixSymbology.encode("テスト").is_ok());
    }

    #[test]
    fn test_encode_rejects_empty() {
        assert!(matches!(
            DataMatrixSymbology.encode(""),
            Err(CodeError::Encoding { code_type: CodeType::DataMatrix, .. })
        ));
    }
}
