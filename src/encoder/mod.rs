//! Barcode generation behind a uniform "text to bitmap" capability
//!
//! Each symbology is an independent [`Symbology`]; the [`EncoderRegistry`]
//! answers which ones are available and dispatches encode requests, so the
//! collection model never touches a third-party encoder directly.

mod bitmap;
#[cfg(feature = "datamatrix")]
mod datamatrix;
mod qr;

pub use bitmap::{Bitmap, decode_base64_png};
#[cfg(feature = "datamatrix")]
pub use datamatrix::DataMatrixSymbology;
pub use qr::QrSymbology;

use tracing::{debug, info};

use crate::error::CodeError;
use crate::types::CodeType;

pub trait Symbology {
    fn code_type(&self) -> CodeType;

    fn encode(&self, text: &str) -> Result<Bitmap, CodeError>;
}

pub struct EncoderRegistry {
    symbologies: Vec<Box<dyn Symbology>>,
}

impl EncoderRegistry {
    /// Registry of every encoder compiled into this build.
    /// QR is always present; Data Matrix depends on the `datamatrix` feature.
    pub fn detect() -> Self {
        #[allow(unused_mut)]
        let mut symbologies: Vec<Box<dyn Symbology>> = vec![Box::new(QrSymbology)];
        #[cfg(feature = "datamatrix")]
        symbologies.push(Box::new(DataMatrixSymbology));

        let registry = Self::with_symbologies(symbologies);
        info!(available = ?registry.available_types(), "Detected barcode encoders");
        registry
    }

    pub fn with_symbologies(symbologies: Vec<Box<dyn Symbology>>) -> Self {
        Self { symbologies }
    }

    pub fn is_available(&self, code_type: CodeType) -> bool {
        self.find(code_type).is_some()
    }

    /// Available types in display order
    pub fn available_types(&self) -> Vec<CodeType> {
        CodeType::ALL
            .into_iter()
            .filter(|t| self.is_available(*t))
            .collect()
    }

    pub fn encode(&self, text: &str, code_type: CodeType) -> Result<Bitmap, CodeError> {
        let symbology = self
            .find(code_type)
            .ok_or(CodeError::EncodingUnavailable(code_type))?;
        let bitmap = symbology.encode(text)?;
        debug!(
            code_type = code_type.as_str(),
            width = bitmap.width(),
            height = bitmap.height(),
            "Encoded code"
        );
        Ok(bitmap)
    }

    fn find(&self, code_type: CodeType) -> Option<&dyn Symbology> {
        self.symbologies
            .iter()
            .find(|s| s.code_type() == code_type)
            .map(|s| &**s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_always_has_qr() {
        let registry = EncoderRegistry::detect();
        assert!(registry.is_available(CodeType::Qr));
        assert_eq!(
            registry.is_available(CodeType::DataMatrix),
            cfg!(feature = "datamatrix")
        );
    }

    #[test]
    fn test_missing_symbology_reports_unavailable() {
        let registry = EncoderRegistry::with_symbologies(vec![Box::new(QrSymbology)]);
        assert_eq!(registry.available_types(), vec![CodeType::Qr]);
        assert!(matches!(
            registry.encode("ts", CodeType::DataMatrix),
            Err(CodeError::EncodingUnavailable(CodeType::DataMatrix))
        ));
    }

    #[test]
    fn test_encode_dispatches_by_type() {
        let registry = EncoderRegistry::with_symbologies(vec![Box::new(QrSymbology)]);
        let bitmap = registry.encode("HELLO", CodeType::Qr).unwrap();
        assert!(bitmap.width() > 0);
    }
}
