//! Error taxonomy for code generation, the collection model and persistence

use std::path::PathBuf;
use thiserror::Error;

use crate::types::CodeType;

#[derive(Debug, Error)]
pub enum CodeError {
    /// Empty user input
    #[error("Please enter the data to encode")]
    Validation,

    /// The requested symbology is not compiled into this build
    #[error("{0} support is not available")]
    EncodingUnavailable(CodeType),

    /// The underlying encoder rejected the input
    #[error("Failed to generate {code_type} code: {message}")]
    Encoding { code_type: CodeType, message: String },

    #[error("Failed to access {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid code document {}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored or generated image could not be converted
    #[error("Image conversion failed: {0}")]
    Image(String),

    #[error("There are no codes")]
    EmptyCollection,
}

impl CodeError {
    pub fn encoding(code_type: CodeType, message: impl Into<String>) -> Self {
        CodeError::Encoding {
            code_type,
            message: message.into(),
        }
    }
}
