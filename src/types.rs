use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::storage;

/// Barcode symbology of a stored code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeType {
    #[serde(rename = "qrcode")]
    Qr,
    #[serde(rename = "datamatrix")]
    DataMatrix,
}

impl CodeType {
    pub const ALL: [CodeType; 2] = [CodeType::Qr, CodeType::DataMatrix];

    /// Identifier written to the persisted document
    pub fn as_str(self) -> &'static str {
        match self {
            CodeType::Qr => "qrcode",
            CodeType::DataMatrix => "datamatrix",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CodeType::Qr => "QR Code",
            CodeType::DataMatrix => "Data Matrix",
        }
    }
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which program flavour is running
///
/// Both share the collection model; they differ in document shape,
/// storage location and window behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Decorated window, Data Matrix only, file namespaced by login name
    PerUser,
    /// Borderless always-on-top overlay, QR or Data Matrix per entry
    Overlay,
}

impl Variant {
    /// Key holding the code list in the persisted document
    pub fn list_key(self) -> &'static str {
        match self {
            Variant::PerUser => storage::PER_USER_LIST_KEY,
            Variant::Overlay => storage::OVERLAY_LIST_KEY,
        }
    }

    /// Per-user records are implicitly Data Matrix and carry no `type`
    pub fn records_carry_type(self) -> bool {
        matches!(self, Variant::Overlay)
    }

    pub fn default_code_type(self) -> CodeType {
        match self {
            Variant::PerUser => CodeType::DataMatrix,
            Variant::Overlay => CodeType::Qr,
        }
    }

    pub fn seeds_presets(self) -> bool {
        matches!(self, Variant::PerUser)
    }

    pub fn title(self) -> &'static str {
        match self {
            Variant::PerUser => "Data Matrix Code Tool",
            Variant::Overlay => "QR Code Overlay",
        }
    }
}

/// One stored barcode entry
///
/// `image` is the base64 PNG rendered when the record was created. It is
/// replayed as-is on load and never regenerated from `data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub data: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub code_type: Option<CodeType>,
    #[serde(default)]
    pub image: String,
}

impl CodeRecord {
    /// Records without an explicit type come from the per-user tool
    pub fn effective_type(&self) -> CodeType {
        self.code_type.unwrap_or(CodeType::DataMatrix)
    }

    /// Button caption: payloads longer than 10 characters keep the first 7
    pub fn short_label(&self) -> String {
        const MAX_CHARS: usize = 10;
        const KEEP_CHARS: usize = 7;

        if self.data.chars().count() > MAX_CHARS {
            let head: String = self.data.chars().take(KEEP_CHARS).collect();
            format!("{head}...")
        } else {
            self.data.clone()
        }
    }
}
