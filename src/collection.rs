//! Ordered collection of code records with a current selection

use tracing::{info, warn};

use crate::config::CodesDocument;
use crate::constants::presets::PRESETS;
use crate::encoder::EncoderRegistry;
use crate::error::CodeError;
use crate::types::{CodeRecord, CodeType, Variant};

/// Codes in display order plus the selected position.
///
/// When `codes` is empty `current_index` is 0 and never dereferenced;
/// otherwise it is always a valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeCollection {
    variant: Variant,
    codes: Vec<CodeRecord>,
    current_index: usize,
}

impl CodeCollection {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            codes: Vec::new(),
            current_index: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn codes(&self) -> &[CodeRecord] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> Option<&CodeRecord> {
        self.codes.get(self.current_index)
    }

    /// Encode `text` and append it as the new current record
    pub fn add(
        &mut self,
        encoders: &EncoderRegistry,
        text: &str,
        code_type: CodeType,
    ) -> Result<&CodeRecord, CodeError> {
        self.push_encoded(encoders, None, text, code_type)
    }

    /// Like [`add`](Self::add) with a human label attached
    pub fn add_named(
        &mut self,
        encoders: &EncoderRegistry,
        name: &str,
        text: &str,
        code_type: CodeType,
    ) -> Result<&CodeRecord, CodeError> {
        self.push_encoded(encoders, Some(name.to_string()), text, code_type)
    }

    fn push_encoded(
        &mut self,
        encoders: &EncoderRegistry,
        name: Option<String>,
        text: &str,
        code_type: CodeType,
    ) -> Result<&CodeRecord, CodeError> {
        if text.is_empty() {
            return Err(CodeError::Validation);
        }

        // Encode before touching state so a failure leaves the collection as it was
        let image = encoders.encode(text, code_type)?.to_base64_png()?;
        let record = CodeRecord {
            name,
            data: text.to_string(),
            code_type: self.variant.records_carry_type().then_some(code_type),
            image,
        };

        self.codes.push(record);
        self.current_index = self.codes.len() - 1;
        info!(
            index = self.current_index,
            code_type = code_type.as_str(),
            count = self.codes.len(),
            "Added code"
        );
        Ok(&self.codes[self.current_index])
    }

    /// Delete the current record.
    ///
    /// The selection stays on the same index when possible, moves to the
    /// new last record if it fell off the end, and resets to 0 when empty.
    pub fn remove_current(&mut self) -> Result<CodeRecord, CodeError> {
        if self.codes.is_empty() {
            return Err(CodeError::EmptyCollection);
        }

        let removed = self.codes.remove(self.current_index);
        if self.codes.is_empty() {
            self.current_index = 0;
        } else if self.current_index >= self.codes.len() {
            self.current_index = self.codes.len() - 1;
        }
        info!(
            remaining = self.codes.len(),
            current_index = self.current_index,
            "Removed code"
        );
        Ok(removed)
    }

    /// Returns false (and changes nothing) when `index` is out of range
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.codes.len() {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if !self.codes.is_empty() {
            self.current_index = (self.current_index + 1) % self.codes.len();
        }
    }

    pub fn prev(&mut self) {
        if !self.codes.is_empty() {
            let len = self.codes.len();
            self.current_index = (self.current_index + len - 1) % len;
        }
    }

    /// Append the fixed preset entries as Data Matrix codes.
    ///
    /// Skipped entirely when Data Matrix encoding is unavailable. Returns
    /// the number of presets added; on success the first preset is selected.
    pub fn seed_presets(&mut self, encoders: &EncoderRegistry) -> usize {
        if !encoders.is_available(CodeType::DataMatrix) {
            warn!("Data Matrix encoding unavailable, skipping presets");
            return 0;
        }

        let first_new = self.codes.len();
        let mut added = 0;
        for (name, data) in PRESETS {
            if let Err(e) = self.add_named(encoders, name, data, CodeType::DataMatrix) {
                warn!(preset = name, error = %e, "Failed to create preset");
                break;
            }
            added += 1;
        }

        if added > 0 {
            self.current_index = first_new;
        }
        info!(count = added, "Created presets");
        added
    }

    pub fn to_document(&self) -> CodesDocument {
        CodesDocument {
            codes: self.codes.clone(),
            current_index: self.current_index as i64,
        }
    }

    /// Rebuild a collection, clamping an out-of-range index to 0
    pub fn from_document(variant: Variant, document: CodesDocument) -> Self {
        let CodesDocument {
            codes,
            current_index,
        } = document;

        let current_index = match usize::try_from(current_index) {
            Ok(index) if index < codes.len() => index,
            _ => {
                if !codes.is_empty() {
                    warn!(
                        stored = current_index,
                        count = codes.len(),
                        "Stored index out of range, selecting first code"
                    );
                }
                0
            }
        };

        Self {
            variant,
            codes,
            current_index,
        }
    }
}
