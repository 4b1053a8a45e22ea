use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::collection::CodeCollection;
use crate::config::{CodesDocument, StorageTarget};
use crate::encoder::EncoderRegistry;
use crate::error::CodeError;
use crate::types::Variant;

/// Reads and writes one collection snapshot.
///
/// The file is read once at startup and rewritten on every mutation that
/// the shell persists. Nothing here is fatal: [`load`](Self::load) always
/// yields a usable collection and [`save_logged`](Self::save_logged)
/// swallows failures after logging them.
pub struct CodeStore {
    path: PathBuf,
    variant: Variant,
}

impl CodeStore {
    pub fn new(variant: Variant, target: &StorageTarget) -> Self {
        Self {
            path: target.resolve(),
            variant,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored collection; `Ok(None)` when no file exists yet
    pub fn read(&self) -> Result<Option<CodeCollection>, CodeError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(CodeError::Persistence {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let document =
            CodesDocument::from_json(self.variant, &contents).map_err(|source| CodeError::Document {
                path: self.path.clone(),
                source,
            })?;
        Ok(Some(CodeCollection::from_document(self.variant, document)))
    }

    /// Startup load.
    ///
    /// Read failures are logged and treated as an empty collection. The
    /// per-user variant then seeds the presets and saves them.
    pub fn load(&self, encoders: &EncoderRegistry) -> CodeCollection {
        let mut collection = match self.read() {
            Ok(Some(collection)) => {
                info!(
                    path = %self.path.display(),
                    count = collection.len(),
                    current_index = collection.current_index(),
                    "Loaded codes"
                );
                collection
            }
            Ok(None) => {
                info!(path = %self.path.display(), "No saved codes found");
                CodeCollection::new(self.variant)
            }
            Err(e) => {
                error!(error = %e, "Failed to load codes");
                CodeCollection::new(self.variant)
            }
        };

        if collection.is_empty() && self.variant.seeds_presets() {
            info!("Creating initial presets");
            if collection.seed_presets(encoders) > 0 {
                self.save_logged(&collection);
            }
        }

        collection
    }

    pub fn save(&self, collection: &CodeCollection) -> Result<(), CodeError> {
        let persistence_error = |source| CodeError::Persistence {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(persistence_error)?;
        }
        let contents = collection
            .to_document()
            .to_json(self.variant)
            .map_err(|source| CodeError::Document {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, contents).map_err(persistence_error)?;

        info!(path = %self.path.display(), count = collection.len(), "Saved codes");
        Ok(())
    }

    /// Save, logging instead of propagating failure. Returns whether it worked.
    pub fn save_logged(&self, collection: &CodeCollection) -> bool {
        match self.save(collection) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to save codes");
                false
            }
        }
    }
}
