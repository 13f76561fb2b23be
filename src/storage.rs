//! File persistence for exported record sets
//!
//! One self-describing encoding: pretty-printed JSON, an ordered array of
//! flat field mappings. Writes are atomic (temp file and rename), so a
//! failure mid-write never leaves a truncated file that still parses.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, RosterError};
use crate::record::RecordMap;

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist the full record set, replacing prior content.
    ///
    /// Content is written to a sibling temp file first and renamed over
    /// the target, so the target is never left partially written.
    pub fn save(&self, records: &[RecordMap]) -> Result<()> {
        self.ensure_parent_dir()?;

        let content = serde_json::to_string_pretty(records)?;
        let temp_path = self.path.with_extension("tmp");

        fs::write(&temp_path, content).map_err(|e| RosterError::StorageWrite {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|e| RosterError::StorageWrite {
            path: self.path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }

    /// Read the persisted record set, preserving order.
    ///
    /// A target that has never been saved is the first-run default and
    /// yields an empty sequence, not an error.
    pub fn load(&self) -> Result<Vec<RecordMap>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| RosterError::StorageRead {
            path: self.path.clone(),
            source: e,
        })?;

        let records: Vec<RecordMap> =
            serde_json::from_str(&content).map_err(|e| RosterError::StorageParse {
                path: self.path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| RosterError::StorageWrite {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}
