//! Whole-document JSON store with atomic rewrite.
//!
//! Both persisted stores follow the same pattern: read the full document,
//! mutate in memory, write the full document back. Writes go through a
//! sibling temporary file and a rename, so a process killed mid-write never
//! leaves a truncated document behind.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A document loaded from disk. `recovered` is set when the file existed
/// but failed to parse and the store fell back to the empty document;
/// callers surface that as a warning instead of losing data silently.
#[derive(Debug)]
pub struct LoadedDocument<T> {
    pub value: T,
    pub recovered: bool,
}

/// One JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the document. A missing file is the empty document; a malformed
    /// file is the empty document plus the recovery flag.
    pub fn load<T>(&self) -> anyhow::Result<LoadedDocument<T>>
    where
        T: DeserializeOwned + Default,
    {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Ok(LoadedDocument {
                    value: T::default(),
                    recovered: false,
                });
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Failed to read store: {}", self.path.display()));
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(LoadedDocument {
                value,
                recovered: false,
            }),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "store failed to parse, treating as empty"
                );
                Ok(LoadedDocument {
                    value: T::default(),
                    recovered: true,
                })
            }
        }
    }

    /// Rewrite the whole document atomically: serialize, write a sibling
    /// temporary file, rename over the target.
    pub fn save<T: Serialize>(&self, value: &T) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let bytes = serde_json::to_vec_pretty(value).context("Failed to serialize store")?;

        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Store path has no file name: {}", self.path.display()))?;
        let mut tmp_name = file_name.to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        std::fs::write(&tmp_path, &bytes)
            .with_context(|| format!("Failed to write store: {}", tmp_path.display()))?;
        std::fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "Failed to replace store {} with {}",
                self.path.display(),
                tmp_path.display()
            )
        })
    }
}
