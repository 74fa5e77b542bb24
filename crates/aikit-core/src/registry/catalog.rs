//! Catalog loading and lookup over the registry index.

use std::path::Path;

use crate::error::KitError;
use crate::registry::schema::{RegistryDocument, RegistryItem};
use crate::types::ItemKind;

/// Read-only view over the registry index, loaded once per invocation.
#[derive(Debug, Clone)]
pub struct RegistryCatalog {
    document: RegistryDocument,
}

impl RegistryCatalog {
    pub fn from_document(document: RegistryDocument) -> Self {
        Self { document }
    }

    /// Load the catalog from an index file. Any failure here is fatal: a
    /// partial catalog is never usable.
    pub fn load(index_path: &Path) -> Result<Self, KitError> {
        let bytes = std::fs::read(index_path).map_err(|err| KitError::RegistryUnavailable {
            reason: format!("{}: {}", index_path.display(), err),
        })?;
        let document: RegistryDocument =
            serde_json::from_slice(&bytes).map_err(|err| KitError::RegistryUnavailable {
                reason: format!("{}: {}", index_path.display(), err),
            })?;
        Ok(Self::from_document(document))
    }

    pub fn items(&self, kind: ItemKind) -> &[RegistryItem] {
        self.document.items(kind)
    }

    pub fn lookup(&self, kind: ItemKind, name: &str) -> Option<&RegistryItem> {
        self.items(kind).iter().find(|item| item.name == name)
    }

    /// Lookup that promotes absence to the fatal error install and info use.
    pub fn require(&self, kind: ItemKind, name: &str) -> Result<&RegistryItem, KitError> {
        self.lookup(kind, name).ok_or_else(|| KitError::ItemNotFound {
            kind,
            name: name.to_string(),
        })
    }
}
