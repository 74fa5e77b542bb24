//! Installed-items ledger (`.installed.json`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::ItemKind;

/// Record of one successful install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub version: String,
    pub author: String,
    #[serde(rename = "installedAt")]
    pub installed_at: String,
}

/// Persisted record of what is installed, keyed by kind then name. An
/// entry exists exactly when the corresponding artifact was installed and
/// not yet removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledLedger {
    #[serde(flatten)]
    pub items: BTreeMap<ItemKind, BTreeMap<String, LedgerEntry>>,
}

impl InstalledLedger {
    pub fn upsert(&mut self, kind: ItemKind, name: &str, entry: LedgerEntry) {
        self.items
            .entry(kind)
            .or_default()
            .insert(name.to_string(), entry);
    }

    /// Drop a recorded install. Empty kind maps are pruned, so removal
    /// restores the empty baseline.
    pub fn remove(&mut self, kind: ItemKind, name: &str) -> bool {
        let removed = self
            .items
            .get_mut(&kind)
            .is_some_and(|entries| entries.remove(name).is_some());
        if removed {
            self.items.retain(|_, entries| !entries.is_empty());
        }
        removed
    }

    pub fn get(&self, kind: ItemKind, name: &str) -> Option<&LedgerEntry> {
        self.items.get(&kind).and_then(|entries| entries.get(name))
    }

    pub fn entries(&self, kind: ItemKind) -> Option<&BTreeMap<String, LedgerEntry>> {
        self.items.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
