//! Registry document schema.
//!
//! The registry index is a flat, pre-built catalog: one item list per kind,
//! loaded once per invocation and read-only from there on.

use serde::{Deserialize, Serialize};

use crate::types::ItemKind;

/// Version string marking an item that ships with the client and never
/// needs installation.
pub const BUILT_IN_VERSION: &str = "built-in";

/// Lifecycle event a hook binds to when the registry does not name one.
pub const DEFAULT_HOOK_EVENT: &str = "Stop";

/// A single installable item as declared in the registry index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
    /// Location of the item's artifacts relative to the registry root.
    #[serde(default)]
    pub path: String,
    /// Lifecycle event a hook binds to; absent means the default event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Tool-name matcher for hooks; absent means match everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,
    /// Hook flavor ("event" or "custom"); display metadata only.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub hook_type: Option<String>,
}

impl RegistryItem {
    /// Built-in items require no installation.
    pub fn is_built_in(&self) -> bool {
        self.version == BUILT_IN_VERSION
    }

    /// Event a hook binds to, defaulting to "Stop".
    pub fn hook_event(&self) -> &str {
        self.event.as_deref().unwrap_or(DEFAULT_HOOK_EVENT)
    }
}

/// The parsed registry index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryDocument {
    #[serde(default)]
    pub agents: Vec<RegistryItem>,
    #[serde(default)]
    pub skills: Vec<RegistryItem>,
    #[serde(default)]
    pub hooks: Vec<RegistryItem>,
    #[serde(default)]
    pub tools: Vec<RegistryItem>,
}

impl RegistryDocument {
    /// The item list for one kind; empty when the index omits the section.
    pub fn items(&self, kind: ItemKind) -> &[RegistryItem] {
        match kind {
            ItemKind::Agent => &self.agents,
            ItemKind::Skill => &self.skills,
            ItemKind::Hook => &self.hooks,
            ItemKind::Tool => &self.tools,
        }
    }
}
