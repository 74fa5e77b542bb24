//! Shared item kind used across the registry, stores, and commands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of an installable registry item.
///
/// Serialized as the plural key used in both the registry index and the
/// installed ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Subagent definitions delivered as single markdown files.
    #[serde(rename = "agents")]
    Agent,
    /// Skills: a single markdown file or a directory bundle.
    #[serde(rename = "skills")]
    Skill,
    /// Lifecycle hooks dispatched through the project hook table.
    #[serde(rename = "hooks")]
    Hook,
    /// Built-in tools; listed and described, never materialized.
    #[serde(rename = "tools")]
    Tool,
}

impl ItemKind {
    /// All kinds, in the order reports show them.
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Agent,
        ItemKind::Skill,
        ItemKind::Hook,
        ItemKind::Tool,
    ];

    /// Plural key used in the registry document and the installed ledger.
    pub fn key(self) -> &'static str {
        match self {
            ItemKind::Agent => "agents",
            ItemKind::Skill => "skills",
            ItemKind::Hook => "hooks",
            ItemKind::Tool => "tools",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
