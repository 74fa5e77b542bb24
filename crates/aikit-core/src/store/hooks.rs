//! Project hook-dispatch table (`hooks.json`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Marker written into every entry this tool manages.
pub const INSTALLED_BY: &str = "ai-kit";

/// One hook invocation in the dispatch table. Underscore-prefixed fields
/// are install bookkeeping the client ignores; entries without them (hooks
/// the user wrote by hand) still parse and survive rewrites untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookEntry {
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub matcher: String,
    #[serde(default)]
    pub command: String,
    #[serde(default, rename = "_installed_by")]
    pub installed_by: String,
    #[serde(default, rename = "_name")]
    pub name: String,
}

impl HookEntry {
    /// The command entry for an installed hook script. The project-dir
    /// variable is expanded by the client at dispatch time, not here.
    pub fn for_script(name: &str, matcher: &str) -> Self {
        Self {
            entry_type: "command".to_string(),
            matcher: matcher.to_string(),
            command: format!("${{CLAUDE_PROJECT_DIR}}/.claude/scripts/{name}.sh"),
            installed_by: INSTALLED_BY.to_string(),
            name: name.to_string(),
        }
    }
}

/// The project's authoritative hook dispatch configuration: events mapped
/// to ordered entry lists. At most one entry per `_name` exists across the
/// whole table; install replaces, remove deletes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookTable {
    #[serde(default)]
    pub hooks: BTreeMap<String, Vec<HookEntry>>,
}

impl HookTable {
    /// Drop every entry registered under `name`, in any event list. Event
    /// lists left empty are pruned, so removal restores the empty baseline.
    pub fn remove_named(&mut self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        let mut changed = false;
        for entries in self.hooks.values_mut() {
            let before = entries.len();
            entries.retain(|entry| entry.name != name);
            changed |= entries.len() != before;
        }
        if changed {
            self.hooks.retain(|_, entries| !entries.is_empty());
        }
        changed
    }

    /// Register `entry` under `event`, replacing any previous entry with
    /// the same `_name` anywhere in the table.
    pub fn upsert(&mut self, event: &str, entry: HookEntry) {
        self.remove_named(&entry.name);
        self.hooks.entry(event.to_string()).or_default().push(entry);
    }

    pub fn entries(&self, event: &str) -> &[HookEntry] {
        self.hooks.get(event).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.hooks
            .values()
            .flatten()
            .any(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_replaces_across_events() {
        let mut table = HookTable::default();
        table.upsert("Stop", HookEntry::for_script("auto-format", ""));
        table.upsert("PreToolUse", HookEntry::for_script("auto-format", "Write"));

        assert_eq!(table.entries("Stop").len(), 0);
        assert_eq!(table.entries("PreToolUse").len(), 1);
        assert_eq!(table.entries("PreToolUse")[0].matcher, "Write");
    }

    #[test]
    fn test_remove_prunes_empty_events() {
        let mut table = HookTable::default();
        table.upsert("Stop", HookEntry::for_script("session-log", ""));

        assert!(table.remove_named("session-log"));
        assert!(table.hooks.is_empty());
        assert!(!table.remove_named("session-log"));
    }

    #[test]
    fn test_foreign_entries_survive() {
        let json = r#"{
            "hooks": {
                "Stop": [
                    {"type": "command", "command": "echo done"},
                    {"type": "command", "matcher": "", "command": "x.sh",
                     "_installed_by": "ai-kit", "_name": "session-log"}
                ]
            }
        }"#;
        let mut table: HookTable = serde_json::from_str(json).unwrap();

        assert!(table.remove_named("session-log"));
        assert_eq!(table.entries("Stop").len(), 1);
        assert_eq!(table.entries("Stop")[0].command, "echo done");
    }

    #[test]
    fn test_entry_serialization_shape() {
        let entry = HookEntry::for_script("auto-format", "Write|Edit");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "command");
        assert_eq!(
            value["command"],
            "${CLAUDE_PROJECT_DIR}/.claude/scripts/auto-format.sh"
        );
        assert_eq!(value["_installed_by"], INSTALLED_BY);
        assert_eq!(value["_name"], "auto-format");
    }
}
