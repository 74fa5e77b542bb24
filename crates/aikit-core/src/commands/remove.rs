//! Remove command implementation.
//!
//! Reverses an install: deletes project-local artifacts, strips hook
//! entries, and drops the ledger record. Every deletion tolerates absence,
//! so removing a name that was never installed is a clean no-op.

use crate::context::AppContext;
use crate::fs::{remove_dir_if_exists, remove_file_if_exists};
use crate::store::{HookTable, InstalledLedger};
use crate::types::ItemKind;

/// Report from a remove operation.
#[derive(Debug, Clone)]
pub struct RemoveReport {
    pub name: String,
    pub kind: ItemKind,
    /// Whether anything on disk or in the stores actually changed.
    pub changed: bool,
    pub warnings: Vec<String>,
}

/// Remove command orchestrator. Never consults the registry: removal
/// operates purely on project-local state.
#[derive(Debug)]
pub struct RemoveCommand {
    ctx: AppContext,
}

impl RemoveCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub fn execute(&self, kind: ItemKind, name: &str) -> anyhow::Result<RemoveReport> {
        let mut changed = false;
        let mut warnings = Vec::new();

        match kind {
            ItemKind::Agent => {
                let path = self.ctx.project().agents_dir().join(format!("{name}.md"));
                changed |= remove_file_if_exists(&path)?;
            }
            ItemKind::Skill => {
                // A directory bundle takes precedence over a same-named file.
                let dir = self.ctx.project().skills_dir().join(name);
                if remove_dir_if_exists(&dir)? {
                    changed = true;
                } else {
                    let file = self.ctx.project().skills_dir().join(format!("{name}.md"));
                    changed |= remove_file_if_exists(&file)?;
                }
            }
            ItemKind::Hook => {
                changed |= self.unregister_hook(name, &mut warnings)?;
                let script = self.ctx.project().scripts_dir().join(format!("{name}.sh"));
                changed |= remove_file_if_exists(&script)?;
            }
            ItemKind::Tool => {}
        }

        changed |= self.drop_ledger_entry(kind, name, &mut warnings)?;
        tracing::debug!(%kind, name, changed, "removed");

        Ok(RemoveReport {
            name: name.to_string(),
            kind,
            changed,
            warnings,
        })
    }

    /// Strip every entry with this name from the dispatch table. The table
    /// is only rewritten when something changed, so removing an unknown
    /// name leaves the document untouched.
    fn unregister_hook(&self, name: &str, warnings: &mut Vec<String>) -> anyhow::Result<bool> {
        let store = self.ctx.hook_store();
        if !store.path().exists() {
            return Ok(false);
        }
        let mut loaded = store.load::<HookTable>()?;
        if loaded.recovered {
            warnings.push(format!(
                "{} was malformed; treating it as empty.",
                store.path().display()
            ));
            return Ok(false);
        }
        let changed = loaded.value.remove_named(name);
        if changed {
            store.save(&loaded.value)?;
        }
        Ok(changed)
    }

    fn drop_ledger_entry(
        &self,
        kind: ItemKind,
        name: &str,
        warnings: &mut Vec<String>,
    ) -> anyhow::Result<bool> {
        let store = self.ctx.ledger_store();
        if !store.path().exists() {
            return Ok(false);
        }
        let mut loaded = store.load::<InstalledLedger>()?;
        if loaded.recovered {
            warnings.push(format!(
                "{} was malformed; treating it as empty.",
                store.path().display()
            ));
            return Ok(false);
        }
        let changed = loaded.value.remove(kind, name);
        if changed {
            store.save(&loaded.value)?;
        }
        Ok(changed)
    }
}
