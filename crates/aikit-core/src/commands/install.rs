//! Install command implementation.
//!
//! Resolves an item from the catalog, materializes its artifacts into the
//! project control directory, and merges the hook table and installed
//! ledger. Filesystem writes happen strictly before metadata writes: a
//! crash mid-install leaves a superset of files on disk, never a ledger
//! entry pointing at nothing.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::context::AppContext;
use crate::fs::{replace_tree, set_executable};
use crate::layout::{LayoutKind, LayoutOutcome};
use crate::registry::schema::RegistryItem;
use crate::store::{HookEntry, HookTable, InstalledLedger, LedgerEntry};
use crate::types::ItemKind;

/// How an install concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Artifacts copied and state recorded.
    Installed,
    /// The item ships with the client; nothing to do.
    BuiltIn,
}

/// Report from an install operation.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub name: String,
    pub kind: ItemKind,
    pub version: String,
    pub author: String,
    pub description: String,
    pub outcome: InstallOutcome,
    /// Paths written under the control directory.
    pub copied_paths: Vec<PathBuf>,
    pub warnings: Vec<String>,
}

/// Install command orchestrator.
#[derive(Debug)]
pub struct InstallCommand {
    ctx: AppContext,
}

impl InstallCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Install one item. Idempotent: re-installing overwrites artifacts
    /// and replaces prior hook/ledger entries rather than duplicating them.
    pub fn execute(&self, kind: ItemKind, name: &str) -> anyhow::Result<InstallReport> {
        let catalog = self.ctx.catalog()?;
        let item = catalog.require(kind, name)?.clone();

        let mut report = InstallReport {
            name: item.name.clone(),
            kind,
            version: item.version.clone(),
            author: item.author.clone(),
            description: item.description.clone(),
            outcome: InstallOutcome::Installed,
            copied_paths: Vec::new(),
            warnings: Vec::new(),
        };

        if item.is_built_in() {
            report.outcome = InstallOutcome::BuiltIn;
            return Ok(report);
        }

        let outcome = self.ctx.layout_resolver()?.resolve(kind, &item)?;
        let copied = self.copy_artifacts(kind, &outcome, &mut report)?;

        if kind == ItemKind::Hook {
            self.register_hook(&item, copied.as_deref(), &mut report)?;
        }

        self.record_install(kind, &item, &mut report)?;
        tracing::debug!(%kind, name = %item.name, "installed");
        Ok(report)
    }

    /// Copy resolved artifacts, returning the destination when something
    /// was written. A missing source downgrades to a warning; the item is
    /// still recorded so `installed` and `remove` stay consistent.
    fn copy_artifacts(
        &self,
        kind: ItemKind,
        outcome: &LayoutOutcome,
        report: &mut InstallReport,
    ) -> anyhow::Result<Option<PathBuf>> {
        match outcome {
            LayoutOutcome::Resolved(layout) => {
                if let Some(parent) = layout.destination.parent() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory: {}", parent.display())
                    })?;
                }
                match layout.kind {
                    LayoutKind::Directory => replace_tree(&layout.source, &layout.destination)?,
                    LayoutKind::SingleFile => {
                        std::fs::copy(&layout.source, &layout.destination).with_context(|| {
                            format!(
                                "Failed to copy {} to {}",
                                layout.source.display(),
                                layout.destination.display()
                            )
                        })?;
                    }
                }
                report.copied_paths.push(layout.destination.clone());
                Ok(Some(layout.destination.clone()))
            }
            LayoutOutcome::Missing {
                expected,
                destination,
            } => {
                let message = match kind {
                    ItemKind::Hook => format!(
                        "Hook script not found at {}. Create {} to activate it.",
                        expected.display(),
                        destination.display()
                    ),
                    _ => format!(
                        "Artifact not found at {}; registry entry only.",
                        expected.display()
                    ),
                };
                report.warnings.push(message);
                Ok(None)
            }
        }
    }

    /// Merge the hook entry into the dispatch table, replacing any previous
    /// entry with the same name, and mark the copied script executable.
    fn register_hook(
        &self,
        item: &RegistryItem,
        script: Option<&Path>,
        report: &mut InstallReport,
    ) -> anyhow::Result<()> {
        let store = self.ctx.hook_store();
        let mut loaded = store.load::<HookTable>()?;
        if loaded.recovered {
            report.warnings.push(format!(
                "{} was malformed; prior entries were dropped.",
                store.path().display()
            ));
        }

        let entry = HookEntry::for_script(&item.name, item.matcher.as_deref().unwrap_or(""));
        loaded.value.upsert(item.hook_event(), entry);
        store.save(&loaded.value)?;

        if let Some(script) = script {
            set_executable(script)?;
        }
        Ok(())
    }

    fn record_install(
        &self,
        kind: ItemKind,
        item: &RegistryItem,
        report: &mut InstallReport,
    ) -> anyhow::Result<()> {
        let store = self.ctx.ledger_store();
        let mut loaded = store.load::<InstalledLedger>()?;
        if loaded.recovered {
            report.warnings.push(format!(
                "{} was malformed; prior entries were dropped.",
                store.path().display()
            ));
        }

        loaded.value.upsert(
            kind,
            &item.name,
            LedgerEntry {
                version: item.version.clone(),
                author: item.author.clone(),
                installed_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            },
        );
        store.save(&loaded.value)
    }
}
