//! Application context for unified dependency injection.

use crate::layout::LayoutResolver;
use crate::project::ProjectLayout;
use crate::registry::catalog::RegistryCatalog;
use crate::registry::locator::{self, RegistryPaths};
use crate::store::JsonStore;

/// Shared services and paths for one invocation. Frontends create this
/// once and hand it to commands.
///
/// The registry is optional: remove and installed operate purely on
/// project-local state and must keep working when no registry can be
/// found.
#[derive(Debug, Clone)]
pub struct AppContext {
    registry: Option<RegistryPaths>,
    project: ProjectLayout,
}

impl AppContext {
    /// Locate the registry and resolve the target project from the
    /// environment. Fails when no registry candidate holds an index.
    pub fn from_env() -> anyhow::Result<Self> {
        let candidates = locator::default_candidates();
        let registry = locator::locate(&candidates)?;
        Ok(Self::with_paths(registry, ProjectLayout::from_env()))
    }

    /// Context for commands that never touch the registry.
    pub fn without_registry() -> Self {
        Self {
            registry: None,
            project: ProjectLayout::from_env(),
        }
    }

    /// Explicit paths (test seam).
    pub fn with_paths(registry: RegistryPaths, project: ProjectLayout) -> Self {
        Self {
            registry: Some(registry),
            project,
        }
    }

    pub fn project(&self) -> &ProjectLayout {
        &self.project
    }

    pub fn registry(&self) -> anyhow::Result<&RegistryPaths> {
        self.registry
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("registry paths not resolved for this command"))
    }

    /// Load the catalog. Fatal when the index is missing or unparsable.
    pub fn catalog(&self) -> anyhow::Result<RegistryCatalog> {
        let registry = self.registry()?;
        Ok(RegistryCatalog::load(&registry.index_path())?)
    }

    pub fn layout_resolver(&self) -> anyhow::Result<LayoutResolver> {
        Ok(LayoutResolver::new(
            self.registry()?.clone(),
            self.project.clone(),
        ))
    }

    /// The hook dispatch table store for the target project.
    pub fn hook_store(&self) -> JsonStore {
        JsonStore::new(self.project.hooks_path())
    }

    /// The installed-items ledger store for the target project.
    pub fn ledger_store(&self) -> JsonStore {
        JsonStore::new(self.project.ledger_path())
    }
}
