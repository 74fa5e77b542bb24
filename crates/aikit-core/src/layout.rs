//! Artifact layout resolution.
//!
//! Maps a registry item's declared source path and kind to the concrete
//! copy operations an install performs. Skills are the interesting case:
//! a skill is either a single markdown file or a whole directory bundle
//! named after the item, and the two install differently.

use std::path::PathBuf;

use crate::project::ProjectLayout;
use crate::registry::locator::RegistryPaths;
use crate::registry::schema::RegistryItem;
use crate::types::ItemKind;

/// Shape of an item's artifacts on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// One file copied to the destination path.
    SingleFile,
    /// A whole directory tree copied under the destination path.
    Directory,
}

/// Resolved description of what an install copies. Created per install
/// call, consumed immediately, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactLayout {
    pub kind: LayoutKind,
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Result of a layout resolution. A missing source is not a failure:
/// installs record the registry entry anyway and surface a warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutOutcome {
    Resolved(ArtifactLayout),
    Missing {
        expected: PathBuf,
        destination: PathBuf,
    },
}

/// Hook names whose script ships outside the registry tree, as path
/// segments under the plugins root. Additions here are data, not new code
/// paths.
const SCRIPT_OVERRIDES: &[(&str, &[&str])] =
    &[("doc-export", &["doc-export", "scripts", "export-doc.sh"])];

/// Resolves item layouts against a registry tree and a target project.
#[derive(Debug, Clone)]
pub struct LayoutResolver {
    registry: RegistryPaths,
    project: ProjectLayout,
}

impl LayoutResolver {
    pub fn new(registry: RegistryPaths, project: ProjectLayout) -> Self {
        Self { registry, project }
    }

    /// Resolve where `item`'s artifacts live and where they install to.
    /// Only agents, skills, and hooks carry artifacts.
    pub fn resolve(&self, kind: ItemKind, item: &RegistryItem) -> anyhow::Result<LayoutOutcome> {
        match kind {
            ItemKind::Agent => Ok(self.resolve_agent(item)),
            ItemKind::Skill => Ok(self.resolve_skill(item)),
            ItemKind::Hook => Ok(self.resolve_hook(item)),
            ItemKind::Tool => anyhow::bail!("tools are built-in and carry no artifacts"),
        }
    }

    fn source_dir(&self, item: &RegistryItem) -> PathBuf {
        self.registry.registry_dir().join(&item.path)
    }

    fn resolve_agent(&self, item: &RegistryItem) -> LayoutOutcome {
        let source = self.source_dir(item).join(format!("{}.md", item.name));
        let destination = self.project.agents_dir().join(format!("{}.md", item.name));
        resolve_file(source, destination)
    }

    fn resolve_skill(&self, item: &RegistryItem) -> LayoutOutcome {
        let source_dir = self.source_dir(item);
        let marker = source_dir.join(format!("{}.md", item.name));
        if source_dir.is_dir() && marker.is_file() {
            // Multi-file bundle: the whole directory moves as one unit.
            return LayoutOutcome::Resolved(ArtifactLayout {
                kind: LayoutKind::Directory,
                source: source_dir,
                destination: self.project.skills_dir().join(&item.name),
            });
        }
        let destination = self.project.skills_dir().join(format!("{}.md", item.name));
        resolve_file(marker, destination)
    }

    fn resolve_hook(&self, item: &RegistryItem) -> LayoutOutcome {
        let destination = self.project.scripts_dir().join(format!("{}.sh", item.name));
        if let Some(source) = self.script_override(&item.name)
            && source.is_file()
        {
            return LayoutOutcome::Resolved(ArtifactLayout {
                kind: LayoutKind::SingleFile,
                source,
                destination,
            });
        }
        let source = self.source_dir(item).join(format!("{}.sh", item.name));
        resolve_file(source, destination)
    }

    fn script_override(&self, name: &str) -> Option<PathBuf> {
        SCRIPT_OVERRIDES
            .iter()
            .find(|(overridden, _)| *overridden == name)
            .map(|(_, segments)| {
                let mut path = self.registry.plugins_dir().to_path_buf();
                for segment in *segments {
                    path.push(*segment);
                }
                path
            })
    }
}

fn resolve_file(source: PathBuf, destination: PathBuf) -> LayoutOutcome {
    if source.is_file() {
        LayoutOutcome::Resolved(ArtifactLayout {
            kind: LayoutKind::SingleFile,
            source,
            destination,
        })
    } else {
        LayoutOutcome::Missing {
            expected: source,
            destination,
        }
    }
}
