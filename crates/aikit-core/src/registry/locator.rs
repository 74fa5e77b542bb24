//! Registry location discovery.
//!
//! The registry is a static directory shipped alongside the binary, so its
//! location varies by install method. Candidate locations are an ordered
//! list tried in sequence; the first one holding an index file wins.

use std::path::{Path, PathBuf};

use crate::error::KitError;

/// Environment variable overriding registry discovery entirely.
pub const REGISTRY_DIR_ENV: &str = "AI_KIT_REGISTRY_DIR";

const INDEX_FILE: &str = "index.json";
const PLUGINS_DIR: &str = "plugins";

/// One place the registry might live, labeled for diagnostics.
#[derive(Debug, Clone)]
pub struct PathCandidate {
    pub label: &'static str,
    pub path: PathBuf,
}

/// Resolved registry tree: the registry directory itself plus the sibling
/// plugins tree consulted by hook script overrides.
#[derive(Debug, Clone)]
pub struct RegistryPaths {
    registry_dir: PathBuf,
    plugins_dir: PathBuf,
}

impl RegistryPaths {
    /// Build paths rooted at a registry directory; the plugins tree sits
    /// next to it.
    pub fn from_registry_dir(registry_dir: PathBuf) -> Self {
        let plugins_dir = registry_dir
            .parent()
            .map(|parent| parent.join(PLUGINS_DIR))
            .unwrap_or_else(|| PathBuf::from(PLUGINS_DIR));
        Self {
            registry_dir,
            plugins_dir,
        }
    }

    pub fn registry_dir(&self) -> &Path {
        &self.registry_dir
    }

    pub fn plugins_dir(&self) -> &Path {
        &self.plugins_dir
    }

    pub fn index_path(&self) -> PathBuf {
        self.registry_dir.join(INDEX_FILE)
    }
}

/// Candidate registry locations in priority order: environment override,
/// next to the executable, the working directory, then the user data dir.
pub fn default_candidates() -> Vec<PathCandidate> {
    let mut candidates = Vec::new();
    if let Some(dir) = std::env::var_os(REGISTRY_DIR_ENV) {
        candidates.push(PathCandidate {
            label: "environment override",
            path: PathBuf::from(dir),
        });
    }
    if let Ok(exe) = std::env::current_exe()
        && let Some(dir) = exe.parent()
    {
        candidates.push(PathCandidate {
            label: "next to executable",
            path: dir.join("registry"),
        });
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(PathCandidate {
            label: "working directory",
            path: cwd.join("registry"),
        });
    }
    if let Some(data) = dirs::data_dir() {
        candidates.push(PathCandidate {
            label: "user data directory",
            path: data.join("ai-kit").join("registry"),
        });
    }
    candidates
}

/// Pick the first candidate that actually holds an index file.
pub fn locate(candidates: &[PathCandidate]) -> Result<RegistryPaths, KitError> {
    for candidate in candidates {
        if candidate.path.join(INDEX_FILE).is_file() {
            tracing::debug!(
                label = candidate.label,
                path = %candidate.path.display(),
                "registry located"
            );
            return Ok(RegistryPaths::from_registry_dir(candidate.path.clone()));
        }
    }
    let tried = candidates
        .iter()
        .map(|candidate| candidate.path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(KitError::RegistryUnavailable {
        reason: format!("no {INDEX_FILE} found (tried: {tried})"),
    })
}
