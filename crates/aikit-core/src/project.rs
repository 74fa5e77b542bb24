//! Project control-directory layout.
//!
//! All installs and removals are scoped under `<projectRoot>/.claude/`; this
//! module owns the path arithmetic so the rest of the crate never spells
//! those names out.

use std::path::{Path, PathBuf};

/// Environment variable selecting the target project root.
pub const PROJECT_DIR_ENV: &str = "CLAUDE_PROJECT_DIR";

/// Directory under the project root holding installed artifacts and state.
pub const CONTROL_DIR: &str = ".claude";

/// Paths of the target project's control directory.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    project_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Resolve the project root from the environment, defaulting to the
    /// current directory.
    pub fn from_env() -> Self {
        let root = std::env::var_os(PROJECT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(root)
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn control_dir(&self) -> PathBuf {
        self.project_root.join(CONTROL_DIR)
    }

    pub fn agents_dir(&self) -> PathBuf {
        self.control_dir().join("agents")
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.control_dir().join("skills")
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.control_dir().join("scripts")
    }

    /// The hook dispatch table document.
    pub fn hooks_path(&self) -> PathBuf {
        self.control_dir().join("hooks.json")
    }

    /// The installed-items ledger document.
    pub fn ledger_path(&self) -> PathBuf {
        self.control_dir().join(".installed.json")
    }
}
