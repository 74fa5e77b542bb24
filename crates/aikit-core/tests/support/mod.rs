//! Shared fixtures: a registry tree plus a target project under one temp
//! root.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use aikit_core::context::AppContext;
use aikit_core::project::ProjectLayout;
use aikit_core::registry::locator::RegistryPaths;

/// Registry index covering one item of every interesting shape.
pub const SAMPLE_INDEX: &str = r#"{
    "agents": [
        {"name": "code-reviewer", "version": "1.0.0", "author": "acme",
         "description": "Reviews diffs before commit", "path": "agents/code-reviewer"},
        {"name": "ghost", "version": "1.0.0", "author": "acme",
         "description": "Registry entry without files", "path": "agents/ghost"}
    ],
    "skills": [
        {"name": "summarize", "version": "0.3.0", "author": "acme",
         "description": "Single-file skill", "path": "skills/summarize"},
        {"name": "notebook", "version": "2.1.0", "author": "acme",
         "description": "Directory bundle skill", "path": "skills/notebook"}
    ],
    "hooks": [
        {"name": "auto-format", "version": "0.2.0", "author": "acme",
         "description": "Formats touched files", "path": "hooks/auto-format",
         "event": "PreToolUse", "matcher": "Write|Edit", "type": "event"},
        {"name": "lint-gate", "version": "0.1.0", "author": "acme",
         "description": "Blocks unlinted writes", "path": "hooks/lint-gate",
         "event": "PreToolUse", "matcher": "Write", "type": "event"},
        {"name": "session-log", "version": "1.1.0", "author": "acme",
         "description": "Appends a session summary", "path": "hooks/session-log"},
        {"name": "doc-export", "version": "0.5.0", "author": "acme",
         "description": "Exports docs on stop", "path": "hooks/doc-export"}
    ],
    "tools": [
        {"name": "web-search", "version": "built-in", "author": "Anthropic",
         "description": "Built-in web search"}
    ]
}"#;

pub struct Fixture {
    // Held for its Drop; the context only stores paths into it.
    _temp: TempDir,
    pub ctx: AppContext,
}

impl Fixture {
    /// An empty registry directory and project root; the index is written
    /// separately so tests can control its contents.
    pub fn bare() -> Self {
        let temp = TempDir::new().unwrap();
        let registry_dir = temp.path().join("registry");
        let project_root = temp.path().join("project");
        fs::create_dir_all(&registry_dir).unwrap();
        fs::create_dir_all(&project_root).unwrap();

        let ctx = AppContext::with_paths(
            RegistryPaths::from_registry_dir(registry_dir),
            ProjectLayout::new(project_root),
        );
        Self { _temp: temp, ctx }
    }

    /// The standard fixture: sample index plus the artifact files most
    /// tests need.
    pub fn new() -> Self {
        let fixture = Self::bare();
        fixture.write_index(SAMPLE_INDEX);
        fixture.write_registry_file("agents/code-reviewer/code-reviewer.md", "# Code Reviewer\n");
        fixture.write_registry_file("skills/summarize/summarize.md", "# Summarize\n");
        fixture.write_registry_file("skills/notebook/notebook.md", "# Notebook\n");
        fixture.write_registry_file("skills/notebook/helper.txt", "helper\n");
        fixture.write_registry_file("hooks/auto-format/auto-format.sh", "#!/bin/sh\nfmt\n");
        fixture.write_registry_file("hooks/lint-gate/lint-gate.sh", "#!/bin/sh\nlint\n");
        fixture.write_registry_file("hooks/session-log/session-log.sh", "#!/bin/sh\nlog\n");
        fixture
    }

    pub fn registry_dir(&self) -> PathBuf {
        self.ctx.registry().unwrap().registry_dir().to_path_buf()
    }

    pub fn control_dir(&self) -> PathBuf {
        self.ctx.project().control_dir()
    }

    pub fn write_index(&self, json: &str) {
        fs::write(self.registry_dir().join("index.json"), json).unwrap();
    }

    pub fn write_registry_file(&self, relative: &str, contents: &str) {
        let path = self.registry_dir().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn write_plugin_file(&self, relative: &str, contents: &str) {
        let path = self.ctx.registry().unwrap().plugins_dir().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn read_hooks(&self) -> serde_json::Value {
        let bytes = fs::read(self.ctx.project().hooks_path()).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    pub fn read_ledger(&self) -> serde_json::Value {
        let bytes = fs::read(self.ctx.project().ledger_path()).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }
}
