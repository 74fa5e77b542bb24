mod support;

use std::fs;

use aikit_core::commands::install::{InstallCommand, InstallOutcome};
use aikit_core::error::KitError;
use aikit_core::types::ItemKind;

use support::Fixture;

#[test]
fn install_agent_copies_file_and_records_ledger() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    let report = cmd.execute(ItemKind::Agent, "code-reviewer").unwrap();

    assert_eq!(report.outcome, InstallOutcome::Installed);
    assert!(report.warnings.is_empty());
    let installed = fixture.ctx.project().agents_dir().join("code-reviewer.md");
    assert_eq!(fs::read_to_string(&installed).unwrap(), "# Code Reviewer\n");
    assert_eq!(report.copied_paths, vec![installed]);

    let ledger = fixture.read_ledger();
    assert_eq!(ledger["agents"]["code-reviewer"]["version"], "1.0.0");
    assert_eq!(ledger["agents"]["code-reviewer"]["author"], "acme");
}

#[test]
fn install_unknown_item_fails_and_writes_nothing() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    let err = cmd.execute(ItemKind::Agent, "does-not-exist").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KitError>(),
        Some(KitError::ItemNotFound { .. })
    ));
    assert!(!fixture.control_dir().exists());
}

#[test]
fn install_built_in_item_short_circuits() {
    let fixture = Fixture::new();
    // Tools never reach the install CLI surface, so stage a built-in skill.
    fixture.write_index(
        r#"{"skills": [{"name": "core-skill", "version": "built-in", "author": "Anthropic",
                        "description": "Ships with the client"}]}"#,
    );
    let cmd = InstallCommand::new(fixture.ctx.clone());

    let report = cmd.execute(ItemKind::Skill, "core-skill").unwrap();

    assert_eq!(report.outcome, InstallOutcome::BuiltIn);
    assert!(!fixture.control_dir().exists());
}

#[test]
fn install_missing_artifact_warns_but_records_entry() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    let report = cmd.execute(ItemKind::Agent, "ghost").unwrap();

    assert_eq!(report.outcome, InstallOutcome::Installed);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.copied_paths.is_empty());
    assert!(!fixture.ctx.project().agents_dir().join("ghost.md").exists());

    // The ledger still records the item so installed/remove stay consistent.
    let ledger = fixture.read_ledger();
    assert!(ledger["agents"]["ghost"].is_object());
}

#[test]
fn install_skill_bundle_copies_whole_directory() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    cmd.execute(ItemKind::Skill, "notebook").unwrap();

    let dest = fixture.ctx.project().skills_dir().join("notebook");
    assert_eq!(
        fs::read_to_string(dest.join("notebook.md")).unwrap(),
        "# Notebook\n"
    );
    assert_eq!(
        fs::read_to_string(dest.join("helper.txt")).unwrap(),
        "helper\n"
    );
}

#[test]
fn reinstall_replaces_bundle_instead_of_merging() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());
    cmd.execute(ItemKind::Skill, "notebook").unwrap();

    // A file left behind by an older version must not survive reinstall.
    let dest = fixture.ctx.project().skills_dir().join("notebook");
    fs::write(dest.join("stale.txt"), "stale").unwrap();

    cmd.execute(ItemKind::Skill, "notebook").unwrap();

    assert!(!dest.join("stale.txt").exists());
    assert!(dest.join("helper.txt").exists());
}

#[test]
fn install_single_file_skill_copies_only_the_file() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    cmd.execute(ItemKind::Skill, "summarize").unwrap();

    let skills = fixture.ctx.project().skills_dir();
    assert!(skills.join("summarize.md").is_file());
    assert!(!skills.join("summarize").exists());
}

#[test]
fn install_hook_registers_dispatch_entry() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    cmd.execute(ItemKind::Hook, "auto-format").unwrap();

    let hooks = fixture.read_hooks();
    let entries = hooks["hooks"]["PreToolUse"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["_name"], "auto-format");
    assert_eq!(entries[0]["matcher"], "Write|Edit");
    assert_eq!(
        entries[0]["command"],
        "${CLAUDE_PROJECT_DIR}/.claude/scripts/auto-format.sh"
    );

    let script = fixture.ctx.project().scripts_dir().join("auto-format.sh");
    assert!(script.is_file());
}

#[cfg(unix)]
#[test]
fn installed_hook_script_is_executable() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    cmd.execute(ItemKind::Hook, "auto-format").unwrap();

    let script = fixture.ctx.project().scripts_dir().join("auto-format.sh");
    let mode = fs::metadata(&script).unwrap().permissions().mode();
    assert_eq!(mode & 0o111, 0o111);
}

#[test]
fn hooks_group_under_their_events() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    cmd.execute(ItemKind::Hook, "auto-format").unwrap();
    cmd.execute(ItemKind::Hook, "lint-gate").unwrap();
    cmd.execute(ItemKind::Hook, "session-log").unwrap();

    let hooks = fixture.read_hooks();
    let pre = hooks["hooks"]["PreToolUse"].as_array().unwrap();
    let stop = hooks["hooks"]["Stop"].as_array().unwrap();
    assert_eq!(pre.len(), 2);
    assert_eq!(stop.len(), 1);
    assert_eq!(pre[0]["_name"], "auto-format");
    assert_eq!(pre[1]["_name"], "lint-gate");
    assert_eq!(stop[0]["_name"], "session-log");
}

#[test]
fn reinstalling_a_hook_keeps_exactly_one_entry() {
    let fixture = Fixture::new();
    let cmd = InstallCommand::new(fixture.ctx.clone());

    cmd.execute(ItemKind::Hook, "auto-format").unwrap();
    cmd.execute(ItemKind::Hook, "auto-format").unwrap();

    let hooks = fixture.read_hooks();
    let entries = hooks["hooks"]["PreToolUse"].as_array().unwrap();
    assert_eq!(entries.len(), 1);

    let ledger = fixture.read_ledger();
    let recorded = ledger["hooks"].as_object().unwrap();
    assert_eq!(recorded.len(), 1);
}

#[test]
fn install_hook_with_missing_script_still_registers_dispatch() {
    let fixture = Fixture::new();
    // doc-export has no plugin file and no registry script in this fixture.
    let cmd = InstallCommand::new(fixture.ctx.clone());

    let report = cmd.execute(ItemKind::Hook, "doc-export").unwrap();

    assert_eq!(report.warnings.len(), 1);
    let hooks = fixture.read_hooks();
    assert_eq!(hooks["hooks"]["Stop"][0]["_name"], "doc-export");
    assert!(!fixture.ctx.project().scripts_dir().join("doc-export.sh").exists());
}

#[test]
fn malformed_hook_table_is_rebuilt_with_warning() {
    let fixture = Fixture::new();
    let hooks_path = fixture.ctx.project().hooks_path();
    fs::create_dir_all(hooks_path.parent().unwrap()).unwrap();
    fs::write(&hooks_path, "{broken").unwrap();

    let cmd = InstallCommand::new(fixture.ctx.clone());
    let report = cmd.execute(ItemKind::Hook, "session-log").unwrap();

    assert!(report.warnings.iter().any(|w| w.contains("malformed")));
    let hooks = fixture.read_hooks();
    assert_eq!(hooks["hooks"]["Stop"][0]["_name"], "session-log");
}
