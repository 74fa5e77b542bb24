mod support;

use aikit_core::commands::install::InstallCommand;
use aikit_core::commands::report::{self, ListFilter};
use aikit_core::error::KitError;
use aikit_core::presenter::PlainPresenter;
use aikit_core::types::ItemKind;

use support::Fixture;

#[test]
fn list_renders_without_touching_project_state() {
    let fixture = Fixture::new();

    report::list(&fixture.ctx, ListFilter::All, &PlainPresenter).unwrap();
    report::list(&fixture.ctx, ListFilter::Kind(ItemKind::Hook), &PlainPresenter).unwrap();

    assert!(!fixture.control_dir().exists());
}

#[test]
fn installed_handles_absent_and_populated_ledgers() {
    let fixture = Fixture::new();

    // Absent ledger: reports "no items" without creating the file.
    report::installed(&fixture.ctx, &PlainPresenter).unwrap();
    assert!(!fixture.ctx.project().ledger_path().exists());

    InstallCommand::new(fixture.ctx.clone())
        .execute(ItemKind::Skill, "summarize")
        .unwrap();
    report::installed(&fixture.ctx, &PlainPresenter).unwrap();
}

#[test]
fn info_is_fatal_for_unknown_items() {
    let fixture = Fixture::new();

    report::info(&fixture.ctx, ItemKind::Tool, "web-search", &PlainPresenter).unwrap();

    let err = report::info(&fixture.ctx, ItemKind::Agent, "nope", &PlainPresenter).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<KitError>(),
        Some(KitError::ItemNotFound { .. })
    ));
}
