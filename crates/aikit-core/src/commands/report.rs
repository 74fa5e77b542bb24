//! Read-only reports: list, installed, info.
//!
//! Thin projections over the catalog and the installed ledger. Nothing
//! here mutates state; all rendering goes through the injected Presenter.

use crate::context::AppContext;
use crate::presenter::Presenter;
use crate::registry::schema::RegistryItem;
use crate::store::InstalledLedger;
use crate::types::ItemKind;

/// Which kinds `list` shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Kind(ItemKind),
}

impl ListFilter {
    fn includes(self, kind: ItemKind) -> bool {
        match self {
            ListFilter::All => true,
            ListFilter::Kind(wanted) => wanted == kind,
        }
    }
}

/// List available registry items, optionally filtered by kind.
pub fn list(ctx: &AppContext, filter: ListFilter, presenter: &dyn Presenter) -> anyhow::Result<()> {
    let catalog = ctx.catalog()?;

    presenter.rule();
    presenter.heading("AI Kit Registry");
    presenter.rule();
    presenter.info("");

    for kind in ItemKind::ALL {
        if !filter.includes(kind) {
            continue;
        }
        let items = catalog.items(kind);
        if items.is_empty() {
            continue;
        }
        presenter.heading(section_title(kind));
        for item in items {
            presenter.info(&format!(
                "  {:<20} {:<14} {}{}",
                item.name,
                format_author(&item.author),
                event_tag(item),
                item.description
            ));
        }
        presenter.info("");
    }
    Ok(())
}

/// List what is installed in the target project.
pub fn installed(ctx: &AppContext, presenter: &dyn Presenter) -> anyhow::Result<()> {
    let loaded = ctx.ledger_store().load::<InstalledLedger>()?;
    if loaded.recovered {
        presenter.warn(&format!(
            "{} was malformed; treating it as empty.",
            ctx.ledger_store().path().display()
        ));
    }
    if loaded.value.is_empty() {
        presenter.info("No items installed.");
        return Ok(());
    }

    presenter.rule();
    presenter.heading(&format!(
        "Installed Items ({})",
        ctx.project().project_root().display()
    ));
    presenter.rule();
    presenter.info("");

    for kind in ItemKind::ALL {
        let Some(entries) = loaded.value.entries(kind) else {
            continue;
        };
        presenter.heading(section_title(kind));
        for (name, entry) in entries {
            presenter.info(&format!(
                "  {:<20} v{:<8} ({}) {}",
                name, entry.version, entry.author, entry.installed_at
            ));
        }
        presenter.info("");
    }
    Ok(())
}

/// Show one item's full registry metadata.
pub fn info(
    ctx: &AppContext,
    kind: ItemKind,
    name: &str,
    presenter: &dyn Presenter,
) -> anyhow::Result<()> {
    let catalog = ctx.catalog()?;
    let item = catalog.require(kind, name)?;

    presenter.rule();
    if item.is_built_in() {
        presenter.detail("  (built-in) Claude Code feature");
    } else {
        presenter.heading(&format_author(&item.author));
    }
    presenter.info("");
    presenter.info(&format!("  name: {}", item.name));
    presenter.info(&format!("  type: {kind}"));
    presenter.info(&format!("  version: {}", item.version));
    presenter.info(&format!("  description: {}", item.description));
    presenter.info(&format!("  path: {}", item.path));
    if kind == ItemKind::Hook {
        presenter.info(&format!("  event: {}", item.hook_event()));
        if let Some(matcher) = &item.matcher {
            presenter.info(&format!("  matcher: {matcher}"));
        }
    }
    presenter.rule();
    Ok(())
}

fn section_title(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Agent => "Agents",
        ItemKind::Skill => "Skills",
        ItemKind::Hook => "Hooks",
        ItemKind::Tool => "Tools",
    }
}

/// First-party items read as built-in rather than carrying an author tag.
fn format_author(author: &str) -> String {
    if author == "Anthropic" {
        "(built-in)".to_string()
    } else {
        format!("({author})")
    }
}

fn event_tag(item: &RegistryItem) -> &'static str {
    if item.hook_type.as_deref() == Some("event") {
        "[event] "
    } else {
        ""
    }
}
