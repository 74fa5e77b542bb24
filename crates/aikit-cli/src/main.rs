//! AI Kit - Claude Code extension manager
//!
//! Usage:
//!   ai-kit list [all|agents|skills|hooks|tools]
//!   ai-kit install <agents|skills|hooks> <name>
//!   ai-kit remove <agents|skills|hooks> <name>
//!   ai-kit installed
//!   ai-kit info <type> <name>

mod presenter;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aikit_core::commands::install::{InstallCommand, InstallOutcome};
use aikit_core::commands::remove::RemoveCommand;
use aikit_core::commands::report::{self, ListFilter};
use aikit_core::context::AppContext;
use aikit_core::error::KitError;
use aikit_core::presenter::Presenter;
use aikit_core::types::ItemKind;

use crate::presenter::ConsolePresenter;

#[derive(Parser)]
#[command(name = "ai-kit")]
#[command(about = "Claude Code extension manager", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available registry items
    List {
        /// Type of items to list
        #[arg(value_enum, default_value = "all")]
        kind: ListKind,
    },

    /// Install an item into the current project
    Install {
        /// Type of item
        #[arg(value_enum)]
        kind: InstallKind,
        /// Name of the item
        name: String,
    },

    /// Remove an installed item
    #[command(alias = "rm")]
    Remove {
        /// Type of item
        #[arg(value_enum)]
        kind: InstallKind,
        /// Name of the item
        name: String,
    },

    /// List installed items
    Installed,

    /// Show item details
    Info {
        /// Type of item
        #[arg(value_enum)]
        kind: InfoKind,
        /// Name of the item
        name: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ListKind {
    All,
    Agents,
    Skills,
    Hooks,
    Tools,
}

impl From<ListKind> for ListFilter {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::All => ListFilter::All,
            ListKind::Agents => ListFilter::Kind(ItemKind::Agent),
            ListKind::Skills => ListFilter::Kind(ItemKind::Skill),
            ListKind::Hooks => ListFilter::Kind(ItemKind::Hook),
            ListKind::Tools => ListFilter::Kind(ItemKind::Tool),
        }
    }
}

/// Kinds that can be installed and removed; tools are built-in only.
#[derive(Clone, Copy, ValueEnum)]
enum InstallKind {
    Agents,
    Skills,
    Hooks,
}

impl From<InstallKind> for ItemKind {
    fn from(kind: InstallKind) -> Self {
        match kind {
            InstallKind::Agents => ItemKind::Agent,
            InstallKind::Skills => ItemKind::Skill,
            InstallKind::Hooks => ItemKind::Hook,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum InfoKind {
    Agents,
    Skills,
    Hooks,
    Tools,
}

impl From<InfoKind> for ItemKind {
    fn from(kind: InfoKind) -> Self {
        match kind {
            InfoKind::Agents => ItemKind::Agent,
            InfoKind::Skills => ItemKind::Skill,
            InfoKind::Hooks => ItemKind::Hook,
            InfoKind::Tools => ItemKind::Tool,
        }
    }
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aikit_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let presenter = ConsolePresenter::new();

    if let Err(err) = run(cli, &presenter) {
        report_failure(&err, &presenter);
        std::process::exit(1);
    }
}

fn run(cli: Cli, presenter: &dyn Presenter) -> Result<()> {
    match cli.command {
        Commands::List { kind } => {
            let ctx = AppContext::from_env()?;
            report::list(&ctx, kind.into(), presenter)
        }
        Commands::Install { kind, name } => {
            let ctx = AppContext::from_env()?;
            run_install(&ctx, kind.into(), &name, presenter)
        }
        Commands::Remove { kind, name } => {
            // Removal needs no registry; it must work even when none is found.
            let ctx = AppContext::without_registry();
            run_remove(&ctx, kind.into(), &name, presenter)
        }
        Commands::Installed => {
            let ctx = AppContext::without_registry();
            report::installed(&ctx, presenter)
        }
        Commands::Info { kind, name } => {
            let ctx = AppContext::from_env()?;
            report::info(&ctx, kind.into(), &name, presenter)
        }
    }
}

fn run_install(
    ctx: &AppContext,
    kind: ItemKind,
    name: &str,
    presenter: &dyn Presenter,
) -> Result<()> {
    let report = InstallCommand::new(ctx.clone()).execute(kind, name)?;

    match report.outcome {
        InstallOutcome::BuiltIn => {
            presenter.info(&format!(
                "'{}' is a built-in feature of Claude Code.",
                report.name
            ));
            presenter.detail("No installation required.");
        }
        InstallOutcome::Installed => {
            presenter.info(&format!(
                "Installing {}/{} v{}...",
                report.kind, report.name, report.version
            ));
            if !report.description.is_empty() {
                presenter.detail(&format!("  {}", report.description));
            }
            if !report.author.is_empty() {
                presenter.detail(&format!("  by {}", report.author));
            }
            for warning in &report.warnings {
                presenter.warn(warning);
            }
            presenter.success(&format!("{} installed successfully", report.name));
        }
    }
    Ok(())
}

fn run_remove(
    ctx: &AppContext,
    kind: ItemKind,
    name: &str,
    presenter: &dyn Presenter,
) -> Result<()> {
    presenter.info(&format!("Removing {kind}/{name}..."));
    let report = RemoveCommand::new(ctx.clone()).execute(kind, name)?;
    for warning in &report.warnings {
        presenter.warn(warning);
    }
    presenter.success(&format!("{} removed", report.name));
    Ok(())
}

fn report_failure(err: &anyhow::Error, presenter: &dyn Presenter) {
    presenter.error(&format!("{err:#}"));
    if let Some(KitError::ItemNotFound { kind, .. }) = err.downcast_ref::<KitError>() {
        presenter.warn(&format!(
            "Hint: check available items with 'ai-kit list {kind}'"
        ));
    }
}
