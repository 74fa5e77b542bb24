//! AI Kit Core Library
//!
//! Provides the domain logic for resolving items from the static registry,
//! materializing them into a project's control directory, and tracking
//! installed state so items can be listed and removed.

pub mod commands;
pub mod context;
pub mod error;
pub mod fs;
pub mod layout;
pub mod presenter;
pub mod project;
pub mod registry;
pub mod store;
pub mod types;

/// Re-exports of commonly used types
pub mod prelude {
    // Commands
    pub use crate::commands::install::{InstallCommand, InstallOutcome, InstallReport};
    pub use crate::commands::remove::{RemoveCommand, RemoveReport};
    pub use crate::commands::report::{self, ListFilter};

    // Context
    pub use crate::context::AppContext;

    // Errors
    pub use crate::error::KitError;

    // Layout
    pub use crate::layout::{ArtifactLayout, LayoutKind, LayoutOutcome, LayoutResolver};

    // Presentation
    pub use crate::presenter::{PlainPresenter, Presenter};

    // Project paths
    pub use crate::project::ProjectLayout;

    // Registry
    pub use crate::registry::catalog::RegistryCatalog;
    pub use crate::registry::locator::{PathCandidate, RegistryPaths};
    pub use crate::registry::schema::RegistryItem;

    // Stores
    pub use crate::store::{HookEntry, HookTable, InstalledLedger, JsonStore, LedgerEntry};

    // Types
    pub use crate::types::ItemKind;
}
