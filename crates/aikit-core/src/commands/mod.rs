//! Command implementations: install, remove, and the read-only reports.

pub mod install;
pub mod remove;
pub mod report;

pub use install::{InstallCommand, InstallOutcome, InstallReport};
pub use remove::{RemoveCommand, RemoveReport};
pub use report::ListFilter;
