//! Typed failures callers branch on; everything else flows through anyhow.

use thiserror::Error;

use crate::types::ItemKind;

/// Fatal failures with a contract attached to them: the CLI maps these to
/// exit codes and hints, so they stay typed instead of being plain anyhow
/// messages.
#[derive(Debug, Clone, Error)]
pub enum KitError {
    /// The registry index could not be located or parsed. No partial
    /// catalog is usable, so this aborts the invocation.
    #[error("registry unavailable: {reason}")]
    RegistryUnavailable { reason: String },

    /// The requested item does not exist in the catalog.
    #[error("'{name}' not found in {kind}")]
    ItemNotFound { kind: ItemKind, name: String },
}
