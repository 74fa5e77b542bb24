//! Static registry: schema, catalog loading, and location discovery.

pub mod catalog;
pub mod locator;
pub mod schema;

pub use catalog::RegistryCatalog;
pub use locator::{PathCandidate, RegistryPaths};
pub use schema::{RegistryDocument, RegistryItem};
