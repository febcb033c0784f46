//! Datastore seam.
//!
//! Every read and write goes through a [DatastoreProvider], the interface of
//! the underlying hierarchical document database driver. Providers are
//! wrapped by the cloneable [Datastore] handle and injected through
//! [crate::DocPathConfig]; there is no process-wide driver.
//!
//! The crate ships [memory::InMemoryDatastore]; remote backends implement
//! the same trait.

mod datastore;
pub mod memory;
mod set_options;
mod snapshot;
mod structured_query;

pub use datastore::*;
pub use set_options::*;
pub use snapshot::*;
pub use structured_query::*;
