//! # docpath - path-addressed document database client
//!
//! docpath is a client-side layer over a hierarchical document database
//! (collections holding documents, documents holding subcollections). Callers
//! address documents with plain `/`-separated strings instead of building
//! nested collection and document handles by hand.
//!
//! ## Key Features
//!
//! - **Path Resolution**: parity-based classification of string paths into
//!   document or collection references
//! - **CRUD**: create, read, list, update and delete with payload sanitizing
//!   and read-time id injection
//! - **Upsert**: existence check followed by update or create
//! - **Queries**: ANDed conditions, one ordering, keyset pagination cursors
//! - **Pluggable Datastore**: async driver trait with an in-memory backend
//! - **HTTP Collaborator**: `reqwest` wrapper with a uniform response envelope
//!   (`http` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use docpath::common::SortOrder;
//! use docpath::filter::field;
//! use docpath::query::QuerySpec;
//! use docpath::{doc, DocPath};
//!
//! # async fn run() -> docpath::errors::DocPathResult<()> {
//! let db = DocPath::builder().open()?;
//!
//! // auto-generated id directly under a top-level collection
//! let created = db.create("users", None, doc! { name: "A", age: 20 }).await?;
//!
//! // nested keys in an update address nested fields
//! db.update("users", Some(&created.id), doc! { "address.city": "Lisbon" }).await?;
//!
//! let page = db
//!     .query(
//!         "users",
//!         QuerySpec::new()
//!             .where_condition(field("age").gte(18))
//!             .order_by("age", SortOrder::Descending)
//!             .limit(10),
//!     )
//!     .await?;
//! assert_eq!(page.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Design Pattern
//!
//! [DocPath], [DocPathConfig] and the [store::Datastore] handle use the
//! PIMPL pattern: the public type wraps an `Arc` to its implementation, so
//! clones are cheap and share state. The datastore is injected through the
//! config; there is no process-wide driver.
//!
//! ## Concurrency
//!
//! Operations hold no locks across calls. Upserts are read-then-write and
//! not atomic, see [collection::UpsertEngine].
//!
//! ## Module Organization
//!
//! - [`reference`] - Path parsing, references and the address resolver
//! - [`collection`] - Documents, sanitizer, CRUD and upsert operations
//! - [`filter`] - Query conditions
//! - [`query`] - Query specs, pages and the query builder
//! - [`store`] - Datastore trait and the in-memory backend
//! - [`common`] - Values, sort order, constants and utilities
//! - [`errors`] - Error types and result definitions
//! - `http` - HTTP request collaborator

pub mod collection;
pub mod common;
pub mod docpath;
pub mod docpath_builder;
pub mod docpath_config;
pub mod errors;
pub mod filter;
#[cfg(feature = "http")]
pub mod http;
pub mod query;
pub mod reference;
pub mod store;

pub use crate::docpath::DocPath;
pub use docpath_builder::DocPathBuilder;
pub use docpath_config::DocPathConfig;

#[cfg(test)]
#[ctor::ctor]
fn init() {
    colog::init();
}
