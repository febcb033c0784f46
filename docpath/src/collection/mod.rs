//! Documents and the operations that read and write them.
//!
//! # Documents
//!
//! A [Document] is an ordered map of literal string keys to
//! [crate::common::Value]s. Nested fields are addressed explicitly with a
//! [FieldPath]; partial updates split their keys on the configured separator
//! so `"address.city"` updates `city` inside `address`.
//!
//! ```rust
//! use docpath::collection::{Document, FieldPath};
//! use docpath::doc;
//!
//! let doc = doc! { name: "Alice", address: { city: "Lisbon" } };
//! let city = FieldPath::parse("address.city", ".").unwrap();
//! assert_eq!(doc.get_path(&city).and_then(|v| v.as_str()), Some("Lisbon"));
//! ```
//!
//! # Operations
//!
//! - [DocumentStore]: create, read, list, update, delete over string paths
//! - [UpsertEngine]: existence check followed by update or create
//! - [sanitize]: strips absent values before every write
//!
//! # Records
//!
//! Reads return the stored fields with an `id` field (configurable) holding
//! the document's terminal path segment. The id is never stored.

mod document;
mod field_path;
pub(crate) mod operation;
mod sanitizer;

pub use document::*;
pub use field_path::*;
pub use operation::*;
pub use sanitizer::*;
