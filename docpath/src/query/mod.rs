//! Declarative queries with keyset pagination.
//!
//! A [QuerySpec] lists conditions, an optional ordering, a limit and up to
//! three cursors. [QueryBuilder::query] runs it and returns a [QueryPage]
//! whose first and last snapshots are the cursors for the neighbouring
//! pages.

mod query_builder;
mod query_page;
mod query_spec;

pub use query_builder::*;
pub use query_page::*;
pub use query_spec::*;
