//! Path addressing.
//!
//! Every operation starts by turning a `/`-separated string path, plus an
//! optional explicit identifier, into a [DocumentReference] or a
//! [CollectionReference]. The [AddressResolver] is the only way to obtain a
//! reference from outside the crate.

mod auto_id;
mod collection_reference;
mod document_reference;
mod resolver;
mod resource_path;

pub use auto_id::*;
pub use collection_reference::*;
pub use document_reference::*;
pub use resolver::*;
pub use resource_path::*;
