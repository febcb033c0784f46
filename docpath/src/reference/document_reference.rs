use crate::reference::{CollectionReference, ResourcePath};
use std::fmt::Display;

/// Address of exactly one document.
///
/// A reference carries no data and performs no I/O. It is created fresh for
/// every call by the [crate::reference::AddressResolver]; there is no public
/// constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentReference {
    path: ResourcePath,
}

impl DocumentReference {
    pub(crate) fn new(path: ResourcePath) -> Self {
        DocumentReference { path }
    }

    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// The terminal segment of the path, injected as the record id on reads.
    pub fn id(&self) -> &str {
        self.path.last_segment()
    }

    /// The collection holding this document.
    pub fn parent(&self) -> CollectionReference {
        CollectionReference::new(self.path.parent())
    }

    /// A subcollection of this document.
    pub fn collection(&self, name: &str) -> CollectionReference {
        CollectionReference::new(self.path.child(name))
    }
}

impl Display for DocumentReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
