use crate::reference::{generate_auto_id, DocumentReference, ResourcePath};
use std::fmt::Display;

/// Address of a container of documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionReference {
    path: ResourcePath,
}

impl CollectionReference {
    pub(crate) fn new(path: ResourcePath) -> Self {
        CollectionReference { path }
    }

    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    /// The terminal segment of the path.
    pub fn id(&self) -> &str {
        self.path.last_segment()
    }

    /// The document this collection is nested under, `None` for a top-level
    /// collection.
    pub fn parent(&self) -> Option<DocumentReference> {
        if self.path.segment_count() > 1 {
            Some(DocumentReference::new(self.path.parent()))
        } else {
            None
        }
    }

    pub(crate) fn document(&self, id: &str) -> DocumentReference {
        DocumentReference::new(self.path.child(id))
    }

    /// A document with a freshly generated identifier.
    pub(crate) fn new_document(&self) -> DocumentReference {
        self.document(&generate_auto_id())
    }
}

impl Display for CollectionReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}
