use crate::collection::{Document, FieldPath};
use crate::common::Value;
use crate::reference::DocumentReference;

/// Raw datastore result for one document.
///
/// A snapshot pairs a reference with the stored data, or with nothing when
/// the document does not exist. Query pages hand snapshots back as opaque
/// pagination cursors.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSnapshot {
    reference: DocumentReference,
    data: Option<Document>,
}

impl DocumentSnapshot {
    pub fn new(reference: DocumentReference, data: Option<Document>) -> Self {
        DocumentSnapshot { reference, data }
    }

    /// Snapshot of a document that does not exist.
    pub fn missing(reference: DocumentReference) -> Self {
        DocumentSnapshot { reference, data: None }
    }

    pub fn exists(&self) -> bool {
        self.data.is_some()
    }

    pub fn reference(&self) -> &DocumentReference {
        &self.reference
    }

    pub fn id(&self) -> &str {
        self.reference.id()
    }

    /// The stored fields, without any injected id.
    pub fn data(&self) -> Option<&Document> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<Document> {
        self.data
    }

    /// Value at a nested field path, `None` if the document or field is missing.
    pub fn get(&self, field: &FieldPath) -> Option<&Value> {
        self.data.as_ref().and_then(|doc| doc.get_path(field))
    }
}
