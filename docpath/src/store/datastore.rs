use crate::collection::{Document, FieldUpdate};
use crate::errors::DocPathResult;
use crate::reference::DocumentReference;
use crate::store::{DocumentSnapshot, SetOptions, StructuredQuery};
use async_trait::async_trait;
use std::ops::Deref;
use std::sync::Arc;

/// Low-level interface of a hierarchical document database driver.
///
/// # Purpose
/// Defines the I/O contract every backend must follow. Handle construction
/// (collection by path, document by path, generated ids) is pure address
/// computation done by the reference types; a provider only sees finished
/// [DocumentReference]s.
///
/// # Implementations
/// - `InMemoryDatastore`: concurrent in-process backend for tests and hosts
///   without a remote database
///
/// # Thread Safety
/// Implementers must be `Send + Sync`; one handle is shared by every call.
#[async_trait]
pub trait DatastoreProvider: Send + Sync {
    /// Fetches a document. A missing document is a snapshot without data,
    /// not an error.
    async fn get(&self, reference: &DocumentReference) -> DocPathResult<DocumentSnapshot>;

    /// Writes a document, replacing it or deep-merging into it depending on
    /// `options`. Creates the document if it does not exist.
    async fn set(
        &self,
        reference: &DocumentReference,
        data: Document,
        options: SetOptions,
    ) -> DocPathResult<()>;

    /// Applies field-level updates to an existing document. Each update
    /// addresses a possibly nested field; untouched fields are preserved.
    ///
    /// # Errors
    /// Fails with `ErrorKind::NotFound` if the document does not exist.
    async fn update(
        &self,
        reference: &DocumentReference,
        updates: Vec<FieldUpdate>,
    ) -> DocPathResult<()>;

    /// Deletes a document. Deleting a missing document succeeds.
    async fn delete(&self, reference: &DocumentReference) -> DocPathResult<()>;

    /// Runs a query against the direct children of its collection.
    async fn run_query(&self, query: &StructuredQuery) -> DocPathResult<Vec<DocumentSnapshot>>;
}

/// Cloneable handle to a [DatastoreProvider].
///
/// Cloning only bumps a reference count; every component built from the
/// same config talks to the same backend.
#[derive(Clone)]
pub struct Datastore {
    inner: Arc<dyn DatastoreProvider>,
}

impl Datastore {
    pub fn new<T: DatastoreProvider + 'static>(inner: T) -> Self {
        Datastore { inner: Arc::new(inner) }
    }
}

impl Deref for Datastore {
    type Target = Arc<dyn DatastoreProvider>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
