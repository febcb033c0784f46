use super::query_engine;
use crate::collection::{Document, FieldUpdate};
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use crate::reference::{DocumentReference, ResourcePath};
use crate::store::{DatastoreProvider, DocumentSnapshot, SetOptions, StructuredQuery};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-process implementation of [DatastoreProvider].
///
/// # Purpose
/// Stores every document in a concurrent map keyed by its full path. It
/// backs the default [crate::DocPath] configuration and the test suites.
///
/// # Characteristics
/// - **Thread-Safe**: documents live in a `DashMap`; clones share state
/// - **Hierarchical**: a collection is the set of documents one segment
///   below its path, so subcollections never show up in their parent's
///   listing
/// - **Failure Injection**: [InMemoryDatastore::fail_next] makes the next
///   calls fail with a backend error
#[derive(Clone, Default)]
pub struct InMemoryDatastore {
    inner: Arc<InMemoryDatastoreInner>,
}

impl InMemoryDatastore {
    pub fn new() -> InMemoryDatastore {
        InMemoryDatastore::default()
    }

    /// Makes the next `count` datastore calls fail with
    /// [ErrorKind::BackendError].
    pub fn fail_next(&self, count: usize) {
        self.inner.pending_failures.store(count, Ordering::SeqCst);
    }

    /// Number of stored documents across all collections.
    pub fn document_count(&self) -> usize {
        self.inner.documents.len()
    }

    pub fn clear(&self) {
        self.inner.documents.clear();
    }
}

#[async_trait]
impl DatastoreProvider for InMemoryDatastore {
    async fn get(&self, reference: &DocumentReference) -> DocPathResult<DocumentSnapshot> {
        self.inner.check_failure("get")?;
        let data = self
            .inner
            .documents
            .get(reference.path())
            .map(|entry| entry.value().clone());
        Ok(DocumentSnapshot::new(reference.clone(), data))
    }

    async fn set(
        &self,
        reference: &DocumentReference,
        data: Document,
        options: SetOptions,
    ) -> DocPathResult<()> {
        self.inner.check_failure("set")?;
        if options.is_merge() {
            match self.inner.documents.entry(reference.path().clone()) {
                Entry::Occupied(mut existing) => existing.get_mut().merge(&data),
                Entry::Vacant(vacant) => {
                    vacant.insert(data);
                }
            }
        } else {
            self.inner.documents.insert(reference.path().clone(), data);
        }
        Ok(())
    }

    async fn update(
        &self,
        reference: &DocumentReference,
        updates: Vec<FieldUpdate>,
    ) -> DocPathResult<()> {
        self.inner.check_failure("update")?;
        match self.inner.documents.get_mut(reference.path()) {
            Some(mut entry) => {
                let doc = entry.value_mut();
                for update in updates {
                    doc.set_path(&update.field, update.value);
                }
                Ok(())
            }
            None => {
                log::error!("No document to update at {}", reference);
                Err(DocPathError::new(
                    &format!("No document to update: {}", reference),
                    ErrorKind::NotFound,
                )
                .with_path(&reference.to_string()))
            }
        }
    }

    async fn delete(&self, reference: &DocumentReference) -> DocPathResult<()> {
        self.inner.check_failure("delete")?;
        self.inner.documents.remove(reference.path());
        Ok(())
    }

    async fn run_query(&self, query: &StructuredQuery) -> DocPathResult<Vec<DocumentSnapshot>> {
        self.inner.check_failure("run_query")?;
        let collection = query.collection().path();
        let candidates = self
            .inner
            .documents
            .iter()
            .filter(|entry| entry.key().is_direct_child_of(collection))
            .map(|entry| {
                DocumentSnapshot::new(
                    DocumentReference::new(entry.key().clone()),
                    Some(entry.value().clone()),
                )
            })
            .collect();
        query_engine::execute(query, candidates)
    }
}

#[derive(Default)]
struct InMemoryDatastoreInner {
    documents: DashMap<ResourcePath, Document>,
    pending_failures: AtomicUsize,
}

impl InMemoryDatastoreInner {
    fn check_failure(&self, operation: &str) -> DocPathResult<()> {
        let injected = self
            .pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if injected {
            log::error!("Injected failure for {}", operation);
            return Err(DocPathError::new(
                &format!("Injected datastore failure during {}", operation),
                ErrorKind::BackendError,
            ));
        }
        Ok(())
    }
}
