use crate::collection::{Document, DocumentStore, UpsertEngine, UpsertOutcome, WriteResult};
use crate::docpath_builder::DocPathBuilder;
use crate::docpath_config::DocPathConfig;
use crate::errors::DocPathResult;
use crate::query::{QueryBuilder, QueryPage, QuerySpec};
use crate::reference::{AddressResolver, DocumentReference};
use std::fmt::Debug;
use std::sync::Arc;

/// Entry point: path-addressed access to a hierarchical document database.
///
/// `DocPath` wires a [DocumentStore], an [UpsertEngine] and a [QueryBuilder]
/// to one shared [DocPathConfig]. It is cheap to clone and every clone talks
/// to the same datastore.
///
/// ```rust
/// use docpath::{doc, DocPath};
///
/// # async fn run() -> docpath::errors::DocPathResult<()> {
/// let db = DocPath::builder().open()?;
///
/// let created = db.create("users", None, doc! { name: "A" }).await?;
/// db.update("users", Some(&created.id), doc! { age: 5 }).await?;
///
/// let user = db.read("users", Some(&created.id)).await?.unwrap();
/// assert!(user.contains_key("lut"));
///
/// db.delete("users", Some(&created.id)).await?;
/// assert!(db.read("users", Some(&created.id)).await?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct DocPath {
    inner: Arc<DocPathInner>,
}

impl Debug for DocPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let config = &self.inner.config;
        f.debug_struct("DocPath")
            .field("id_field", &config.id_field())
            .field("timestamp_field", &config.timestamp_field())
            .field("field_separator", &config.field_separator())
            .finish_non_exhaustive()
    }
}

impl DocPath {
    pub fn builder() -> DocPathBuilder {
        DocPathBuilder::new()
    }

    pub(crate) fn new(config: DocPathConfig) -> Self {
        DocPath {
            inner: Arc::new(DocPathInner::new(config)),
        }
    }

    pub fn config(&self) -> &DocPathConfig {
        &self.inner.config
    }

    /// The resolver, for callers that need references without any I/O.
    pub fn resolver(&self) -> AddressResolver {
        self.inner.resolver
    }

    pub async fn create(&self, path: &str, id: Option<&str>, data: Document) -> DocPathResult<WriteResult> {
        self.inner.store.create(path, id, data).await
    }

    pub async fn create_with_merge(&self, path: &str, id: Option<&str>, data: Document) -> DocPathResult<WriteResult> {
        self.inner.store.create_with_merge(path, id, data).await
    }

    pub fn create_reference_only(&self, path: &str, id: Option<&str>) -> DocPathResult<DocumentReference> {
        self.inner.store.create_reference_only(path, id)
    }

    pub async fn read(&self, path: &str, id: Option<&str>) -> DocPathResult<Option<Document>> {
        self.inner.store.read(path, id).await
    }

    pub async fn list(&self, path: &str, id: Option<&str>) -> DocPathResult<Vec<Option<Document>>> {
        self.inner.store.list(path, id).await
    }

    pub async fn update(&self, path: &str, id: Option<&str>, partial: Document) -> DocPathResult<()> {
        self.inner.store.update(path, id, partial).await
    }

    pub async fn delete(&self, path: &str, id: Option<&str>) -> DocPathResult<()> {
        self.inner.store.delete(path, id).await
    }

    pub async fn exists(&self, path: &str, id: Option<&str>) -> DocPathResult<bool> {
        self.inner.store.exists(path, id).await
    }

    /// Not atomic: see [UpsertEngine].
    pub async fn upsert(&self, reference: &DocumentReference, data: Document) -> DocPathResult<UpsertOutcome> {
        self.inner.upsert.upsert(reference, data).await
    }

    pub async fn upsert_with_distinct_payloads(
        &self,
        reference: &DocumentReference,
        update_data: Document,
        create_data: Option<Document>,
    ) -> DocPathResult<UpsertOutcome> {
        self.inner
            .upsert
            .upsert_with_distinct_payloads(reference, update_data, create_data)
            .await
    }

    pub async fn query(&self, path: &str, spec: QuerySpec) -> DocPathResult<QueryPage> {
        self.inner.query.query(path, spec).await
    }
}

struct DocPathInner {
    config: DocPathConfig,
    resolver: AddressResolver,
    store: DocumentStore,
    upsert: UpsertEngine,
    query: QueryBuilder,
}

impl DocPathInner {
    fn new(config: DocPathConfig) -> Self {
        let store = DocumentStore::new(config.clone());
        DocPathInner {
            resolver: AddressResolver::new(),
            upsert: UpsertEngine::new(store.clone()),
            query: QueryBuilder::new(config.clone()),
            store,
            config,
        }
    }
}
