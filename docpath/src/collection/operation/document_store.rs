use crate::collection::{sanitize, Document, FieldPath, FieldUpdate, WriteResult};
use crate::common::{get_current_time_millis, Value};
use crate::docpath_config::DocPathConfig;
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use crate::reference::{AddressResolver, DocumentReference};
use crate::store::{DocumentSnapshot, SetOptions, StructuredQuery};

/// CRUD primitives over string paths.
///
/// Every operation resolves its address with the [AddressResolver], routes
/// write payloads through [sanitize] and drops the id field, then calls the
/// configured datastore.
/// Resolution failures surface as [ErrorKind::InvalidPath]; a failed driver
/// call is logged with its path and wrapped as a write, read or delete error
/// that keeps the driver error as its cause.
#[derive(Clone)]
pub struct DocumentStore {
    config: DocPathConfig,
    resolver: AddressResolver,
}

impl DocumentStore {
    pub fn new(config: DocPathConfig) -> Self {
        DocumentStore {
            config,
            resolver: AddressResolver::new(),
        }
    }

    /// Writes `data` with replace semantics. Without an `id` the document
    /// gets a generated identifier.
    pub async fn create(&self, path: &str, id: Option<&str>, data: Document) -> DocPathResult<WriteResult> {
        self.create_with_options(path, id, data, SetOptions::overwrite()).await
    }

    /// Writes `data` deep-merged into any existing document.
    pub async fn create_with_merge(
        &self,
        path: &str,
        id: Option<&str>,
        data: Document,
    ) -> DocPathResult<WriteResult> {
        self.create_with_options(path, id, data, SetOptions::merge()).await
    }

    /// Resolves the reference a create would write to, without any I/O.
    pub fn create_reference_only(&self, path: &str, id: Option<&str>) -> DocPathResult<DocumentReference> {
        self.resolver.resolve_for_create(path, id)
    }

    /// Reads a document. Returns `None` if it does not exist, otherwise the
    /// stored fields with the id field injected.
    pub async fn read(&self, path: &str, id: Option<&str>) -> DocPathResult<Option<Document>> {
        let reference = self.resolver.resolve_document(path, id)?;
        self.read_at(&reference).await
    }

    /// With an `id`, a one-element read. Without, every document of the
    /// collection resolved by the listing rule, in datastore order.
    pub async fn list(&self, path: &str, id: Option<&str>) -> DocPathResult<Vec<Option<Document>>> {
        if id.is_some() {
            return Ok(vec![self.read(path, id).await?]);
        }

        let collection = self.resolver.resolve_collection(path)?;
        let query = StructuredQuery::new(collection.clone());
        let snapshots = match self.config.datastore()?.run_query(&query).await {
            Ok(snapshots) => snapshots,
            Err(err) => {
                log::error!("Failed to list documents under {}: {}", collection, err);
                return Err(DocPathError::new_with_cause(
                    "Failed to list documents",
                    ErrorKind::ReadError,
                    err,
                )
                .with_path(path));
            }
        };

        snapshots
            .into_iter()
            .map(|snapshot| self.materialize(snapshot))
            .collect()
    }

    /// Partially updates an existing document. Keys of `partial` are split on
    /// the configured separator into nested field paths, and the write
    /// timestamp field is set to the current epoch millis.
    ///
    /// A missing document fails with [ErrorKind::WriteError] caused by
    /// [ErrorKind::NotFound].
    pub async fn update(&self, path: &str, id: Option<&str>, partial: Document) -> DocPathResult<()> {
        let reference = self.resolver.resolve_document(path, id)?;
        self.update_at(&reference, partial).await
    }

    /// Deletes a document; deleting a missing document is not an error.
    pub async fn delete(&self, path: &str, id: Option<&str>) -> DocPathResult<()> {
        let reference = self.resolver.resolve_document(path, id)?;
        match self.config.datastore()?.delete(&reference).await {
            Ok(()) => {
                log::debug!("Deleted {}", reference);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to delete {}: {}", reference, err);
                Err(DocPathError::new_with_cause("Failed to delete document", ErrorKind::DeleteError, err)
                    .with_path(&reference.to_string()))
            }
        }
    }

    pub async fn exists(&self, path: &str, id: Option<&str>) -> DocPathResult<bool> {
        let reference = self.resolver.resolve_document(path, id)?;
        Ok(self.snapshot_at(&reference).await?.exists())
    }

    pub(crate) async fn create_with_options(
        &self,
        path: &str,
        id: Option<&str>,
        data: Document,
        options: SetOptions,
    ) -> DocPathResult<WriteResult> {
        let reference = self.resolver.resolve_for_create(path, id)?;
        self.set_at(&reference, data, options).await?;
        Ok(WriteResult::new(reference))
    }

    pub(crate) async fn set_at(
        &self,
        reference: &DocumentReference,
        data: Document,
        options: SetOptions,
    ) -> DocPathResult<()> {
        let payload = self.payload(&data);
        match self.config.datastore()?.set(reference, payload, options).await {
            Ok(()) => {
                log::debug!("Wrote {} (merge: {})", reference, options.is_merge());
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to write {}: {}", reference, err);
                Err(DocPathError::new_with_cause("Failed to write document", ErrorKind::WriteError, err)
                    .with_path(&reference.to_string()))
            }
        }
    }

    pub(crate) async fn update_at(&self, reference: &DocumentReference, partial: Document) -> DocPathResult<()> {
        let updates = self.field_updates(reference, &self.payload(&partial))?;
        match self.config.datastore()?.update(reference, updates).await {
            Ok(()) => {
                log::debug!("Updated {}", reference);
                Ok(())
            }
            Err(err) => {
                log::error!("Failed to update {}: {}", reference, err);
                Err(DocPathError::new_with_cause("Failed to update document", ErrorKind::WriteError, err)
                    .with_path(&reference.to_string()))
            }
        }
    }

    pub(crate) async fn snapshot_at(&self, reference: &DocumentReference) -> DocPathResult<DocumentSnapshot> {
        match self.config.datastore()?.get(reference).await {
            Ok(snapshot) => Ok(snapshot),
            Err(err) => {
                log::error!("Failed to read {}: {}", reference, err);
                Err(DocPathError::new_with_cause("Failed to read document", ErrorKind::ReadError, err)
                    .with_path(&reference.to_string()))
            }
        }
    }

    pub(crate) async fn read_at(&self, reference: &DocumentReference) -> DocPathResult<Option<Document>> {
        let snapshot = self.snapshot_at(reference).await?;
        self.materialize(snapshot)
    }

    /// Turns a snapshot into a record: stored fields plus the injected id.
    pub(crate) fn materialize(&self, snapshot: DocumentSnapshot) -> DocPathResult<Option<Document>> {
        let id = snapshot.id().to_string();
        match snapshot.into_data() {
            Some(mut doc) => {
                doc.put(self.config.id_field(), id)?;
                Ok(Some(doc))
            }
            None => Ok(None),
        }
    }

    /// Sanitized copy of `data` without the id field that [DocumentStore::read]
    /// injects, so a record read back can be written again as is.
    fn payload(&self, data: &Document) -> Document {
        let mut payload = sanitize(data);
        let id_field = self.config.id_field();
        if payload.remove(&id_field).is_some() {
            log::debug!("Dropped {} field from write payload", id_field);
        }
        payload
    }

    fn field_updates(&self, reference: &DocumentReference, partial: &Document) -> DocPathResult<Vec<FieldUpdate>> {
        let separator = self.config.field_separator();
        let mut updates = Vec::with_capacity(partial.size() + 1);
        for (key, value) in partial.iter() {
            let field = FieldPath::parse(key, &separator).map_err(|err| err.with_path(&reference.to_string()))?;
            updates.push(FieldUpdate::new(field, value.clone()));
        }

        let timestamp = FieldPath::literal(&self.config.timestamp_field())?;
        updates.push(FieldUpdate::new(timestamp, Value::from(get_current_time_millis())));
        Ok(updates)
    }
}
