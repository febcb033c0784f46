use crate::common::{DEFAULT_FIELD_SEPARATOR, DEFAULT_ID_FIELD, DEFAULT_TIMESTAMP_FIELD, PATH_SEPARATOR};
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use crate::store::Datastore;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared configuration of a [crate::DocPath] instance.
///
/// Holds the datastore handle and the field names the operations inject.
/// Cloning is cheap and every clone sees the same settings. Settings are
/// frozen once the instance is opened.
#[derive(Clone)]
pub struct DocPathConfig {
    /// The pointer to implementation. Uses Arc for cheap cloning and thread safety.
    inner: Arc<DocPathConfigInner>,
}

impl Default for DocPathConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DocPathConfig {
    pub fn new() -> Self {
        DocPathConfig {
            inner: Arc::new(DocPathConfigInner::new()),
        }
    }

    /// The datastore every operation goes through.
    pub fn datastore(&self) -> DocPathResult<Datastore> {
        self.inner.datastore()
    }

    pub fn set_datastore(&self, datastore: Datastore) -> DocPathResult<()> {
        self.inner.set_datastore(datastore)
    }

    pub(crate) fn has_datastore(&self) -> bool {
        self.inner.datastore.read().is_some()
    }

    /// Name of the field injected with the document id on reads.
    pub fn id_field(&self) -> String {
        self.inner.id_field.read().clone()
    }

    pub fn set_id_field(&self, name: &str) -> DocPathResult<()> {
        self.inner.set_name(&self.inner.id_field, name, "Id field")
    }

    /// Name of the epoch-millis write timestamp added by updates.
    pub fn timestamp_field(&self) -> String {
        self.inner.timestamp_field.read().clone()
    }

    pub fn set_timestamp_field(&self, name: &str) -> DocPathResult<()> {
        self.inner.set_name(&self.inner.timestamp_field, name, "Timestamp field")
    }

    /// Separator splitting update keys into nested field paths.
    pub fn field_separator(&self) -> String {
        self.inner.field_separator.read().clone()
    }

    pub fn set_field_separator(&self, separator: &str) -> DocPathResult<()> {
        if separator.contains(PATH_SEPARATOR) {
            log::error!("Field separator cannot contain the path separator");
            return Err(DocPathError::new(
                "Field separator cannot contain '/'",
                ErrorKind::InvalidOperation,
            ));
        }
        self.inner.set_name(&self.inner.field_separator, separator, "Field separator")
    }

    pub(crate) fn freeze(&self) {
        self.inner.configured.store(true, Ordering::Relaxed);
    }
}

/// Private implementation of the configuration.
struct DocPathConfigInner {
    /// Set once the owning instance is opened
    configured: AtomicBool,
    datastore: RwLock<Option<Datastore>>,
    id_field: RwLock<String>,
    timestamp_field: RwLock<String>,
    field_separator: RwLock<String>,
}

impl DocPathConfigInner {
    fn new() -> Self {
        DocPathConfigInner {
            configured: AtomicBool::from(false),
            datastore: RwLock::new(None),
            id_field: RwLock::new(DEFAULT_ID_FIELD.to_string()),
            timestamp_field: RwLock::new(DEFAULT_TIMESTAMP_FIELD.to_string()),
            field_separator: RwLock::new(DEFAULT_FIELD_SEPARATOR.to_string()),
        }
    }

    fn datastore(&self) -> DocPathResult<Datastore> {
        match self.datastore.read().as_ref() {
            Some(datastore) => Ok(datastore.clone()),
            None => {
                log::error!("No datastore is configured");
                Err(DocPathError::new(
                    "No datastore is configured",
                    ErrorKind::InvalidOperation,
                ))
            }
        }
    }

    fn set_datastore(&self, datastore: Datastore) -> DocPathResult<()> {
        self.ensure_not_configured("Datastore")?;
        *self.datastore.write() = Some(datastore);
        Ok(())
    }

    fn set_name(&self, slot: &RwLock<String>, value: &str, what: &str) -> DocPathResult<()> {
        self.ensure_not_configured(what)?;
        if value.is_empty() {
            log::error!("{} cannot be empty", what);
            return Err(DocPathError::new(
                &format!("{} cannot be empty", what),
                ErrorKind::InvalidOperation,
            ));
        }
        *slot.write() = value.to_string();
        Ok(())
    }

    fn ensure_not_configured(&self, what: &str) -> DocPathResult<()> {
        if self.configured.load(Ordering::Relaxed) {
            log::error!("{} cannot be changed after initialization", what);
            return Err(DocPathError::new(
                &format!("{} cannot be changed after initialization", what),
                ErrorKind::InvalidOperation,
            ));
        }
        Ok(())
    }
}
