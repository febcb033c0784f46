use crate::docpath::DocPath;
use crate::docpath_config::DocPathConfig;
use crate::errors::{DocPathError, DocPathResult};
use crate::store::memory::InMemoryDatastore;
use crate::store::{Datastore, DatastoreProvider};

/// Fluent builder for a [DocPath] instance.
///
/// Every setter is validated immediately; the first error is kept and
/// returned by [DocPathBuilder::open]. Without an explicit datastore the
/// instance runs on a fresh [InMemoryDatastore].
///
/// ```rust
/// use docpath::DocPathBuilder;
/// use docpath::store::memory::InMemoryDatastore;
///
/// let db = DocPathBuilder::new()
///     .datastore(InMemoryDatastore::new())
///     .timestamp_field("updated_at")
///     .open()
///     .unwrap();
/// assert_eq!(db.config().timestamp_field(), "updated_at");
///
/// let err = DocPathBuilder::new().field_separator("/").open();
/// assert!(err.is_err());
/// ```
#[derive(Default)]
pub struct DocPathBuilder {
    error: Option<DocPathError>,
    config: DocPathConfig,
}

impl DocPathBuilder {
    pub fn new() -> Self {
        DocPathBuilder {
            error: None,
            config: DocPathConfig::new(),
        }
    }

    pub fn datastore<T: DatastoreProvider + 'static>(self, provider: T) -> Self {
        self.datastore_handle(Datastore::new(provider))
    }

    /// Uses an existing handle, sharing its backend with other instances.
    pub fn datastore_handle(mut self, datastore: Datastore) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_datastore(datastore) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn id_field(mut self, name: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_id_field(name) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn timestamp_field(mut self, name: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_timestamp_field(name) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn field_separator(mut self, separator: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.config.set_field_separator(separator) {
                self.error = Some(e);
            }
        }
        self
    }

    pub fn open(self) -> DocPathResult<DocPath> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if !self.config.has_datastore() {
            log::debug!("No datastore configured, using an in-memory datastore");
            self.config.set_datastore(Datastore::new(InMemoryDatastore::new()))?;
        }
        self.config.freeze();
        Ok(DocPath::new(self.config))
    }
}
