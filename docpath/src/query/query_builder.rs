use crate::collection::DocumentStore;
use crate::docpath_config::DocPathConfig;
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use crate::query::{QueryPage, QuerySpec};
use crate::reference::AddressResolver;
use crate::store::StructuredQuery;

/// Runs [QuerySpec]s against the collection a path resolves to.
///
/// The target collection follows the listing rule (odd path: the collection
/// itself, even path: the parent collection of the document). Conditions
/// are applied in order, then the ordering, then the cursors in the order
/// `start_after`, `start_at`, `end_at`, and the limit last.
#[derive(Clone)]
pub struct QueryBuilder {
    config: DocPathConfig,
    resolver: AddressResolver,
    store: DocumentStore,
}

impl QueryBuilder {
    pub fn new(config: DocPathConfig) -> Self {
        QueryBuilder {
            store: DocumentStore::new(config.clone()),
            config,
            resolver: AddressResolver::new(),
        }
    }

    pub async fn query(&self, path: &str, spec: QuerySpec) -> DocPathResult<QueryPage> {
        let collection = self.resolver.resolve_collection(path)?;

        let mut query = StructuredQuery::new(collection);
        for condition in spec.where_conditions {
            query = query.where_condition(condition);
        }
        if let Some((field, direction)) = spec.order_by {
            query = query.order_by(&field, direction);
        }
        if let Some(cursor) = spec.start_after {
            query = query.start_after(cursor);
        }
        if let Some(cursor) = spec.start_at {
            query = query.start_at(cursor);
        }
        if let Some(cursor) = spec.end_at {
            query = query.end_at(cursor);
        }
        if let Some(limit) = spec.limit {
            query = query.limit(limit);
        }

        let snapshots = match self.config.datastore()?.run_query(&query).await {
            Ok(snapshots) => snapshots,
            Err(err) => {
                log::error!("Failed to query {}: {}", path, err);
                return Err(DocPathError::new_with_cause("Failed to query documents", ErrorKind::QueryError, err)
                    .with_path(path));
            }
        };

        if snapshots.is_empty() {
            log::debug!("Query on {} returned no documents", path);
            return Ok(QueryPage::default());
        }

        let first_visible = snapshots.first().cloned();
        let last_visible = snapshots.last().cloned();
        let mut data = Vec::with_capacity(snapshots.len());
        for snapshot in snapshots {
            if let Some(record) = self.store.materialize(snapshot)? {
                data.push(record);
            }
        }

        log::debug!("Query on {} returned {} documents", path, data.len());
        Ok(QueryPage {
            data,
            first_visible,
            last_visible,
        })
    }
}
