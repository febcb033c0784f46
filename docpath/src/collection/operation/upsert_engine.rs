use crate::collection::operation::DocumentStore;
use crate::collection::Document;
use crate::errors::DocPathResult;
use crate::reference::DocumentReference;
use crate::store::SetOptions;

/// What an upsert ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The document existed and was partially updated
    Updated,
    /// The document was missing and was created
    Created,
    /// The document was missing and no create payload was given
    Skipped,
}

/// Create-if-absent, update-if-present, decided by a preceding read.
///
/// The existence check and the write are two separate datastore calls and
/// nothing holds the document in between. A concurrent writer can delete the
/// document after the check (the update then fails with a not-found cause)
/// or create it (the create then replaces the other writer's data). Callers
/// needing atomicity must use the datastore's own transactions.
#[derive(Clone)]
pub struct UpsertEngine {
    store: DocumentStore,
}

impl UpsertEngine {
    pub fn new(store: DocumentStore) -> Self {
        UpsertEngine { store }
    }

    /// Updates `data` into the document if it exists, creates the document
    /// from `data` otherwise.
    pub async fn upsert(&self, reference: &DocumentReference, data: Document) -> DocPathResult<UpsertOutcome> {
        if self.store.snapshot_at(reference).await?.exists() {
            self.store.update_at(reference, data).await?;
            log::debug!("Upsert updated {}", reference);
            Ok(UpsertOutcome::Updated)
        } else {
            self.store.set_at(reference, data, SetOptions::overwrite()).await?;
            log::debug!("Upsert created {}", reference);
            Ok(UpsertOutcome::Created)
        }
    }

    /// Like [UpsertEngine::upsert] with separate payloads. A missing document
    /// without `create_data` is left alone and reported as
    /// [UpsertOutcome::Skipped].
    pub async fn upsert_with_distinct_payloads(
        &self,
        reference: &DocumentReference,
        update_data: Document,
        create_data: Option<Document>,
    ) -> DocPathResult<UpsertOutcome> {
        if self.store.snapshot_at(reference).await?.exists() {
            self.store.update_at(reference, update_data).await?;
            log::debug!("Upsert updated {}", reference);
            return Ok(UpsertOutcome::Updated);
        }

        match create_data {
            Some(data) => {
                self.store.set_at(reference, data, SetOptions::overwrite()).await?;
                log::debug!("Upsert created {}", reference);
                Ok(UpsertOutcome::Created)
            }
            None => {
                log::warn!("Document {} does not exist and no create payload was given, skipping", reference);
                Ok(UpsertOutcome::Skipped)
            }
        }
    }
}
