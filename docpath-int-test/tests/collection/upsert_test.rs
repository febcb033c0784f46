use async_trait::async_trait;
use docpath::collection::{Document, FieldUpdate, UpsertOutcome};
use docpath::doc;
use docpath::errors::{DocPathResult, ErrorKind};
use docpath::reference::DocumentReference;
use docpath::store::memory::InMemoryDatastore;
use docpath::store::{DatastoreProvider, DocumentSnapshot, SetOptions, StructuredQuery};
use docpath_int_test::test_util::{create_context_with, create_test_context, int_field};
use parking_lot::Mutex;
use std::sync::Arc;

/// What a concurrent writer does between the upsert's read and its write.
enum Interference {
    Delete,
    Create(Document),
}

/// Runs one interfering write right after the next `get`.
#[derive(Clone)]
struct InterleavingDatastore {
    inner: InMemoryDatastore,
    pending: Arc<Mutex<Option<Interference>>>,
}

impl InterleavingDatastore {
    fn new(inner: InMemoryDatastore) -> Self {
        Self {
            inner,
            pending: Arc::new(Mutex::new(None)),
        }
    }

    fn interfere(&self, interference: Interference) {
        *self.pending.lock() = Some(interference);
    }
}

#[async_trait]
impl DatastoreProvider for InterleavingDatastore {
    async fn get(&self, reference: &DocumentReference) -> DocPathResult<DocumentSnapshot> {
        let snapshot = self.inner.get(reference).await?;
        let interference = self.pending.lock().take();
        match interference {
            Some(Interference::Delete) => self.inner.delete(reference).await?,
            Some(Interference::Create(data)) => {
                self.inner.set(reference, data, SetOptions::overwrite()).await?
            }
            None => {}
        }
        Ok(snapshot)
    }

    async fn set(&self, reference: &DocumentReference, data: Document, options: SetOptions) -> DocPathResult<()> {
        self.inner.set(reference, data, options).await
    }

    async fn update(&self, reference: &DocumentReference, updates: Vec<FieldUpdate>) -> DocPathResult<()> {
        self.inner.update(reference, updates).await
    }

    async fn delete(&self, reference: &DocumentReference) -> DocPathResult<()> {
        self.inner.delete(reference).await
    }

    async fn run_query(&self, query: &StructuredQuery) -> DocPathResult<Vec<DocumentSnapshot>> {
        self.inner.run_query(query).await
    }
}

#[tokio::test]
async fn repeated_upsert_converges_to_one_document() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    let reference = db.create_reference_only("users", Some("u1")).unwrap();

    assert_eq!(db.upsert(&reference, doc! { a: 1 }).await.unwrap(), UpsertOutcome::Created);
    assert_eq!(db.upsert(&reference, doc! { b: 2 }).await.unwrap(), UpsertOutcome::Updated);
    assert_eq!(ctx.datastore().document_count(), 1);

    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert_eq!(int_field(&record, "a"), Some(1));
    assert_eq!(int_field(&record, "b"), Some(2));
    assert!(int_field(&record, "lut").is_some());
}

#[tokio::test]
async fn created_document_has_no_timestamp() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    let reference = db.create_reference_only("users", Some("u1")).unwrap();

    db.upsert(&reference, doc! { a: 1 }).await.unwrap();
    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert!(!record.contains_key("lut"));
}

#[tokio::test]
async fn distinct_payloads() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    let reference = db.create_reference_only("users", Some("u1")).unwrap();

    let outcome = db
        .upsert_with_distinct_payloads(&reference, doc! { visits: 2 }, None)
        .await
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Skipped);
    assert_eq!(ctx.datastore().document_count(), 0);

    let outcome = db
        .upsert_with_distinct_payloads(&reference, doc! { visits: 2 }, Some(doc! { visits: 1, first: true }))
        .await
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);

    let outcome = db
        .upsert_with_distinct_payloads(&reference, doc! { visits: 2 }, Some(doc! { visits: 1 }))
        .await
        .unwrap();
    assert_eq!(outcome, UpsertOutcome::Updated);

    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert_eq!(int_field(&record, "visits"), Some(2));
    assert!(record.contains_key("first"));
}

#[tokio::test]
async fn delete_between_check_and_update_fails_the_update() {
    let memory = InMemoryDatastore::new();
    let datastore = InterleavingDatastore::new(memory.clone());
    let db = create_context_with(datastore.clone()).unwrap();
    let reference = db.create_reference_only("users", Some("u1")).unwrap();
    db.create("users", Some("u1"), doc! { a: 1 }).await.unwrap();

    datastore.interfere(Interference::Delete);
    let err = db.upsert(&reference, doc! { b: 2 }).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::WriteError);
    assert_eq!(err.root_cause().kind(), &ErrorKind::NotFound);
    assert_eq!(memory.document_count(), 0);
}

#[tokio::test]
async fn create_between_check_and_create_is_overwritten() {
    let memory = InMemoryDatastore::new();
    let datastore = InterleavingDatastore::new(memory.clone());
    let db = create_context_with(datastore.clone()).unwrap();
    let reference = db.create_reference_only("users", Some("u1")).unwrap();

    datastore.interfere(Interference::Create(doc! { owner: "other" }));
    let outcome = db.upsert(&reference, doc! { owner: "me" }).await.unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);

    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert_eq!(record, doc! { id: "u1", owner: "me" });
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_share_one_backend() {
    let ctx = create_test_context().unwrap();
    let mut handles = Vec::new();
    for i in 0..16 {
        let db = ctx.db();
        handles.push(tokio::spawn(async move {
            db.create("events", None, doc! { seq: i }).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(ctx.datastore().document_count(), 16);
    assert_eq!(ctx.db().list("events", None).await.unwrap().len(), 16);
}

#[tokio::test]
async fn upserting_a_read_record_keeps_id_out_of_storage() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    db.create("users", Some("u1"), doc! { name: "A" }).await.unwrap();
    let record = db.read("users", Some("u1")).await.unwrap().unwrap();

    let existing = db.create_reference_only("users", Some("u1")).unwrap();
    let fresh = db.create_reference_only("users", Some("u2")).unwrap();
    assert_eq!(db.upsert(&existing, record.clone()).await.unwrap(), UpsertOutcome::Updated);
    assert_eq!(db.upsert(&fresh, record).await.unwrap(), UpsertOutcome::Created);

    for reference in [&existing, &fresh] {
        let raw = ctx.datastore().get(reference).await.unwrap().into_data().unwrap();
        assert!(!raw.contains_key("id"));
    }
    let copy = db.read("users", Some("u2")).await.unwrap().unwrap();
    assert_eq!(copy.get("id").and_then(|v| v.as_str()), Some("u2"));
}
