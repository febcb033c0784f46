use docpath::collection::Document;
use docpath::common::Value;
use docpath::doc;
use docpath::errors::DocPathResult;
use docpath::store::memory::InMemoryDatastore;
use docpath::store::{Datastore, DatastoreProvider};
use docpath::{DocPath, DocPathBuilder};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

/// A fresh instance plus direct access to its in-memory backend.
#[derive(Clone)]
pub struct TestContext {
    db: DocPath,
    datastore: InMemoryDatastore,
}

impl TestContext {
    pub fn new(db: DocPath, datastore: InMemoryDatastore) -> Self {
        Self { db, datastore }
    }

    pub fn db(&self) -> DocPath {
        self.db.clone()
    }

    pub fn datastore(&self) -> InMemoryDatastore {
        self.datastore.clone()
    }
}

pub fn create_test_context() -> DocPathResult<TestContext> {
    let datastore = InMemoryDatastore::new();
    let db = DocPathBuilder::new()
        .datastore_handle(Datastore::new(datastore.clone()))
        .open()?;
    Ok(TestContext::new(db, datastore))
}

/// Opens an instance over any provider with the default field names.
pub fn create_context_with<T: DatastoreProvider + 'static>(provider: T) -> DocPathResult<DocPath> {
    DocPathBuilder::new().datastore(provider).open()
}

pub fn cleanup(ctx: TestContext) -> DocPathResult<()> {
    log::debug!("Clearing {} test documents", ctx.datastore.document_count());
    ctx.datastore.clear();
    Ok(())
}

/// Three users aged 17, 20 and 25 with fake filler fields.
pub fn create_test_docs() -> Vec<Document> {
    [17, 20, 25]
        .into_iter()
        .map(|age| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email: String = SafeEmail().fake();
            let zip: i64 = (1000..9999).fake();
            doc! {
                first_name: first_name,
                last_name: last_name,
                email: email,
                age: age,
                address: {
                    city: "Lisbon",
                    zip: zip,
                },
            }
        })
        .collect()
}

/// Inserts the test documents under `path` with generated ids and returns the ids.
pub async fn insert_test_documents(db: &DocPath, path: &str) -> DocPathResult<Vec<String>> {
    let mut ids = Vec::new();
    for doc in create_test_docs() {
        ids.push(db.create(path, None, doc).await?.id);
    }
    Ok(ids)
}

/// Inserts `count` documents `doc000`, `doc001`, ... with a sequential `rank`.
pub async fn insert_ranked_documents(db: &DocPath, path: &str, count: i64) -> DocPathResult<()> {
    for rank in 0..count {
        let name: String = FirstName().fake();
        db.create(path, Some(&format!("doc{:03}", rank)), doc! { rank: rank, name: name })
            .await?;
    }
    Ok(())
}

pub fn int_field(doc: &Document, field: &str) -> Option<i64> {
    doc.get(field).and_then(Value::as_i64)
}

pub fn is_sorted<T: Ord>(iterable: impl IntoIterator<Item = T>, ascending: bool) -> bool {
    let mut iter = iterable.into_iter();
    if let Some(mut prev) = iter.next() {
        for current in iter {
            if ascending {
                if prev > current {
                    return false;
                }
            } else if prev < current {
                return false;
            }
            prev = current;
        }
    }
    true
}
