use docpath::common::Value;
use docpath::doc;
use docpath::errors::ErrorKind;
use docpath_int_test::test_util::{cleanup, create_test_context, insert_test_documents, int_field};

#[tokio::test]
async fn create_read_update_delete() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();

    let created = db.create("users", None, doc! { name: "A" }).await.unwrap();
    assert_eq!(created.id.len(), 20);
    assert_eq!(created.reference.path().to_string(), format!("users/{}", created.id));

    let record = db.read("users", Some(&created.id)).await.unwrap().unwrap();
    assert_eq!(record, doc! { id: (created.id.clone()), name: "A" });

    db.update("users", Some(&created.id), doc! { age: 5 }).await.unwrap();
    let record = db.read("users", Some(&created.id)).await.unwrap().unwrap();
    assert_eq!(record.get("name"), Some(&Value::from("A")));
    assert_eq!(int_field(&record, "age"), Some(5));
    assert!(int_field(&record, "lut").is_some());

    db.delete("users", Some(&created.id)).await.unwrap();
    assert!(db.read("users", Some(&created.id)).await.unwrap().is_none());
    assert!(!db.exists("users", Some(&created.id)).await.unwrap());

    cleanup(ctx).unwrap();
}

#[tokio::test]
async fn create_with_explicit_id_under_nested_document() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();

    let result = db.create("users/u1", Some("sub"), doc! { x: 1 }).await.unwrap();
    assert_eq!(result.reference.path().to_string(), "users/u1/sub");
    assert!(db.read("users/u1", Some("sub")).await.unwrap().is_some());
    // odd bare paths are taken as document paths as they are
    assert!(db.read("users/u1/sub", None).await.unwrap().is_some());

    let result = db.create("users/u1/posts", Some("p1"), doc! { title: "t" }).await.unwrap();
    assert_eq!(result.reference.path().to_string(), "users/u1/posts/p1");
    assert!(db.read("users/u1/posts", Some("p1")).await.unwrap().is_some());
    let err = db.read("users/u1/posts/p1", None).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidPath);
}

#[tokio::test]
async fn auto_id_create_rejects_nested_path() {
    let ctx = create_test_context().unwrap();
    let err = ctx.db().create("users/u1/posts", None, doc! { a: 1 }).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidPath);
    assert_eq!(ctx.datastore().document_count(), 0);
}

#[tokio::test]
async fn merge_create_keeps_existing_fields() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();

    db.create("users", Some("u1"), doc! { a: 1, nested: { x: 1 } }).await.unwrap();
    db.create_with_merge("users", Some("u1"), doc! { b: 2, nested: { y: 2 } })
        .await
        .unwrap();
    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert_eq!(record, doc! { id: "u1", a: 1, b: 2, nested: { x: 1, y: 2 } });

    db.create("users", Some("u1"), doc! { c: 3 }).await.unwrap();
    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert_eq!(record, doc! { id: "u1", c: 3 });
}

#[tokio::test]
async fn list_collection_and_single_document() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    let ids = insert_test_documents(&db, "users").await.unwrap();

    let all = db.list("users", None).await.unwrap();
    assert_eq!(all.len(), 3);
    for record in all.iter().flatten() {
        let id = record.get("id").and_then(Value::as_str).unwrap();
        assert!(ids.iter().any(|known| known == id));
    }

    // even path lists the parent collection
    let from_doc_path = db.list(&format!("users/{}", ids[0]), None).await.unwrap();
    assert_eq!(from_doc_path.len(), 3);

    let single = db.list("users", Some(&ids[1])).await.unwrap();
    assert_eq!(single.len(), 1);
    assert!(single[0].is_some());

    let missing = db.list("users", Some("nope")).await.unwrap();
    assert_eq!(missing, vec![None]);
}

#[tokio::test]
async fn nested_update_keys_touch_nested_fields() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    db.create("users", Some("u1"), doc! { address: { city: "Lisbon", zip: 1000 } })
        .await
        .unwrap();

    db.update("users", Some("u1"), doc! { "address.city": "Porto" }).await.unwrap();
    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert_eq!(
        record.get("address"),
        Some(&Value::Document(doc! { city: "Porto", zip: 1000 }))
    );
}

#[tokio::test]
async fn update_missing_document_fails() {
    let ctx = create_test_context().unwrap();
    let err = ctx.db().update("users", Some("ghost"), doc! { a: 1 }).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::WriteError);
    assert_eq!(err.root_cause().kind(), &ErrorKind::NotFound);
}

#[tokio::test]
async fn delete_missing_document_succeeds() {
    let ctx = create_test_context().unwrap();
    ctx.db().delete("users", Some("ghost")).await.unwrap();
}

#[tokio::test]
async fn backend_failures_are_wrapped_per_operation() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    let datastore = ctx.datastore();

    datastore.fail_next(1);
    let err = db.create("users", Some("u1"), doc! { a: 1 }).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::WriteError);
    assert_eq!(err.cause().map(|c| c.kind()), Some(&ErrorKind::BackendError));

    datastore.fail_next(1);
    let err = db.read("users", Some("u1")).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ReadError);

    datastore.fail_next(1);
    let err = db.list("users", None).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::ReadError);
    assert_eq!(err.path(), Some("users"));

    datastore.fail_next(1);
    let err = db.delete("users", Some("u1")).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::DeleteError);

    // injected failures are consumed
    db.create("users", Some("u1"), doc! { a: 1 }).await.unwrap();
    assert!(db.exists("users", Some("u1")).await.unwrap());
}
