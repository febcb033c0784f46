use docpath::common::{SortOrder, Value};
use docpath::doc;
use docpath::errors::ErrorKind;
use docpath::filter::{field, FilterOperator, QueryCondition};
use docpath::query::QuerySpec;
use docpath_int_test::test_util::{create_test_context, insert_test_documents, int_field, is_sorted};

#[tokio::test]
async fn adults_oldest_first() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    insert_test_documents(&db, "users").await.unwrap();

    let page = db
        .query(
            "users",
            QuerySpec::new()
                .where_condition(field("age").gte(18))
                .order_by("age", SortOrder::Descending)
                .limit(1),
        )
        .await
        .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(int_field(&page.data[0], "age"), Some(25));
    let first = page.first_visible.unwrap();
    let last = page.last_visible.unwrap();
    assert_eq!(first.id(), last.id());
    assert_eq!(page.data[0].get("id").and_then(Value::as_str), Some(first.id()));
}

#[tokio::test]
async fn conditions_are_conjunctive() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    insert_test_documents(&db, "users").await.unwrap();

    let page = db
        .query(
            "users",
            QuerySpec::new()
                .where_condition(field("age").gt(17))
                .where_condition(QueryCondition::new("age", FilterOperator::LessThan, 25))
                .order_by("age", SortOrder::Ascending),
        )
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(int_field(&page.data[0], "age"), Some(20));
}

#[tokio::test]
async fn nested_field_filter_and_array_operators() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    db.create("items", Some("a"), doc! { tags: ["red", "big"], spec: { weight: 3 } }).await.unwrap();
    db.create("items", Some("b"), doc! { tags: ["blue"], spec: { weight: 7 } }).await.unwrap();
    db.create("items", Some("c"), doc! { tags: ["red"], spec: { weight: 9 } }).await.unwrap();

    let page = db
        .query(
            "items",
            QuerySpec::new()
                .where_condition(field("tags").array_contains("red"))
                .where_condition(field("spec.weight").gt(5)),
        )
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.data[0].get("id"), Some(&Value::from("c")));

    let page = db
        .query("items", QuerySpec::new().where_condition(field("spec.weight").in_array(vec![3, 7])))
        .await
        .unwrap();
    assert_eq!(page.len(), 2);
}

#[tokio::test]
async fn unfiltered_query_returns_everything_sorted() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    insert_test_documents(&db, "users").await.unwrap();

    let page = db
        .query("users", QuerySpec::new().order_by("age", SortOrder::Ascending))
        .await
        .unwrap();
    assert_eq!(page.len(), 3);
    assert!(is_sorted(page.data.iter().filter_map(|d| int_field(d, "age")), true));
}

#[tokio::test]
async fn empty_result_has_no_cursors() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    insert_test_documents(&db, "users").await.unwrap();

    let page = db
        .query("users", QuerySpec::new().where_condition(field("age").gt(100)))
        .await
        .unwrap();
    assert!(page.is_empty());
    assert!(page.first_visible.is_none());
    assert!(page.last_visible.is_none());

    let page = db.query("nobody", QuerySpec::new()).await.unwrap();
    assert!(page.is_empty());
}

#[tokio::test]
async fn document_path_queries_parent_collection() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    let ids = insert_test_documents(&db, "users").await.unwrap();

    let page = db.query(&format!("users/{}", ids[0]), QuerySpec::new()).await.unwrap();
    assert_eq!(page.len(), 3);
}

#[tokio::test]
async fn backend_failure_is_a_query_error() {
    let ctx = create_test_context().unwrap();
    ctx.datastore().fail_next(1);
    let err = ctx.db().query("users", QuerySpec::new()).await.unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::QueryError);
    assert_eq!(err.path(), Some("users"));
}
