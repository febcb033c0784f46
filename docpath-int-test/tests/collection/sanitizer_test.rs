use chrono::{TimeZone, Utc};
use docpath::common::Value;
use docpath::doc;
use docpath_int_test::test_util::create_test_context;

#[tokio::test]
async fn absent_fields_never_reach_the_datastore() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    let when = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();

    db.create(
        "users",
        Some("u1"),
        doc! {
            name: "A",
            nickname: (Value::Absent),
            joined: when,
            profile: { bio: (Value::Absent), tags: ["x", "y"] },
        },
    )
    .await
    .unwrap();

    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert!(!record.contains_key("nickname"));
    assert_eq!(record.get("joined"), Some(&Value::Timestamp(when)));
    assert_eq!(
        record.get("profile"),
        Some(&Value::Document(doc! { tags: ["x", "y"] }))
    );
}

#[tokio::test]
async fn null_survives_a_write() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    db.create("users", Some("u1"), doc! { note: (Value::Null) }).await.unwrap();

    let record = db.read("users", Some("u1")).await.unwrap().unwrap();
    assert_eq!(record.get("note"), Some(&Value::Null));
}
