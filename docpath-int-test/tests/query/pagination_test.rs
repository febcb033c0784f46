use docpath::common::SortOrder;
use docpath::query::QuerySpec;
use docpath_int_test::test_util::{create_test_context, insert_ranked_documents, int_field, is_sorted};
use std::collections::HashSet;

async fn walk(path: &str, total: i64, page_size: usize, direction: SortOrder) -> Vec<i64> {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    insert_ranked_documents(&db, path, total).await.unwrap();

    let mut seen = Vec::new();
    let mut cursor = None;
    loop {
        let mut spec = QuerySpec::new().order_by("rank", direction).limit(page_size);
        if let Some(last) = cursor.take() {
            spec = spec.start_after(last);
        }
        let page = db.query(path, spec).await.unwrap();
        if page.is_empty() {
            break;
        }
        assert!(page.len() <= page_size);
        seen.extend(page.data.iter().filter_map(|d| int_field(d, "rank")));
        cursor = page.last_visible;
    }
    seen
}

#[tokio::test]
async fn pages_cover_collection_without_overlap() {
    for (total, page_size) in [(10, 3), (9, 3), (5, 10), (1, 1)] {
        let ranks = walk("ranked", total, page_size, SortOrder::Ascending).await;
        assert_eq!(ranks.len() as i64, total);
        let unique: HashSet<_> = ranks.iter().collect();
        assert_eq!(unique.len(), ranks.len());
        assert!(is_sorted(ranks.iter(), true));
    }
}

#[tokio::test]
async fn descending_walk() {
    let ranks = walk("ranked", 7, 2, SortOrder::Descending).await;
    assert_eq!(ranks, vec![6, 5, 4, 3, 2, 1, 0]);
}

#[tokio::test]
async fn start_at_and_end_at_are_inclusive() {
    let ctx = create_test_context().unwrap();
    let db = ctx.db();
    insert_ranked_documents(&db, "ranked", 6).await.unwrap();

    let first_page = db
        .query("ranked", QuerySpec::new().order_by("rank", SortOrder::Ascending).limit(2))
        .await
        .unwrap();
    let from_second = db
        .query(
            "ranked",
            QuerySpec::new()
                .order_by("rank", SortOrder::Ascending)
                .start_at(first_page.last_visible.clone().unwrap()),
        )
        .await
        .unwrap();
    assert_eq!(from_second.len(), 5);
    assert_eq!(int_field(&from_second.data[0], "rank"), Some(1));

    let up_to_second = db
        .query(
            "ranked",
            QuerySpec::new()
                .order_by("rank", SortOrder::Ascending)
                .end_at(first_page.last_visible.unwrap()),
        )
        .await
        .unwrap();
    let ranks: Vec<_> = up_to_second.data.iter().filter_map(|d| int_field(d, "rank")).collect();
    assert_eq!(ranks, vec![0, 1]);
}
