use crate::collection::Document;
use crate::store::DocumentSnapshot;

/// One page of query results.
///
/// `data` holds the records (with injected id). The cursors are the raw
/// first and last results, `None` when the page is empty; feed
/// `last_visible` into `start_after` to fetch the next page.
#[derive(Debug, Clone, Default)]
pub struct QueryPage {
    pub data: Vec<Document>,
    pub first_visible: Option<DocumentSnapshot>,
    pub last_visible: Option<DocumentSnapshot>,
}

impl QueryPage {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
