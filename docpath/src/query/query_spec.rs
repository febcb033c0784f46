use crate::common::SortOrder;
use crate::filter::QueryCondition;
use crate::store::DocumentSnapshot;

/// Declarative description of a filtered, ordered, paginated read.
///
/// Conditions are ANDed in the order given. At most one ordering applies;
/// setting another replaces it. Cursors are snapshots taken from a previous
/// [crate::query::QueryPage].
///
/// ```rust
/// use docpath::common::SortOrder;
/// use docpath::filter::field;
/// use docpath::query::QuerySpec;
///
/// let spec = QuerySpec::new()
///     .where_condition(field("age").gte(18))
///     .order_by("age", SortOrder::Descending)
///     .limit(1);
/// assert_eq!(spec.where_conditions.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuerySpec {
    pub where_conditions: Vec<QueryCondition>,
    pub order_by: Option<(String, SortOrder)>,
    pub limit: Option<usize>,
    pub start_after: Option<DocumentSnapshot>,
    pub start_at: Option<DocumentSnapshot>,
    pub end_at: Option<DocumentSnapshot>,
}

impl QuerySpec {
    pub fn new() -> Self {
        QuerySpec::default()
    }

    pub fn where_condition(mut self, condition: QueryCondition) -> Self {
        self.where_conditions.push(condition);
        self
    }

    pub fn order_by(mut self, field: &str, direction: SortOrder) -> Self {
        self.order_by = Some((field.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn start_after(mut self, cursor: DocumentSnapshot) -> Self {
        self.start_after = Some(cursor);
        self
    }

    pub fn start_at(mut self, cursor: DocumentSnapshot) -> Self {
        self.start_at = Some(cursor);
        self
    }

    pub fn end_at(mut self, cursor: DocumentSnapshot) -> Self {
        self.end_at = Some(cursor);
        self
    }
}
