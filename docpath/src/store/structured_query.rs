use crate::common::SortOrder;
use crate::filter::QueryCondition;
use crate::reference::CollectionReference;
use crate::store::DocumentSnapshot;

/// Single ordering of a query.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    pub field: String,
    pub direction: SortOrder,
}

/// A query as handed to a [crate::store::DatastoreProvider].
///
/// Conditions keep the order they were added in. Cursors are applied in the
/// fixed order `start_after`, `start_at`, `end_at`, and `limit` last.
#[derive(Debug, Clone)]
pub struct StructuredQuery {
    collection: CollectionReference,
    conditions: Vec<QueryCondition>,
    order_by: Option<OrderBy>,
    start_after: Option<DocumentSnapshot>,
    start_at: Option<DocumentSnapshot>,
    end_at: Option<DocumentSnapshot>,
    limit: Option<usize>,
}

impl StructuredQuery {
    pub fn new(collection: CollectionReference) -> Self {
        StructuredQuery {
            collection,
            conditions: Vec::new(),
            order_by: None,
            start_after: None,
            start_at: None,
            end_at: None,
            limit: None,
        }
    }

    pub fn where_condition(mut self, condition: QueryCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Sets the ordering, replacing any previous one.
    pub fn order_by(mut self, field: &str, direction: SortOrder) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            direction,
        });
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

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn collection(&self) -> &CollectionReference {
        &self.collection
    }

    pub fn conditions(&self) -> &[QueryCondition] {
        &self.conditions
    }

    pub fn ordering(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    pub fn start_after_cursor(&self) -> Option<&DocumentSnapshot> {
        self.start_after.as_ref()
    }

    pub fn start_at_cursor(&self) -> Option<&DocumentSnapshot> {
        self.start_at.as_ref()
    }

    pub fn end_at_cursor(&self) -> Option<&DocumentSnapshot> {
        self.end_at.as_ref()
    }

    pub fn limit_value(&self) -> Option<usize> {
        self.limit
    }
}
