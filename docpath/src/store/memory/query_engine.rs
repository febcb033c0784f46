use crate::collection::{Document, FieldPath};
use crate::common::{SortOrder, Value, DEFAULT_FIELD_SEPARATOR};
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use crate::store::{DocumentSnapshot, StructuredQuery};
use itertools::Itertools;
use std::cmp::Ordering;

/// Position of a document in the result order: the ordering value (if the
/// query is ordered) followed by the document path.
struct Position<'a> {
    value: Option<&'a Value>,
    path: String,
}

struct Ordered {
    field: FieldPath,
    direction: SortOrder,
}

/// Evaluates a [StructuredQuery] over candidate snapshots, all of which are
/// direct children of the query's collection.
///
/// Documents lacking a filtered or the ordered field are excluded. Results
/// are sorted by the ordering value then by path, both in the query's
/// direction (ascending path when unordered). Cursors compare positions,
/// `limit` applies last.
pub(crate) fn execute(
    query: &StructuredQuery,
    candidates: Vec<DocumentSnapshot>,
) -> DocPathResult<Vec<DocumentSnapshot>> {
    for condition in query.conditions() {
        condition.validate()?;
    }

    let ordered = match query.ordering() {
        Some(order_by) => Some(Ordered {
            field: FieldPath::parse(&order_by.field, DEFAULT_FIELD_SEPARATOR)?,
            direction: order_by.direction,
        }),
        None => None,
    };

    let mut results: Vec<DocumentSnapshot> = candidates
        .into_iter()
        .filter(|snapshot| match snapshot.data() {
            Some(doc) => {
                query.conditions().iter().all(|c| c.matches(doc))
                    && ordered.as_ref().is_none_or(|o| has_field(doc, &o.field))
            }
            None => false,
        })
        .sorted_by(|a, b| compare(&position(a, ordered.as_ref()), &position(b, ordered.as_ref()), ordered.as_ref()))
        .collect();

    if let Some(cursor) = query.start_after_cursor() {
        let at = cursor_position(cursor, ordered.as_ref())?;
        results.retain(|s| compare(&position(s, ordered.as_ref()), &at, ordered.as_ref()) == Ordering::Greater);
    }
    if let Some(cursor) = query.start_at_cursor() {
        let at = cursor_position(cursor, ordered.as_ref())?;
        results.retain(|s| compare(&position(s, ordered.as_ref()), &at, ordered.as_ref()) != Ordering::Less);
    }
    if let Some(cursor) = query.end_at_cursor() {
        let at = cursor_position(cursor, ordered.as_ref())?;
        results.retain(|s| compare(&position(s, ordered.as_ref()), &at, ordered.as_ref()) != Ordering::Greater);
    }

    if let Some(limit) = query.limit_value() {
        results.truncate(limit);
    }
    Ok(results)
}

fn has_field(doc: &Document, field: &FieldPath) -> bool {
    doc.get_path(field).is_some_and(|v| !v.is_absent())
}

fn position<'a>(snapshot: &'a DocumentSnapshot, ordered: Option<&Ordered>) -> Position<'a> {
    Position {
        value: ordered.and_then(|o| snapshot.get(&o.field)),
        path: snapshot.reference().path().to_string(),
    }
}

fn cursor_position<'a>(cursor: &'a DocumentSnapshot, ordered: Option<&Ordered>) -> DocPathResult<Position<'a>> {
    let position = position(cursor, ordered);
    if let Some(o) = ordered {
        if position.value.is_none() {
            log::error!("Cursor {} has no value for ordering field {}", cursor.reference(), o.field);
            return Err(DocPathError::new(
                &format!("Cursor document is missing the ordering field '{}'", o.field),
                ErrorKind::InvalidOperation,
            )
            .with_path(&cursor.reference().to_string()));
        }
    }
    Ok(position)
}

fn compare(a: &Position, b: &Position, ordered: Option<&Ordered>) -> Ordering {
    let direction = ordered.map(|o| o.direction).unwrap_or_default();
    direction.apply(a.value.cmp(&b.value).then_with(|| a.path.cmp(&b.path)))
}
