use crate::collection::Document;
use crate::common::Value;

/// Returns a copy of `doc` with every [Value::Absent] entry removed.
///
/// Removal recurses into nested documents only. Arrays, timestamps, bytes and
/// every other leaf are carried over unchanged, including any `Absent` that
/// sits inside an array.
///
/// ```rust
/// use docpath::collection::sanitize;
/// use docpath::common::Value;
/// use docpath::doc;
///
/// let input = doc! {
///     name: "Alice",
///     nickname: (Value::Absent),
///     address: { city: "Lisbon", zip: (Value::Absent) },
/// };
/// let clean = sanitize(&input);
///
/// assert!(clean.get("nickname").is_none());
/// assert_eq!(clean, doc! { name: "Alice", address: { city: "Lisbon" } });
/// ```
pub fn sanitize(doc: &Document) -> Document {
    doc.iter()
        .filter(|(_, value)| !value.is_absent())
        .map(|(key, value)| {
            let cleaned = match value {
                Value::Document(nested) => Value::Document(sanitize(nested)),
                other => other.clone(),
            };
            (key.clone(), cleaned)
        })
        .collect()
}
