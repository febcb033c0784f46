use im::OrdMap;

use crate::collection::FieldPath;
use crate::common::Value;
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use std::borrow::Cow;
use std::fmt::{Debug, Display};

/// A document stored in, or read from, a hierarchical document database.
///
/// A document is an ordered map of string keys to [Value]s. Keys are
/// literal: `put("a.b", 1)` creates a top-level key named `a.b`. Nested
/// fields are reached through an explicit [FieldPath] with [Document::get_path]
/// and [Document::set_path], which is what partial updates use.
///
/// ## Persistent storage
///
/// The map is an `im::OrdMap`, so cloning a document is O(1) and every clone
/// is independent. References, snapshots and query pages hand documents
/// around freely without copying payloads.
#[derive(Clone, Eq, PartialEq, Default, Ord, PartialOrd, serde::Deserialize, serde::Serialize)]
pub struct Document {
    data: OrdMap<String, Value>,
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Document {
            data: OrdMap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of top-level entries.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Associates `value` with the literal top-level `key`.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::InvalidFieldName] if the key is empty.
    ///
    /// ```rust
    /// use docpath::collection::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.put("name", "Alice").unwrap();
    /// doc.put("age", 30).unwrap();
    /// assert_eq!(doc.size(), 2);
    /// ```
    pub fn put<'a, T: Into<Value>>(&mut self, key: impl Into<Cow<'a, str>>, value: T) -> DocPathResult<()> {
        let key = key.into();
        // key cannot be empty
        if key.is_empty() {
            log::error!("Document does not support empty key");
            return Err(DocPathError::new(
                "Document does not support empty key",
                ErrorKind::InvalidFieldName,
            ));
        }

        self.data.insert(key.into_owned(), value.into());
        Ok(())
    }

    /// Returns the value stored under the literal top-level `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Returns the value at a nested field path, walking through embedded
    /// documents. Any non-document intermediate yields `None`.
    pub fn get_path(&self, path: &FieldPath) -> Option<&Value> {
        let mut current = self;
        let segments = path.segments();
        for (index, segment) in segments.iter().enumerate() {
            let value = current.data.get(segment.as_str())?;
            if index == segments.len() - 1 {
                return Some(value);
            }
            match value {
                Value::Document(doc) => current = doc,
                _ => return None,
            }
        }
        None
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }

    /// Sets `value` at a nested field path. Missing intermediates, and
    /// intermediates that are not documents, are replaced by new documents.
    pub fn set_path(&mut self, path: &FieldPath, value: Value) {
        match path.tail() {
            None => {
                self.data.insert(path.first().to_string(), value);
            }
            Some(rest) => {
                // if the current level value is embedded doc, descend into it,
                // otherwise start a fresh one
                let mut nested = match self.data.get(path.first()) {
                    Some(Value::Document(doc)) => doc.clone(),
                    _ => Document::new(),
                };
                nested.set_path(&rest, value);
                self.data.insert(path.first().to_string(), Value::Document(nested));
            }
        }
    }

    /// Removes the literal top-level `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.data.remove(key)
    }

    /// Removes the value at a nested field path. Parent documents are kept
    /// even when they become empty.
    pub fn remove_path(&mut self, path: &FieldPath) -> Option<Value> {
        match path.tail() {
            None => self.data.remove(path.first()),
            Some(rest) => {
                let mut nested = match self.data.get(path.first()) {
                    Some(Value::Document(doc)) => doc.clone(),
                    _ => return None,
                };
                let removed = nested.remove_path(&rest);
                if removed.is_some() {
                    self.data.insert(path.first().to_string(), Value::Document(nested));
                }
                removed
            }
        }
    }

    /// Deep-merges `other` into this document: nested documents present on
    /// both sides are merged recursively, every other value from `other`
    /// overwrites. Keys only present here are left untouched.
    pub fn merge(&mut self, other: &Document) {
        for (key, value) in other.data.iter() {
            match (self.data.get(key), value) {
                (Some(Value::Document(existing)), Value::Document(incoming)) => {
                    let mut merged = existing.clone();
                    merged.merge(incoming);
                    self.data.insert(key.clone(), Value::Document(merged));
                }
                _ => {
                    self.data.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Top-level keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.data.keys()
    }

    /// Top-level entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.data.iter()
    }

    /// Converts the document into a JSON object. Absent values are skipped.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .data
            .iter()
            .filter(|(_, value)| !value.is_absent())
            .map(|(key, value)| (key.clone(), value.to_json()))
            .collect::<serde_json::Map<String, serde_json::Value>>();
        serde_json::Value::Object(map)
    }

    /// Builds a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::EncodingError] if the value is not a JSON object.
    pub fn from_json(json: serde_json::Value) -> DocPathResult<Document> {
        match json {
            serde_json::Value::Object(map) => Ok(Document::from_json_map(map)),
            other => {
                log::error!("Cannot build a document from non-object JSON {}", other);
                Err(DocPathError::new(
                    "Document can only be built from a JSON object",
                    ErrorKind::EncodingError,
                ))
            }
        }
    }

    pub(crate) fn from_json_map(map: serde_json::Map<String, serde_json::Value>) -> Document {
        let mut doc = Document::new();
        for (key, value) in map {
            doc.data.insert(key, Value::from_json(value));
        }
        doc
    }

    /// Serializes any serde type into a document through its JSON form.
    pub fn from_serializable<T: serde::Serialize>(value: &T) -> DocPathResult<Document> {
        let json = serde_json::to_value(value)?;
        Document::from_json(json)
    }

    /// Deserializes the document into any serde type through its JSON form.
    pub fn deserialize_into<T: serde::de::DeserializeOwned>(&self) -> DocPathResult<T> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

impl Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = im::ordmap::ConsumingIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl FromIterator<(String, Value)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Document {
            data: iter.into_iter().collect(),
        }
    }
}

pub fn normalize(value: &str) -> String {
    value.trim_matches('"').to_string()
}

/// Creates a [Document] with JSON-like syntax.
///
/// # Examples
///
/// ```rust
/// use docpath::doc;
///
/// // Empty document
/// let empty = doc!{};
///
/// // Key value pairs, nested documents and arrays
/// let user = doc!{
///     name: "Alice",
///     "display name": "alice_w",
///     age: 30,
///     address: {
///         city: "Lisbon",
///     },
///     tags: ["admin", "ops"],
/// };
/// assert_eq!(user.size(), 5);
/// ```
#[macro_export]
macro_rules! doc {
    // match an empty document (with braces)
    ({}) => {
        $crate::collection::Document::new()
    };

    // match an empty document
    () => {
        $crate::collection::Document::new()
    };

    // match a document with key value pairs wrapped in outer braces
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        $crate::doc!($($key : $value),*)
    };

    // match a document with key value pairs
    ($($key:tt : $value:tt),* $(,)?) => {
        {
            let mut doc = $crate::collection::Document::new();
            $(
                doc.put($crate::collection::normalize(stringify!($key)), $crate::doc_value!($value))
                .expect(&format!("Failed to put value {} in document", stringify!($value)));
            )*
            doc
        }
    };
}

/// Helper macro to convert values for the doc! macro.
/// Handles nested documents, arrays, and expressions.
#[macro_export]
macro_rules! doc_value {
    // match a nested document
    ({ $($key:tt : $value:tt),* $(,)? }) => {
        {
            $crate::common::Value::Document($crate::doc!{ $($key : $value),* })
        }
    };

    // match an array of values
    ([ $($value:tt),* $(,)? ]) => {
        $crate::common::Value::Array(vec![$($crate::doc_value!($value)),*])
    };

    // match an expression (variable, function call, arithmetic in parens, literals, etc.)
    ($value:expr) => {
        $crate::common::Value::from($value)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::doc;

    fn set_up() -> Document {
        doc! {
            score: 1034,
            location: {
                state: "NY",
                city: "New York",
                address: {
                    line1: "40",
                    zip: 10001,
                },
            },
            tags: ["a", "b"],
        }
    }

    fn path(key: &str) -> FieldPath {
        FieldPath::parse(key, ".").unwrap()
    }

    #[test]
    fn put_rejects_empty_key() {
        let mut doc = Document::new();
        let err = doc.put("", 1).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidFieldName);
    }

    #[test]
    fn put_keeps_dotted_keys_literal() {
        let mut doc = Document::new();
        doc.put("a.b", 1).unwrap();
        assert_eq!(doc.get("a.b"), Some(&Value::I64(1)));
        assert!(doc.get("a").is_none());
        assert!(doc.get_path(&path("a.b")).is_none());
    }

    #[test]
    fn get_path_walks_nested_documents() {
        let doc = set_up();
        assert_eq!(doc.get_path(&path("location.city")), Some(&Value::from("New York")));
        assert_eq!(doc.get_path(&path("location.address.zip")), Some(&Value::I64(10001)));
        assert!(doc.get_path(&path("location.missing")).is_none());
        assert!(doc.get_path(&path("score.inner")).is_none());
    }

    #[test]
    fn set_path_creates_and_replaces_intermediates() {
        let mut doc = set_up();
        doc.set_path(&path("location.address.line2"), Value::from("ABC Street"));
        assert_eq!(doc.get_path(&path("location.address.line1")), Some(&Value::from("40")));
        assert_eq!(doc.get_path(&path("location.address.line2")), Some(&Value::from("ABC Street")));

        doc.set_path(&path("score.high"), Value::from(1));
        assert_eq!(doc.get_path(&path("score.high")), Some(&Value::I64(1)));

        doc.set_path(&path("brand.new.field"), Value::from(true));
        assert_eq!(doc.get_path(&path("brand.new.field")), Some(&Value::Bool(true)));
    }

    #[test]
    fn remove_path_keeps_parents() {
        let mut doc = doc! { a: { b: 1 } };
        assert_eq!(doc.remove_path(&path("a.b")), Some(Value::I64(1)));
        assert_eq!(doc.get("a"), Some(&Value::Document(Document::new())));
        assert!(doc.remove_path(&path("x.y")).is_none());
    }

    #[test]
    fn merge_is_deep() {
        let mut doc = set_up();
        doc.merge(&doc! { location: { city: "Albany" }, extra: 1 });

        assert_eq!(doc.get_path(&path("location.city")), Some(&Value::from("Albany")));
        assert_eq!(doc.get_path(&path("location.state")), Some(&Value::from("NY")));
        assert_eq!(doc.get_path(&path("location.address.zip")), Some(&Value::I64(10001)));
        assert_eq!(doc.get("extra"), Some(&Value::I64(1)));
        assert_eq!(doc.get("score"), Some(&Value::I64(1034)));
    }

    #[test]
    fn merge_overwrites_non_documents() {
        let mut doc = doc! { a: { b: 1 } };
        doc.merge(&doc! { a: 5 });
        assert_eq!(doc.get("a"), Some(&Value::I64(5)));
    }

    #[test]
    fn json_round_trip_skips_absent() {
        let mut doc = set_up();
        doc.put("gone", Value::Absent).unwrap();
        let json = doc.to_json();
        assert!(json.get("gone").is_none());
        assert_eq!(json["location"]["address"]["zip"], serde_json::json!(10001));

        let back = Document::from_json(json).unwrap();
        assert_eq!(back, set_up());
        assert!(Document::from_json(serde_json::json!([1, 2])).is_err());
    }

    #[test]
    fn serde_struct_conversion() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct User {
            name: String,
            age: u32,
        }

        let user = User { name: "A".into(), age: 5 };
        let doc = Document::from_serializable(&user).unwrap();
        assert_eq!(doc.get("name"), Some(&Value::from("A")));
        let back: User = doc.deserialize_into().unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn doc_macro_with_quoted_keys_and_expressions() {
        let base = 100;
        let doc = doc! {
            "first name": "fn1",
            computed: (base + 50),
        };
        assert_eq!(doc.get("first name"), Some(&Value::from("fn1")));
        assert_eq!(doc.get("computed"), Some(&Value::I64(150)));
        assert!(doc!{}.is_empty());
    }

    #[test]
    fn iteration_is_key_ordered() {
        let doc = doc! { b: 2, a: 1, c: 3 };
        let keys: Vec<&String> = doc.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        let collected: Document = doc.clone().into_iter().collect();
        assert_eq!(collected, doc);
    }
}
