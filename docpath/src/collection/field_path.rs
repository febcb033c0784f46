use crate::common::Value;
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use smallvec::SmallVec;
use std::fmt::Display;

type SegmentVec = SmallVec<[String; 4]>;

/// Address of a possibly nested field inside a [crate::collection::Document].
///
/// Partial updates name fields by dot-delimited keys (`"address.city"`); a
/// `FieldPath` is the parsed form of such a key, so the update touches
/// `city` inside the nested `address` document instead of creating a
/// top-level key literally named `address.city`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldPath {
    segments: SegmentVec,
}

impl FieldPath {
    /// Parses a separator-delimited key into a field path.
    ///
    /// # Errors
    ///
    /// Returns [ErrorKind::InvalidFieldName] if the key is empty or contains
    /// an empty segment (`"a..b"`, `".a"`, `"a."`).
    pub fn parse(key: &str, separator: &str) -> DocPathResult<FieldPath> {
        if key.is_empty() {
            log::error!("Field path cannot be empty");
            return Err(DocPathError::new(
                "Field path cannot be empty",
                ErrorKind::InvalidFieldName,
            ));
        }

        let segments: SegmentVec = if separator.is_empty() {
            SmallVec::from_iter([key.to_string()])
        } else {
            key.split(separator).map(str::to_string).collect()
        };

        if segments.iter().any(|s| s.is_empty()) {
            log::error!("Field path {} contains an empty segment", key);
            return Err(DocPathError::new(
                &format!("Field path '{}' contains an empty segment", key),
                ErrorKind::InvalidFieldName,
            ));
        }
        Ok(FieldPath { segments })
    }

    /// Creates a single-segment path; the name is taken literally.
    pub fn literal(name: &str) -> DocPathResult<FieldPath> {
        FieldPath::parse(name, "")
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn first(&self) -> &str {
        // parse guarantees at least one segment
        &self.segments[0]
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_nested(&self) -> bool {
        self.segments.len() > 1
    }

    /// The path without its first segment, `None` for a single-segment path.
    pub(crate) fn tail(&self) -> Option<FieldPath> {
        if self.is_nested() {
            Some(FieldPath {
                segments: self.segments[1..].iter().cloned().collect(),
            })
        } else {
            None
        }
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// One assignment of a partial update: set `value` at `field`.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldUpdate {
    pub field: FieldPath,
    pub value: Value,
}

impl FieldUpdate {
    pub fn new(field: FieldPath, value: Value) -> Self {
        FieldUpdate { field, value }
    }
}
