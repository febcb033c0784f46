use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use std::fmt::Display;
use std::str::FromStr;

/// Specifies the direction for ordering query results.
///
/// Parses from `"asc"`/`"ascending"` and `"desc"`/`"descending"`
/// (case-insensitive) so directions coming from configuration or request
/// parameters can be used directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest)
    #[default]
    Ascending,
    /// Sort in descending order (largest to smallest)
    Descending,
}

impl SortOrder {
    /// Applies this direction to an ascending comparison result.
    #[inline]
    pub fn apply(&self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Ascending => write!(f, "asc"),
            SortOrder::Descending => write!(f, "desc"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DocPathError;

    fn from_str(s: &str) -> DocPathResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => {
                log::error!("Unknown sort direction {}", other);
                Err(DocPathError::new(
                    &format!("Unknown sort direction: {}", other),
                    ErrorKind::InvalidOperation,
                ))
            }
        }
    }
}
