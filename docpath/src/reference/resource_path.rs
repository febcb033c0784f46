use crate::common::PATH_SEPARATOR;
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use std::fmt::Display;

/// A parsed `/`-separated address.
///
/// Parsing only checks that the path is non-empty and has no empty segments.
/// Whether the path names a collection or a document is decided by the
/// [crate::reference::AddressResolver], never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    pub fn parse(path: &str) -> DocPathResult<ResourcePath> {
        if path.is_empty() {
            log::error!("Path cannot be empty");
            return Err(DocPathError::new("Path cannot be empty", ErrorKind::InvalidPath));
        }

        let segments: Vec<String> = path.split(PATH_SEPARATOR).map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty()) {
            log::error!("Path {} contains an empty segment", path);
            return Err(DocPathError::new(
                &format!("Path '{}' contains an empty segment", path),
                ErrorKind::InvalidPath,
            )
            .with_path(path));
        }
        Ok(ResourcePath { segments })
    }

    /// The root path, parent of every top-level collection.
    pub fn root() -> ResourcePath {
        ResourcePath::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_even(&self) -> bool {
        self.segments.len() % 2 == 0
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The last segment, empty for the root.
    pub fn last_segment(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Appends a single segment.
    pub(crate) fn child(&self, segment: &str) -> ResourcePath {
        let mut segments = self.segments.clone();
        segments.push(segment.to_string());
        ResourcePath { segments }
    }

    /// Drops the last segment; the root is its own parent.
    pub(crate) fn parent(&self) -> ResourcePath {
        let mut segments = self.segments.clone();
        segments.pop();
        ResourcePath { segments }
    }

    /// True if `self` is exactly one segment below `other`.
    pub fn is_direct_child_of(&self, other: &ResourcePath) -> bool {
        self.segments.len() == other.segments.len() + 1
            && self.segments.starts_with(&other.segments)
    }
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}
