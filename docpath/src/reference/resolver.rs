use crate::common::PATH_SEPARATOR;
use crate::errors::{DocPathError, DocPathResult, ErrorKind};
use crate::reference::{CollectionReference, DocumentReference, ResourcePath};

/// Turns string paths (plus an optional explicit identifier) into references.
///
/// Classification uses the parity of the `/`-split segment count only. The
/// rules differ per operation and are not mirror images of each other:
///
/// | operation | input | result |
/// |---|---|---|
/// | any | `path` even, `id` | `collection(path).document(id)` |
/// | any | `path` odd, `id` | `document(path/id)` |
/// | create | no `id`, `path` without `/` | `collection(path).new_document()` |
/// | create | no `id`, `path` with `/` | [ErrorKind::InvalidPath] |
/// | read / update / delete | no `id`, `path` odd | `document(path)` |
/// | read / update / delete | no `id`, `path` even | [ErrorKind::InvalidPath] |
/// | list | no `id`, `path` odd | `collection(path)` |
/// | list | no `id`, `path` even | `document(path).parent()` |
///
/// An auto-id create requires no slash at all, while a bare document address
/// requires an odd segment count. Both rules are kept as they are.
///
/// Resolution is pure address computation; nothing here touches a datastore.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressResolver;

impl AddressResolver {
    pub fn new() -> Self {
        AddressResolver
    }

    /// Handle to the collection at `path`, without any parity check.
    pub fn collection(&self, path: &str) -> DocPathResult<CollectionReference> {
        Ok(CollectionReference::new(ResourcePath::parse(path)?))
    }

    /// Handle to the document at `path`, without any parity check.
    pub fn document(&self, path: &str) -> DocPathResult<DocumentReference> {
        Ok(DocumentReference::new(ResourcePath::parse(path)?))
    }

    /// Resolves the target of a create. Without an `id` the document gets a
    /// generated identifier, which is only allowed directly under a
    /// top-level collection.
    pub fn resolve_for_create(&self, path: &str, id: Option<&str>) -> DocPathResult<DocumentReference> {
        let reference = match id {
            Some(id) => self.resolve_with_id(path, id)?,
            None => {
                if path.contains(PATH_SEPARATOR) {
                    log::error!("Auto-generated id requested for nested path {}", path);
                    return Err(DocPathError::new(
                        "An auto-generated id is only allowed under a top-level collection",
                        ErrorKind::InvalidPath,
                    )
                    .with_path(path));
                }
                self.collection(path)?.new_document()
            }
        };
        log::debug!("Resolved {} for create to {}", path, reference);
        Ok(reference)
    }

    /// Resolves a path that must address an existing document, as used by
    /// read, update and delete.
    pub fn resolve_document(&self, path: &str, id: Option<&str>) -> DocPathResult<DocumentReference> {
        let reference = match id {
            Some(id) => self.resolve_with_id(path, id)?,
            None => {
                let parsed = ResourcePath::parse(path)?;
                if parsed.is_even() {
                    log::error!("Path {} has an even segment count and needs an id", path);
                    return Err(DocPathError::new(
                        "A document path without an id must have an odd segment count",
                        ErrorKind::InvalidPath,
                    )
                    .with_path(path));
                }
                DocumentReference::new(parsed)
            }
        };
        log::debug!("Resolved {} to document {}", path, reference);
        Ok(reference)
    }

    /// Resolves the collection whose documents a listing or query returns.
    pub fn resolve_collection(&self, path: &str) -> DocPathResult<CollectionReference> {
        let parsed = ResourcePath::parse(path)?;
        let reference = if parsed.is_even() {
            DocumentReference::new(parsed).parent()
        } else {
            CollectionReference::new(parsed)
        };
        log::debug!("Resolved {} to collection {}", path, reference);
        Ok(reference)
    }

    fn resolve_with_id(&self, path: &str, id: &str) -> DocPathResult<DocumentReference> {
        if id.is_empty() || id.contains(PATH_SEPARATOR) {
            log::error!("Invalid document id '{}' for path {}", id, path);
            return Err(DocPathError::new(
                &format!("Invalid document id '{}'", id),
                ErrorKind::InvalidPath,
            )
            .with_path(path));
        }

        let parsed = ResourcePath::parse(path)?;
        if parsed.is_even() {
            Ok(CollectionReference::new(parsed).document(id))
        } else {
            self.document(&format!("{}{}{}", path, PATH_SEPARATOR, id))
        }
    }
}
