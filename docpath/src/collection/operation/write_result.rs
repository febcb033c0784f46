use crate::reference::DocumentReference;

/// The result of a create.
///
/// Holds the reference that was written and the identifier used, either the
/// caller's explicit id or the generated one.
///
/// # Examples
///
/// ```rust
/// use docpath::{doc, DocPathBuilder};
///
/// # async fn run() -> docpath::errors::DocPathResult<()> {
/// let db = DocPathBuilder::new().open()?;
/// let result = db.create("users", None, doc! { name: "A" }).await?;
/// assert_eq!(result.id, result.reference.id());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WriteResult {
    pub reference: DocumentReference,
    pub id: String,
}

impl WriteResult {
    pub(crate) fn new(reference: DocumentReference) -> Self {
        let id = reference.id().to_string();
        WriteResult { reference, id }
    }
}
