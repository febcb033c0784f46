use backtrace::Backtrace;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};
use std::result::Result;
use std::sync::Arc;

/// Error kinds for docpath operations.
///
/// The first group describes address problems detected before any I/O, the
/// second group wraps a failed driver call, the rest are raised by drivers,
/// documents and the HTTP collaborator.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ErrorKind {
    /// The path / identifier combination fails a resolution precondition
    InvalidPath,

    /// A create, set or update call against the driver failed
    WriteError,
    /// A get or list call against the driver failed
    ReadError,
    /// A delete call against the driver failed
    DeleteError,
    /// A query call against the driver failed
    QueryError,

    /// The addressed document does not exist
    NotFound,
    /// The operation is not valid in the current context
    InvalidOperation,
    /// Invalid document field name
    InvalidFieldName,
    /// Error encoding or decoding data
    EncodingError,
    /// Error reported by the underlying datastore
    BackendError,
    /// Error reported by the HTTP collaborator
    HttpError,
    /// Internal error (usually indicates a bug)
    InternalError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidPath => write!(f, "Invalid path"),
            ErrorKind::WriteError => write!(f, "Write error"),
            ErrorKind::ReadError => write!(f, "Read error"),
            ErrorKind::DeleteError => write!(f, "Delete error"),
            ErrorKind::QueryError => write!(f, "Query error"),
            ErrorKind::NotFound => write!(f, "Not found"),
            ErrorKind::InvalidOperation => write!(f, "Invalid operation"),
            ErrorKind::InvalidFieldName => write!(f, "Invalid field name"),
            ErrorKind::EncodingError => write!(f, "Encoding error"),
            ErrorKind::BackendError => write!(f, "Backend error"),
            ErrorKind::HttpError => write!(f, "HTTP error"),
            ErrorKind::InternalError => write!(f, "Internal error"),
        }
    }
}

/// Error type of every fallible docpath operation.
///
/// `DocPathError` carries a message, an [ErrorKind], the path the operation
/// was addressing (when there is one) and the error that caused it. Wrapped
/// driver failures keep the driver's error as their cause, so the full chain
/// is visible through [Error::source] and the `Debug` output.
///
/// # Examples
///
/// ```rust
/// use docpath::errors::{DocPathError, ErrorKind};
///
/// let cause = DocPathError::new("document does not exist", ErrorKind::NotFound);
/// let err = DocPathError::new_with_cause("Failed to update document", ErrorKind::WriteError, cause)
///     .with_path("users/alice");
///
/// assert_eq!(err.kind(), &ErrorKind::WriteError);
/// assert_eq!(err.path(), Some("users/alice"));
/// assert_eq!(err.cause().map(|c| c.kind().clone()), Some(ErrorKind::NotFound));
/// ```
#[derive(Clone)]
pub struct DocPathError {
    message: String,
    error_kind: ErrorKind,
    path: Option<String>,
    cause: Option<Box<DocPathError>>,
    backtrace: Arc<Backtrace>,
}

impl DocPathError {
    /// Creates a new `DocPathError` with the specified message and error kind.
    pub fn new(message: &str, error_kind: ErrorKind) -> Self {
        DocPathError {
            message: message.to_string(),
            error_kind,
            path: None,
            cause: None,
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Creates a new `DocPathError` that wraps `cause`.
    pub fn new_with_cause(message: &str, error_kind: ErrorKind, cause: DocPathError) -> Self {
        DocPathError {
            message: message.to_string(),
            error_kind,
            path: None,
            cause: Some(Box::new(cause)),
            backtrace: Arc::new(Backtrace::new()),
        }
    }

    /// Attaches the path the failing operation was addressing.
    pub fn with_path(mut self, path: &str) -> Self {
        self.path = Some(path.to_string());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.error_kind
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn cause(&self) -> Option<&DocPathError> {
        self.cause.as_deref()
    }

    /// Returns the innermost error of the cause chain (self if there is none).
    pub fn root_cause(&self) -> &DocPathError {
        let mut current = self;
        while let Some(cause) = current.cause() {
            current = cause;
        }
        current
    }
}

impl Display for DocPathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{} (path: {})", self.message, path),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Debug for DocPathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // print error message with stack trace followed by cause
        match &self.cause {
            Some(cause) => write!(f, "{} [{}]\nCaused by: {:?}", self, self.error_kind, cause),
            None => write!(f, "{} [{}]\n{:?}", self, self.error_kind, self.backtrace),
        }
    }
}

impl Error for DocPathError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Some(cause) => Some(cause.as_ref()),
            None => None,
        }
    }
}

/// A result type alias for docpath operations.
pub type DocPathResult<T> = Result<T, DocPathError>;

impl From<std::io::Error> for DocPathError {
    fn from(err: std::io::Error) -> Self {
        let error_kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            _ => ErrorKind::BackendError,
        };
        DocPathError::new(&format!("IO error: {}", err), error_kind)
    }
}

impl From<serde_json::Error> for DocPathError {
    fn from(err: serde_json::Error) -> Self {
        DocPathError::new(&format!("JSON error: {}", err), ErrorKind::EncodingError)
    }
}

impl From<std::fmt::Error> for DocPathError {
    fn from(err: std::fmt::Error) -> Self {
        DocPathError::new(&format!("Formatting error: {}", err), ErrorKind::InternalError)
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for DocPathError {
    fn from(err: reqwest::Error) -> Self {
        DocPathError::new(&format!("HTTP error: {}", err), ErrorKind::HttpError)
    }
}

impl From<String> for DocPathError {
    fn from(msg: String) -> Self {
        DocPathError::new(&msg, ErrorKind::InternalError)
    }
}

impl From<&str> for DocPathError {
    fn from(msg: &str) -> Self {
        DocPathError::new(msg, ErrorKind::InternalError)
    }
}
