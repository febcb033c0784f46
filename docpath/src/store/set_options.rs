/// How a `set` treats an existing document.
///
/// The default replaces the whole document. [SetOptions::merge] deep-merges
/// the payload into the stored fields and leaves the rest untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SetOptions {
    merge: bool,
}

impl SetOptions {
    pub fn overwrite() -> Self {
        SetOptions { merge: false }
    }

    pub fn merge() -> Self {
        SetOptions { merge: true }
    }

    pub fn is_merge(&self) -> bool {
        self.merge
    }
}
