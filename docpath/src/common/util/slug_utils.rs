use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug pattern"));

/// Turns free text into a URL- and path-safe slug.
///
/// The text is lower-cased, every run of characters outside `[a-z0-9]`
/// collapses into a single `-`, and leading or trailing dashes are trimmed.
/// Non-ASCII letters are treated as separators.
///
/// ```rust
/// use docpath::common::slugify;
///
/// assert_eq!(slugify("  Hello, World!  "), "hello-world");
/// assert_eq!(slugify("Rust_2024 -- Edition"), "rust-2024-edition");
/// ```
pub fn slugify(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
