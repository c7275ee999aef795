//! Text normalization for keyword matching.

/// Lowercase `text` and drop everything that is not a word character
/// (`[A-Za-z0-9_]`) or whitespace.
///
/// Non-ASCII letters count as punctuation and are removed.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}
