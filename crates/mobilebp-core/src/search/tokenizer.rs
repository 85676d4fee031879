//! Tokenizer
//!
//! Turns a text field into index terms: lower-cased runs of alphanumeric or
//! underscore characters, at least [`MIN_TOKEN_CHARS`] characters long.
//! Every other character separates tokens. No stemming, no stop words.

use std::fmt::Display;

/// Tokens shorter than this (in characters) are dropped
pub const MIN_TOKEN_CHARS: usize = 3;

/// Split text into index terms
///
/// ```
/// use mobilebp_core::tokenize;
///
/// assert_eq!(tokenize("A1! b2 ccc"), vec!["ccc"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_term_char(c))
        .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Tokenize any value through its text representation
pub fn tokenize_value<T: Display + ?Sized>(value: &T) -> Vec<String> {
    tokenize(&value.to_string())
}

#[inline]
fn is_term_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
