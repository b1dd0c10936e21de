//! Transcript text normalization.
//!
//! Canonicalizes case, punctuation and whitespace, then converts spoken
//! numbers to digits so that "Nineteen-nineteen" and "1919" compare equal.

use std::fmt;
use std::ops::Index;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::numbers::ennumberize;

/// Comma directly between two digits ("1,000").
static DIGIT_COMMA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d),(\d)").expect("Failed to compile digit comma pattern"));

/// Line breaks and tabs.
static CONTROL_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n\t]").expect("Failed to compile control whitespace pattern"));

/// Punctuation removed without leaving a gap.
static SPACELESS_PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_+").expect("Failed to compile spaceless punctuation pattern"));

/// Punctuation replaced by a word break.
static SPACEFUL_PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[\-!@#$%\^&*()+=\[\]{}\\|;:",./<>?]+"#)
        .expect("Failed to compile spaceful punctuation pattern")
});

/// Ordered sequence of normalized tokens.
///
/// Tokens never contain whitespace and are never empty. The sequence is
/// read-only once produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl Index<usize> for TokenSequence {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for TokenSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

/// Normalize raw transcript text into a token sequence.
///
/// Total over any input. Re-normalizing the displayed output of a
/// normalization yields the same tokens.
pub fn normalize(text: &str) -> TokenSequence {
    let text = text.trim().to_lowercase();
    let text = DIGIT_COMMA.replace_all(&text, "${1}${2}");
    let text = CONTROL_WHITESPACE.replace_all(&text, " ");
    let text = SPACELESS_PUNCTUATION.replace_all(&text, "");
    let text = SPACEFUL_PUNCTUATION.replace_all(&text, " ");

    // Fallback reductions may join several values with spaces.
    let tokens = ennumberize(text.split_whitespace())
        .iter()
        .flat_map(|token| token.split_whitespace())
        .map(str::to_string)
        .collect();

    TokenSequence(tokens)
}

/// Normalize and render back to a single-spaced string.
pub fn normalize_text(text: &str) -> String {
    normalize(text).to_string()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
