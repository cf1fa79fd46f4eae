//! Word-length reporting over plain text files.
//!
//! Reads a whole file, tokenizes Latin-letter words, sorts them by length
//! and then alphabetically, and answers length-filter queries.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::WordsError;

/// Sorted word list extracted from one text source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordReport {
    words: Vec<String>,
}

impl WordReport {
    /// Read `path`, tokenize, and sort.
    ///
    /// An empty or whitespace-only file is not an error; it yields an
    /// empty report and a warning.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, WordsError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WordsError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;
        if text.is_empty() {
            warn!(path = %path.display(), "word source is empty");
        } else if text.chars().all(char::is_whitespace) {
            warn!(path = %path.display(), "word source contains only whitespace");
        }
        Ok(Self::from_text(&text))
    }

    /// Tokenize and sort in-memory text.
    pub fn from_text(text: &str) -> Self {
        let mut words = split_words(text);
        words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        Self { words }
    }

    /// All words, shortest first, equal lengths alphabetical.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words in the report.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the report holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words strictly longer than `min_len`, in report order.
    pub fn words_longer_than(&self, min_len: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| word.len() > min_len)
    }

    /// Words with exactly `len` characters, alphabetical (report order).
    pub fn words_with_length(&self, len: usize) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |word| word.len() == len)
    }
}

/// A word starts at an ASCII Latin letter and continues through letters,
/// `-`, and `'`. Everything else separates words.
fn split_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        if current.is_empty() {
            if ch.is_ascii_alphabetic() {
                current.push(ch);
            }
        } else if ch.is_ascii_alphabetic() || ch == '-' || ch == '\'' {
            current.push(ch);
        } else {
            words.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}
