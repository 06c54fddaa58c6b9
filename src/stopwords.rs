//! Optional stopword list for word-frequency ranking.
//!
//! The list is a plain whitespace-separated token file. It is optional by
//! design: a missing or unreadable file degrades to an empty set with a
//! logged warning, never an error. Loaded once per session and treated as
//! immutable afterwards.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::warn;

/// An immutable set of words excluded from word-frequency rankings.
///
/// # Example
///
/// ```
/// use chatlens::stopwords::Stopwords;
///
/// let stopwords = Stopwords::from_text("the a an and or");
/// assert!(stopwords.contains("the"));
/// assert!(!stopwords.contains("hello"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates an empty stopword set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from whitespace-separated tokens.
    pub fn from_text(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Loads a stopword file, degrading to an empty set if it is missing.
    ///
    /// Absence of the file is expected and not fatal; it is logged as a
    /// warning so rankings silently running without stopwords is traceable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_text(&text),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "stopword file not available, proceeding without stop words"
                );
                Self::empty()
            }
        }
    }

    /// Returns `true` if `word` is a stopword.
    ///
    /// Matching is exact; callers lowercase tokens before the check.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of stopwords in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
