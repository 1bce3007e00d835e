//! Dictionary words for passphrases.

use std::path::Path;

use rand::seq::IndexedRandom;
use rand::RngCore;

/// Built-in dictionary, one lowercase word per line
const EMBEDDED_WORDS: &str = include_str!("../../assets/words.txt");

/// Source of random dictionary words.
pub trait WordSource: Send + Sync {
    /// Return one word chosen uniformly at random.
    fn random_word(&self, rng: &mut dyn RngCore) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Failed to read word list: {0}")]
    Io(#[from] std::io::Error),
    #[error("Word list contains no words")]
    Empty,
}

/// A non-empty, in-memory word list.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The dictionary compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            words: parse_words(EMBEDDED_WORDS),
        }
    }

    /// Load a newline-separated dictionary.
    ///
    /// Lines are trimmed; blank lines and lines starting with `#` are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let contents = std::fs::read_to_string(path)?;
        Self::new(parse_words(&contents))
    }

    /// Number of words, for startup logging
    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }
}

impl WordSource for WordList {
    fn random_word(&self, rng: &mut dyn RngCore) -> &str {
        // Non-empty by construction
        self.words.choose(rng).map(String::as_str).unwrap_or_default()
    }
}

fn parse_words(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
