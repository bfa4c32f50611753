use std::{collections::HashSet, fs, path::Path};

use crate::error::Result;

/// The fixed, ordered set of words used as features. Words are lower-cased
/// and deduplicated; the first occurrence decides the position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Vocabulary {
    pub fn from_text(text: &str) -> Self {
        let mut vocabulary = Vocabulary::default();
        for token in text.split_whitespace() {
            let word = token.to_lowercase();
            if vocabulary.index.insert(word.clone()) {
                vocabulary.words.push(word);
            }
        }
        vocabulary
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(Self::from_text(&text))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
