use std::collections::HashMap;

use crate::vocabulary::Vocabulary;

/// Splits raw document text into comparable tokens.
pub trait Tokenizer: Send + Sync {
    fn tokens(&self, text: &str) -> Vec<String>;
}

/// Whitespace separated, lower-cased tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokens(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_lowercase).collect()
    }
}

/// Per-document occurrence counts of vocabulary words. Only words that were
/// actually seen are stored, a missing word has a count of zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureVector {
    counts: HashMap<String, u32>,
}

impl FeatureVector {
    pub fn count(&self, word: &str) -> u32 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for (word, count) in iter {
            if count > 0 {
                *counts.entry(word.into()).or_insert(0) += count;
            }
        }
        FeatureVector { counts }
    }
}

pub struct FeatureExtractor<'v, T = WhitespaceTokenizer> {
    vocabulary: &'v Vocabulary,
    tokenizer: T,
}

impl<'v> FeatureExtractor<'v, WhitespaceTokenizer> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self::with_tokenizer(vocabulary, WhitespaceTokenizer)
    }
}

impl<'v, T: Tokenizer> FeatureExtractor<'v, T> {
    pub fn with_tokenizer(vocabulary: &'v Vocabulary, tokenizer: T) -> Self {
        FeatureExtractor {
            vocabulary,
            tokenizer,
        }
    }

    /// Counts every token of `text` that is a vocabulary word.
    pub fn extract(&self, text: &str) -> FeatureVector {
        let mut counts = HashMap::new();
        for token in self.tokenizer.tokens(text) {
            if self.vocabulary.contains(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        FeatureVector { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_only_vocabulary_words_case_insensitively() {
        let vocabulary = Vocabulary::from_text("free meeting");
        let extractor = FeatureExtractor::new(&vocabulary);

        let features = extractor.extract("FREE money, free Free stuff! Meeting at noon");
        assert_eq!(features.count("free"), 3);
        assert_eq!(features.count("meeting"), 1);
        assert_eq!(features.count("money,"), 0);
        assert_eq!(features.len(), 2);
    }

    #[test]
    fn punctuation_stays_attached_to_tokens() {
        let vocabulary = Vocabulary::from_text("free");
        let extractor = FeatureExtractor::new(&vocabulary);
        assert!(extractor.extract("free! free, free.").is_empty());
    }

    struct CommaTokenizer;

    impl Tokenizer for CommaTokenizer {
        fn tokens(&self, text: &str) -> Vec<String> {
            text.split(',').map(|t| t.trim().to_string()).collect()
        }
    }

    #[test]
    fn tokenizer_is_pluggable() {
        let vocabulary = Vocabulary::from_text("cheap pills");
        let extractor = FeatureExtractor::with_tokenizer(&vocabulary, CommaTokenizer);
        let features = extractor.extract("cheap,cheap , pills,CHEAP");
        assert_eq!(features.count("cheap"), 2);
        assert_eq!(features.count("pills"), 1);
    }

    #[test]
    fn zero_counts_are_not_stored() {
        let features: FeatureVector = vec![("free", 0), ("meeting", 2)].into_iter().collect();
        assert_eq!(features.len(), 1);
        assert_eq!(features.count("free"), 0);
    }

    #[test]
    fn repeated_words_add_up() {
        let features: FeatureVector = vec![("free", 2), ("free", 1), ("meeting", 1)]
            .into_iter()
            .collect();
        assert_eq!(features.count("free"), 3);
        assert_eq!(features.len(), 2);
    }
}
