use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    count_class::{Bucketing, CountClass},
    features::FeatureVector,
    vocabulary::Vocabulary,
};

/// Number of documents falling into each count class for one word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketCounts {
    counts: [u64; 4],
}

impl BucketCounts {
    pub fn get(&self, class: CountClass) -> u64 {
        self.counts[class.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    fn bump(&mut self, class: CountClass) {
        self.counts[class.index()] += 1;
    }

    fn merge(&mut self, other: &BucketCounts) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    buckets: HashMap<String, BucketCounts>,
    documents: usize,
}

impl FrequencyTable {
    /// Counts, for every vocabulary word, how many documents fall into each
    /// count class. Documents are split across the rayon pool and the partial
    /// tables are summed.
    pub fn build(documents: &[FeatureVector], vocabulary: &Vocabulary, bucketing: Bucketing) -> Self {
        let empty = || vec![BucketCounts::default(); vocabulary.len()];

        let buckets = documents
            .par_iter()
            .fold(empty, |mut partial, document| {
                for (slot, word) in partial.iter_mut().zip(vocabulary.iter()) {
                    slot.bump(bucketing.classify(document.count(word)));
                }
                partial
            })
            .reduce(empty, |mut left, right| {
                for (l, r) in left.iter_mut().zip(right.iter()) {
                    l.merge(r);
                }
                left
            });

        let buckets = vocabulary
            .iter()
            .map(str::to_string)
            .zip(buckets)
            .collect();

        FrequencyTable {
            buckets,
            documents: documents.len(),
        }
    }

    pub fn get(&self, word: &str) -> Option<&BucketCounts> {
        self.buckets.get(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BucketCounts)> {
        self.buckets.iter().map(|(word, counts)| (word.as_str(), counts))
    }

    /// Number of documents the table was built from.
    pub fn documents(&self) -> usize {
        self.documents
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
