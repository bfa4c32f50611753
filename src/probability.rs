use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{
    count_class::CountClass,
    error::{ClassifierError, Result},
    frequency::FrequencyTable,
};

/// How bucket counts are turned into probabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoothing {
    /// Plain relative frequency. Empty buckets give a probability of exactly 0.
    #[default]
    None,
    /// Add-one smoothing over the four buckets, so nothing is ever 0.
    Laplace,
}

/// P(count class | label) for a single word.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordProbabilities {
    probs: [f64; 4],
}

impl WordProbabilities {
    pub fn new(zero: f64, one: f64, two: f64, lots: f64) -> Self {
        WordProbabilities {
            probs: [zero, one, two, lots],
        }
    }

    pub fn of(&self, class: CountClass) -> f64 {
        self.probs[class.index()]
    }

    pub fn as_array(&self) -> [f64; 4] {
        self.probs
    }

    pub fn sum(&self) -> f64 {
        self.probs.iter().sum()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    rows: HashMap<String, WordProbabilities>,
}

impl ProbabilityTable {
    pub fn estimate(
        freq: &FrequencyTable,
        total_documents: usize,
        smoothing: Smoothing,
    ) -> Result<Self> {
        if total_documents == 0 {
            return Err(ClassifierError::InvalidTrainingSet);
        }

        let (pseudo, denominator) = match smoothing {
            Smoothing::None => (0.0, total_documents as f64),
            Smoothing::Laplace => (1.0, total_documents as f64 + CountClass::ALL.len() as f64),
        };

        let rows = freq
            .iter()
            .map(|(word, counts)| {
                let p = |class| (counts.get(class) as f64 + pseudo) / denominator;
                let probs = WordProbabilities::new(
                    p(CountClass::Zero),
                    p(CountClass::One),
                    p(CountClass::Two),
                    p(CountClass::Lots),
                );
                (word.to_string(), probs)
            })
            .collect();

        Ok(ProbabilityTable { rows })
    }

    pub fn get(&self, word: &str) -> Option<&WordProbabilities> {
        self.rows.get(word)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordProbabilities)> {
        self.rows.iter().map(|(word, probs)| (word.as_str(), probs))
    }
}

impl<S: Into<String>> FromIterator<(S, WordProbabilities)> for ProbabilityTable {
    fn from_iter<I: IntoIterator<Item = (S, WordProbabilities)>>(iter: I) -> Self {
        ProbabilityTable {
            rows: iter.into_iter().map(|(w, p)| (w.into(), p)).collect(),
        }
    }
}

/// Unconditional class probabilities, from the relative training set sizes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priors {
    spam: f64,
    ham: f64,
}

impl Priors {
    /// Priors from P(spam), which has to lie in [0, 1].
    pub fn new(spam: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&spam) {
            return Err(ClassifierError::Config(format!(
                "spam prior must be within [0, 1], got {}",
                spam
            )));
        }
        Ok(Priors {
            spam,
            ham: 1.0 - spam,
        })
    }

    pub fn from_counts(spam_documents: usize, ham_documents: usize) -> Result<Self> {
        if spam_documents == 0 || ham_documents == 0 {
            return Err(ClassifierError::InvalidTrainingSet);
        }
        let total = (spam_documents + ham_documents) as f64;
        Ok(Priors {
            spam: spam_documents as f64 / total,
            ham: ham_documents as f64 / total,
        })
    }

    pub fn spam(&self) -> f64 {
        self.spam
    }

    pub fn ham(&self) -> f64 {
        self.ham
    }

    pub fn log_spam(&self) -> f64 {
        self.spam.log10()
    }

    pub fn log_ham(&self) -> f64 {
        self.ham.log10()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{count_class::Bucketing, features::FeatureVector, vocabulary::Vocabulary};

    fn doc(counts: &[(&str, u32)]) -> FeatureVector {
        counts.iter().map(|&(w, c)| (w, c)).collect()
    }

    fn free_meeting_table() -> FrequencyTable {
        let vocabulary = Vocabulary::from_text("free meeting");
        let documents = vec![doc(&[("free", 3)]), doc(&[("meeting", 1)])];
        FrequencyTable::build(&documents, &vocabulary, Bucketing::default())
    }

    #[test]
    fn divides_buckets_by_document_count() {
        let freq = free_meeting_table();
        let table = ProbabilityTable::estimate(&freq, freq.documents(), Smoothing::None).unwrap();

        let free = table.get("free").unwrap();
        assert_eq!(free.as_array(), [0.5, 0.0, 0.0, 0.5]);
        let meeting = table.get("meeting").unwrap();
        assert_eq!(meeting.as_array(), [0.5, 0.5, 0.0, 0.0]);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let vocabulary = Vocabulary::from_text("a b c");
        let documents: Vec<_> = (0..31u32)
            .map(|i| doc(&[("a", i % 7), ("b", i % 3)]))
            .collect();
        let freq = FrequencyTable::build(&documents, &vocabulary, Bucketing::default());

        for smoothing in [Smoothing::None, Smoothing::Laplace] {
            let table = ProbabilityTable::estimate(&freq, freq.documents(), smoothing).unwrap();
            for (_, probs) in table.iter() {
                assert!((probs.sum() - 1.0).abs() < 1e-9);
                assert!(probs.as_array().iter().all(|&p| (0.0..=1.0).contains(&p)));
            }
        }
    }

    #[test]
    fn laplace_never_yields_zero() {
        let freq = free_meeting_table();
        let table = ProbabilityTable::estimate(&freq, freq.documents(), Smoothing::Laplace).unwrap();

        let free = table.get("free").unwrap();
        assert_eq!(free.of(CountClass::One), 1.0 / 6.0);
        assert_eq!(free.of(CountClass::Lots), 2.0 / 6.0);
    }

    #[test]
    fn empty_training_set_is_rejected() {
        let vocabulary = Vocabulary::from_text("free");
        let freq = FrequencyTable::build(&[], &vocabulary, Bucketing::default());
        let err = ProbabilityTable::estimate(&freq, 0, Smoothing::None).unwrap_err();
        assert!(matches!(err, ClassifierError::InvalidTrainingSet));
    }

    #[test]
    fn priors_follow_set_sizes() {
        let priors = Priors::from_counts(1, 3).unwrap();
        assert_eq!(priors.spam(), 0.25);
        assert_eq!(priors.ham(), 0.75);
        assert!((priors.spam() + priors.ham() - 1.0).abs() < 1e-12);
        assert!((priors.log_spam() - 0.25f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn explicit_priors_must_be_probabilities() {
        let priors = Priors::new(0.25).unwrap();
        assert_eq!(priors.ham(), 0.75);
        assert!(Priors::new(1.5).is_err());
        assert!(Priors::new(-0.1).is_err());
        assert!(Priors::new(f64::NAN).is_err());
    }

    #[test]
    fn priors_need_both_classes() {
        assert!(matches!(
            Priors::from_counts(0, 4),
            Err(ClassifierError::InvalidTrainingSet)
        ));
        assert!(Priors::from_counts(4, 0).is_err());
    }
}
