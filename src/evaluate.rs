use std::fmt;

use rayon::prelude::*;

use crate::{
    bayes::SpamModel,
    decision::Label,
    error::Result,
    features::FeatureVector,
};

/// Precision is undefined when nothing was predicted spam. That case is kept
/// apart from a real 0.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precision {
    Defined(f64),
    Undefined,
}

impl Precision {
    pub fn value(&self) -> Option<f64> {
        match *self {
            Precision::Defined(p) => Some(p),
            Precision::Undefined => None,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precision::Defined(p) => write!(f, "{}", p),
            Precision::Undefined => write!(f, "undefined (no positive predictions)"),
        }
    }
}

/// Counters gathered from one pass over a labelled set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub true_positives: usize,
    pub predicted_spam: usize,
    pub spam_documents: usize,
    pub ham_documents: usize,
}

impl Evaluation {
    pub fn precision(&self) -> Precision {
        if self.predicted_spam == 0 {
            Precision::Undefined
        } else {
            Precision::Defined(self.true_positives as f64 / self.predicted_spam as f64)
        }
    }

    /// `None` when the set had no spam documents to recall.
    pub fn recall(&self) -> Option<f64> {
        if self.spam_documents == 0 {
            None
        } else {
            Some(self.true_positives as f64 / self.spam_documents as f64)
        }
    }
}

/// Classifies every document of a labelled set and tallies the results.
pub fn evaluate(
    model: &SpamModel,
    spam_docs: &[FeatureVector],
    ham_docs: &[FeatureVector],
) -> Result<Evaluation> {
    let count_spam = |documents: &[FeatureVector]| -> Result<usize> {
        let labels = documents
            .par_iter()
            .map(|document| model.classify(document))
            .collect::<Result<Vec<_>>>()?;
        Ok(labels.into_iter().filter(|&l| l == Label::Spam).count())
    };

    let true_positives = count_spam(spam_docs)?;
    let false_positives = count_spam(ham_docs)?;

    Ok(Evaluation {
        true_positives,
        predicted_spam: true_positives + false_positives,
        spam_documents: spam_docs.len(),
        ham_documents: ham_docs.len(),
    })
}
