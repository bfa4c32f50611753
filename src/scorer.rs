use crate::{
    count_class::Bucketing,
    error::{ClassifierError, Result},
    features::FeatureVector,
    probability::ProbabilityTable,
    vocabulary::Vocabulary,
};

/// Log-domain stand-in for a probability of exactly zero.
///
/// This keeps one unseen word/count combination from sending the score to
/// negative infinity. It makes the score an approximation rather than a true
/// log-likelihood; `Smoothing::Laplace` avoids needing it at all.
pub const DEFAULT_ZERO_PENALTY: f64 = -10_000.0;

#[derive(Debug, Clone, Copy)]
pub struct Scorer<'v> {
    vocabulary: &'v Vocabulary,
    bucketing: Bucketing,
    zero_penalty: f64,
}

impl<'v> Scorer<'v> {
    pub fn new(vocabulary: &'v Vocabulary, bucketing: Bucketing, zero_penalty: f64) -> Self {
        Scorer {
            vocabulary,
            bucketing,
            zero_penalty,
        }
    }

    /// Unnormalized log10 posterior of `features` under the class described by
    /// `table` and `log_prior`. Every vocabulary word contributes, including the
    /// ones absent from the document.
    pub fn score(
        &self,
        features: &FeatureVector,
        table: &ProbabilityTable,
        log_prior: f64,
    ) -> Result<f64> {
        let mut sum = 0.0;
        for word in self.vocabulary.iter() {
            let probs = table
                .get(word)
                .ok_or_else(|| ClassifierError::MissingVocabularyWord(word.to_string()))?;
            let class = self.bucketing.classify(features.count(word));
            sum += self.contribution(probs.of(class));
        }
        Ok(sum + log_prior)
    }

    fn contribution(&self, probability: f64) -> f64 {
        if probability == 0.0 {
            self.zero_penalty
        } else {
            probability.log10()
        }
    }
}
