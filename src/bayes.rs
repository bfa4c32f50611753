use tracing::debug;

use crate::{
    config::ModelConfig,
    count_class::Bucketing,
    decision::{decide, Label},
    error::Result,
    features::FeatureVector,
    frequency::FrequencyTable,
    probability::{Priors, ProbabilityTable},
    scorer::Scorer,
    vocabulary::Vocabulary,
};

/// A trained spam/ham classifier. Everything in here is read-only once built.
#[derive(Debug, Clone)]
pub struct SpamModel {
    vocabulary: Vocabulary,
    spam: ProbabilityTable,
    ham: ProbabilityTable,
    priors: Priors,
    bucketing: Bucketing,
    zero_penalty: f64,
}

impl SpamModel {
    pub fn train(
        vocabulary: &Vocabulary,
        spam_docs: &[FeatureVector],
        ham_docs: &[FeatureVector],
        config: &ModelConfig,
    ) -> Result<Self> {
        config.validate()?;
        let bucketing = config.bucketing();

        // Build the per-class tables:
        let spam = Self::class_table(vocabulary, spam_docs, config, Label::Spam)?;
        let ham = Self::class_table(vocabulary, ham_docs, config, Label::Ham)?;

        // Class priors come from the relative sizes of the training sets:
        let priors = Priors::from_counts(spam_docs.len(), ham_docs.len())?;

        Ok(SpamModel {
            vocabulary: vocabulary.clone(),
            spam,
            ham,
            priors,
            bucketing,
            zero_penalty: config.zero_penalty,
        })
    }

    /// Assembles a model from already estimated tables, e.g. ones loaded from disk.
    pub fn from_tables(
        vocabulary: Vocabulary,
        spam: ProbabilityTable,
        ham: ProbabilityTable,
        priors: Priors,
        config: &ModelConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(SpamModel {
            vocabulary,
            spam,
            ham,
            priors,
            bucketing: config.bucketing(),
            zero_penalty: config.zero_penalty,
        })
    }

    fn class_table(
        vocabulary: &Vocabulary,
        documents: &[FeatureVector],
        config: &ModelConfig,
        label: Label,
    ) -> Result<ProbabilityTable> {
        let freq = FrequencyTable::build(documents, vocabulary, config.bucketing());
        debug!(%label, documents = freq.documents(), words = freq.len(), "built frequency table");

        ProbabilityTable::estimate(&freq, freq.documents(), config.smoothing)
            .map_err(|e| e.for_class(label))
    }

    /// Returns the (spam, ham) scores for a document.
    pub fn scores(&self, features: &FeatureVector) -> Result<(f64, f64)> {
        let scorer = Scorer::new(&self.vocabulary, self.bucketing, self.zero_penalty);
        let spam = scorer
            .score(features, &self.spam, self.priors.log_spam())
            .map_err(|e| e.for_class(Label::Spam))?;
        let ham = scorer
            .score(features, &self.ham, self.priors.log_ham())
            .map_err(|e| e.for_class(Label::Ham))?;
        Ok((spam, ham))
    }

    /// Given a document's word counts, makes a prediction as to whether it's spam:
    pub fn classify(&self, features: &FeatureVector) -> Result<Label> {
        let (spam, ham) = self.scores(features)?;
        Ok(decide(spam, ham))
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn table(&self, label: Label) -> &ProbabilityTable {
        match label {
            Label::Spam => &self.spam,
            Label::Ham => &self.ham,
        }
    }

    pub fn priors(&self) -> &Priors {
        &self.priors
    }
}
