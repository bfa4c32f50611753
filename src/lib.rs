//! Spam/ham classification from per-word occurrence counts.
//!
//! Each vocabulary word's count in a document is bucketed into a count class
//! (zero, one, two, lots). Training tallies those buckets per class label and
//! turns them into probabilities. Scoring sums log10 probabilities over the
//! whole vocabulary, Naive-Bayes style.

pub mod bayes;
pub mod config;
pub mod corpus;
pub mod count_class;
pub mod decision;
pub mod error;
pub mod evaluate;
pub mod features;
pub mod frequency;
pub mod persist;
pub mod pipeline;
pub mod probability;
pub mod scorer;
pub mod vocabulary;

pub use bayes::SpamModel;
pub use config::{Config, ModelConfig};
pub use decision::{decide, Label};
pub use error::{ClassifierError, Result};
pub use evaluate::{evaluate, Evaluation, Precision};
pub use features::{FeatureExtractor, FeatureVector, Tokenizer, WhitespaceTokenizer};
pub use pipeline::{run, RunReport};
pub use vocabulary::Vocabulary;
