use thiserror::Error;

use crate::decision::Label;

pub type Result<T> = std::result::Result<T, ClassifierError>;

#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A class had no training documents, so its probabilities can't be estimated.
    #[error("invalid training set: no documents to learn from")]
    InvalidTrainingSet,

    /// The table being scored against was built from a different vocabulary.
    #[error("probability table has no entry for vocabulary word '{0}'")]
    MissingVocabularyWord(String),

    #[error("malformed probability table at line {line}: {reason}")]
    MalformedTable { line: u64, reason: String },

    #[error("{label} class: {source}")]
    Class {
        label: Label,
        #[source]
        source: Box<ClassifierError>,
    },

    #[error("{name}: {source}")]
    Dataset {
        name: String,
        #[source]
        source: Box<ClassifierError>,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl ClassifierError {
    /// Tags an error with the class label it was raised for.
    pub fn for_class(self, label: Label) -> Self {
        ClassifierError::Class {
            label,
            source: Box::new(self),
        }
    }

    /// Tags an error with the dataset (or file) it was raised for.
    pub fn for_dataset<S: Into<String>>(self, name: S) -> Self {
        ClassifierError::Dataset {
            name: name.into(),
            source: Box::new(self),
        }
    }
}
