use std::{
    fs,
    path::{Path, PathBuf},
};

use rayon::prelude::*;
use tracing::debug;

use crate::{
    error::Result,
    features::{FeatureExtractor, FeatureVector, Tokenizer},
};

/// On-disk layout of a labelled corpus:
///
/// ```text
/// <root>/dict.txt
/// <root>/train/{spam,ham}/<one file per email>
/// <root>/test/{spam,ham}/<one file per email>
/// ```
#[derive(Debug, Clone)]
pub struct CorpusLayout {
    root: PathBuf,
}

impl CorpusLayout {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        CorpusLayout { root: root.into() }
    }

    pub fn dictionary(&self) -> PathBuf {
        self.root.join("dict.txt")
    }

    pub fn train_spam(&self) -> PathBuf {
        self.root.join("train").join("spam")
    }

    pub fn train_ham(&self) -> PathBuf {
        self.root.join("train").join("ham")
    }

    pub fn test_spam(&self) -> PathBuf {
        self.root.join("test").join("spam")
    }

    pub fn test_ham(&self) -> PathBuf {
        self.root.join("test").join("ham")
    }
}

/// Reads every regular file in `dir` and extracts its word counts. Files are
/// visited in name order; bytes that aren't valid UTF-8 are replaced.
pub fn load_documents<T: Tokenizer>(
    dir: &Path,
    extractor: &FeatureExtractor<'_, T>,
) -> Result<Vec<FeatureVector>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    paths.sort();

    let documents = paths
        .par_iter()
        .map(|path| -> Result<FeatureVector> {
            let bytes = fs::read(path)?;
            Ok(extractor.extract(&String::from_utf8_lossy(&bytes)))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(dir = %dir.display(), documents = documents.len(), "loaded documents");
    Ok(documents)
}
