use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    bayes::SpamModel,
    config::Config,
    corpus::{load_documents, CorpusLayout},
    decision::Label,
    error::{ClassifierError, Result},
    evaluate::{evaluate, Evaluation},
    features::{FeatureExtractor, FeatureVector},
    persist,
    probability::Priors,
    vocabulary::Vocabulary,
};

pub const SPAM_TABLE_FILE: &str = "spam-probability.txt";
pub const HAM_TABLE_FILE: &str = "ham-probability.txt";

/// Everything one batch run produces.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub priors: Priors,
    pub spam_table: PathBuf,
    pub ham_table: PathBuf,
    pub training: Evaluation,
    pub test: Evaluation,
}

/// Trains on `train/`, writes both probability tables, then evaluates the
/// training and the test sets. Any failure names the dataset it came from.
pub fn run(config: &Config) -> Result<RunReport> {
    config.validate()?;
    let layout = CorpusLayout::new(&config.data_dir);

    let dictionary = layout.dictionary();
    let vocabulary = Vocabulary::from_path(&dictionary)
        .map_err(|e| e.for_dataset(format!("dictionary {}", dictionary.display())))?;
    info!(words = vocabulary.len(), "loaded vocabulary");

    let extractor = FeatureExtractor::new(&vocabulary);

    let train_spam = load(&extractor, &layout.train_spam(), "training spam")?;
    let train_ham = load(&extractor, &layout.train_ham(), "training ham")?;

    let model = SpamModel::train(&vocabulary, &train_spam, &train_ham, &config.model)
        .map_err(|e| e.for_dataset("training set"))?;
    info!(
        spam = model.priors().spam(),
        ham = model.priors().ham(),
        "estimated class priors"
    );

    // Write both probability tables out:
    let tables_dir = config.tables_dir();
    fs::create_dir_all(tables_dir)
        .map_err(|e| ClassifierError::from(e).for_dataset(tables_dir.display().to_string()))?;
    let spam_table = save(&model, Label::Spam, tables_dir.join(SPAM_TABLE_FILE))?;
    let ham_table = save(&model, Label::Ham, tables_dir.join(HAM_TABLE_FILE))?;

    let test_spam = load(&extractor, &layout.test_spam(), "test spam")?;
    let test_ham = load(&extractor, &layout.test_ham(), "test ham")?;

    let training =
        evaluate(&model, &train_spam, &train_ham).map_err(|e| e.for_dataset("training set"))?;
    let test = evaluate(&model, &test_spam, &test_ham).map_err(|e| e.for_dataset("test set"))?;

    Ok(RunReport {
        priors: *model.priors(),
        spam_table,
        ham_table,
        training,
        test,
    })
}

fn load(extractor: &FeatureExtractor<'_>, dir: &Path, name: &str) -> Result<Vec<FeatureVector>> {
    info!("Creating word counts for {} emails...", name);
    let documents = load_documents(dir, extractor)
        .map_err(|e| e.for_dataset(format!("{} set ({})", name, dir.display())))?;
    info!(documents = documents.len(), "loaded {} set", name);
    Ok(documents)
}

fn save(model: &SpamModel, label: Label, path: PathBuf) -> Result<PathBuf> {
    persist::save_table(model.table(label), model.vocabulary(), &path)
        .map_err(|e| e.for_dataset(format!("{} table {}", label, path.display())))?;
    info!(%label, path = %path.display(), "wrote probability table");
    Ok(path)
}
