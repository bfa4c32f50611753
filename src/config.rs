use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    count_class::Bucketing,
    error::{ClassifierError, Result},
    probability::Smoothing,
    scorer::DEFAULT_ZERO_PENALTY,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `dict.txt` and the `train/` and `test/` corpora.
    pub data_dir: PathBuf,
    /// Where the probability tables are written. Defaults to `data_dir`.
    pub tables_dir: Option<PathBuf>,
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Occurrence count from which a word is bucketed as LOTS.
    pub lots_at: u32,
    pub smoothing: Smoothing,
    /// Score contribution used in place of log10(0).
    pub zero_penalty: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("data"),
            tables_dir: None,
            model: ModelConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig {
            lots_at: Bucketing::default().lots_at,
            smoothing: Smoothing::default(),
            zero_penalty: DEFAULT_ZERO_PENALTY,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn tables_dir(&self) -> &Path {
        self.tables_dir.as_deref().unwrap_or(self.data_dir.as_path())
    }

    pub fn validate(&self) -> Result<()> {
        self.model.validate()
    }
}

impl ModelConfig {
    pub fn bucketing(&self) -> Bucketing {
        Bucketing::new(self.lots_at)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lots_at < 3 {
            return Err(ClassifierError::Config(format!(
                "lots_at must be at least 3, got {}",
                self.lots_at
            )));
        }
        if !self.zero_penalty.is_finite() || self.zero_penalty >= 0.0 {
            return Err(ClassifierError::Config(format!(
                "zero_penalty must be a finite negative number, got {}",
                self.zero_penalty
            )));
        }
        Ok(())
    }
}
