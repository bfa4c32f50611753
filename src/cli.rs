use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use spamfilter::{probability::Smoothing, Config, Result};

/// Trains a count-class Naive-Bayes spam filter and reports precision/recall.
#[derive(Parser, Debug)]
#[command(name = "spamfilter", version)]
pub struct Args {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory containing dict.txt, train/ and test/
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Directory the probability tables are written to
    #[arg(long)]
    pub tables_dir: Option<PathBuf>,

    #[arg(long, value_enum)]
    pub smoothing: Option<SmoothingArg>,

    /// Score used in place of log10(0)
    #[arg(long, allow_negative_numbers = true)]
    pub zero_penalty: Option<f64>,

    /// Occurrence count from which a word counts as LOTS
    #[arg(long)]
    pub lots_at: Option<u32>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothingArg {
    None,
    Laplace,
}

impl From<SmoothingArg> for Smoothing {
    fn from(arg: SmoothingArg) -> Self {
        match arg {
            SmoothingArg::None => Smoothing::None,
            SmoothingArg::Laplace => Smoothing::Laplace,
        }
    }
}

impl Args {
    /// Loads the config file if one was given, then applies command line overrides.
    pub fn config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(dir) = &self.data_dir {
            config.data_dir = dir.clone();
        }
        if let Some(dir) = &self.tables_dir {
            config.tables_dir = Some(dir.clone());
        }
        if let Some(smoothing) = self.smoothing {
            config.model.smoothing = smoothing.into();
        }
        if let Some(penalty) = self.zero_penalty {
            config.model.zero_penalty = penalty;
        }
        if let Some(lots_at) = self.lots_at {
            config.model.lots_at = lots_at;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "spamfilter=warn";
        }
        match self.verbose {
            0 => "spamfilter=info",
            1 => "spamfilter=debug",
            _ => "spamfilter=trace",
        }
    }
}
