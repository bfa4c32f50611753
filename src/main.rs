mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use spamfilter::{run, Evaluation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args = cli::Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| args.log_filter().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = args.config().context("invalid configuration")?;
    let report = run(&config).context("run aborted")?;

    println!("Probability of an email being spam: {}", report.priors.spam());
    println!("Probability of an email being ham: {}", report.priors.ham());
    println!("Spam table: {}", report.spam_table.display());
    println!("Ham table: {}", report.ham_table.display());
    print_evaluation("Training", &report.training);
    print_evaluation("Test", &report.test);

    println!("Done");

    Ok(())
}

fn print_evaluation(set: &str, evaluation: &Evaluation) {
    println!(
        "{} set: {} spam, {} ham",
        set, evaluation.spam_documents, evaluation.ham_documents
    );
    println!("{} Precision: {}", set, evaluation.precision());
    match evaluation.recall() {
        Some(recall) => println!("{} Recall: {}", set, recall),
        None => println!("{} Recall: undefined (no spam documents)", set),
    }
}
