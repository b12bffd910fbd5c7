use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Build a totaled expense sheet from provider exports")]
struct Cli {
    /// Folder holding the .csv/.xlsx exports; provider must be named in the
    /// file name (e.g. c1_activity.csv, amex_activity.xlsx)
    #[arg(default_value = "data_folder")]
    folder: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    if !cli.folder.is_dir() {
        bail!("folder not found: {}", cli.folder.display());
    }

    match tally_ledger::build_expense_sheet(&cli.folder)? {
        Some(path) => println!("Expense sheet written to {}", path.display()),
        None => println!("No transactions found in {}", cli.folder.display()),
    }

    Ok(())
}
