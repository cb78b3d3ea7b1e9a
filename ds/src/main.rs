use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::path::PathBuf;

use dictstore::cli::{Cli, Command};
use dictstore::config::Config;
use dictstore::{DictStore, Record, StoreError, search};

/// Display labels for record fields, one per stored key.
/// Presentation concern only; the core never sees these.
const FIELD_LABELS: [(&str, &str); 4] = [
    ("term", "Term"),
    ("definition", "Definition"),
    ("category", "Category"),
    ("example", "Example"),
];

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn data_file(cli: &Cli, config: &Config) -> PathBuf {
    cli.file.clone().unwrap_or_else(|| config.data_file.clone())
}

fn print_record(index: usize, record: &Record) {
    println!("[{}] {}: {}", index, FIELD_LABELS[0].1, record.term.cyan().bold());
    println!("  {}: {}", FIELD_LABELS[1].1, record.definition);
    println!("  {}: {}", FIELD_LABELS[2].1, record.category);
    println!("  {}: {}", FIELD_LABELS[3].1, record.example);
    println!();
}

fn print_results(results: &[Record], total: usize, needle: &str) {
    if results.is_empty() {
        if needle.trim().is_empty() {
            println!("No entries registered yet");
        } else {
            println!("No entries match '{}'", needle);
        }
        return;
    }

    println!("--- {} of {} entries ---", results.len(), total);
    println!();
    for (i, record) in results.iter().enumerate() {
        print_record(i + 1, record);
    }
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let path = data_file(&cli, &config);

    info!("dictstore starting");

    match cli.command {
        Command::Register {
            term,
            definition,
            category,
            example,
        } => {
            let store = DictStore::open(&path);
            let candidate = Record {
                term,
                definition,
                category,
                example,
            };
            match store.insert(candidate) {
                Ok(records) => {
                    println!("{} Registered entry:", "✓".green());
                    println!();
                    // Echo the stored fields back so the user can confirm
                    // exactly what was written
                    if let Some(stored) = records.last() {
                        print_record(records.len(), stored);
                    }
                }
                Err(err @ StoreError::EmptyTerm) => {
                    eprintln!("{} {}", "✗".red(), err);
                    std::process::exit(1);
                }
                Err(err @ StoreError::Duplicate { .. }) => {
                    eprintln!("{} {}; nothing was registered", "⚠".yellow(), err);
                    std::process::exit(1);
                }
                Err(err) => return Err(err.into()),
            }
        }
        Command::Search { term, scope } => {
            let store = DictStore::open(&path);
            let records = store.load()?;
            let results = search(&records, &term, scope);
            print_results(&results, records.len(), &term);
        }
        Command::List => {
            let store = DictStore::open(&path);
            let records = store.load()?;
            let total = records.len();
            print_results(&records, total, "");
        }
    }

    Ok(())
}
