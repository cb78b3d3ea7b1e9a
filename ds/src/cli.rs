//! CLI argument parsing for dictstore

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::query::SearchScope;

#[derive(Parser, Debug)]
#[command(name = "ds")]
#[command(author, version, about = "File-backed personal dictionary", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Path to the dictionary data file (overrides config)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Register a new dictionary entry
    Register {
        /// The word or phrase to register (must be unique)
        #[arg(required = true)]
        term: String,

        /// Definition or main explanation
        #[arg(short, long, default_value = "")]
        definition: String,

        /// Category or subject area
        #[arg(short, long, default_value = "")]
        category: String,

        /// Usage example or supplementary note
        #[arg(short, long, default_value = "")]
        example: String,
    },

    /// Search entries by case-insensitive substring
    Search {
        /// Text to search for; empty shows every entry
        #[arg(default_value = "")]
        term: String,

        /// Which fields to compare against
        #[arg(short, long, value_enum, default_value_t = SearchScope::All)]
        scope: SearchScope,
    },

    /// List every entry in registration order
    List,
}
