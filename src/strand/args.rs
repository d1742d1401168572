use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "strand")]
#[command(about = "Content-addressed string analysis and query store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the record store (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Print raw JSON responses instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a string and store its record
    #[command(alias = "s")]
    Submit {
        /// The value to analyze
        value: String,
    },

    /// Fetch the record for an exact value
    #[command(alias = "g")]
    Get {
        /// The exact value to look up
        value: String,
    },

    /// List records matching a structured filter
    #[command(alias = "ls")]
    List {
        /// Only palindromes ("true") or non-palindromes ("false")
        #[arg(long)]
        palindrome: Option<String>,

        /// Inclusive minimum length
        #[arg(long)]
        min_length: Option<String>,

        /// Inclusive maximum length
        #[arg(long)]
        max_length: Option<String>,

        /// Exact word count
        #[arg(long)]
        word_count: Option<String>,

        /// A single character the value must contain
        #[arg(long)]
        contains: Option<String>,
    },

    /// Query records with natural language (e.g. "single word palindromes")
    #[command(alias = "q")]
    Query {
        /// The query text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete the record for an exact value
    #[command(alias = "rm")]
    Delete {
        /// The exact value to delete
        value: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., output)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
