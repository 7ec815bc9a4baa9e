use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "docsift")]
#[command(version)]
#[command(about = "Keyword search and ranking over a document corpus")]
pub struct Cli {
    /// Corpus file (JSON array, or JSONL with a .jsonl extension)
    #[arg(long, global = true)]
    pub corpus: Option<PathBuf>,

    /// Engine config (JSON)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank documents against a query
    Search {
        /// Free-text query
        #[arg(required = true)]
        query: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Show at most this many results
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the search terms extracted from text
    Tokenize {
        text: Vec<String>,

        #[arg(long)]
        json: bool,
    },

    /// Print one document by id
    Show {
        id: String,

        #[arg(long)]
        json: bool,
    },

    /// List every document in the corpus
    List,

    /// Chat with the search assistant over stdin
    Chat,

    /// Print version information
    Version,
}
