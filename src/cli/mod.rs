//! Command-line interface for seq-rank.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **rank**: Score a FASTA corpus against its first record and emit the
//!   top-K most similar records
//! - **inspect**: Parse a corpus and summarize it without scoring
//!
//! ## Usage
//!
//! ```text
//! # Rank a corpus, emitting the 50 most similar records as FASTA
//! seq-rank rank proteins.fasta
//!
//! # Top 10 with JSON output for scripting
//! seq-rank rank proteins.fasta -k 10 --format json
//!
//! # Summarize a corpus
//! seq-rank inspect proteins.fasta
//! ```

use clap::{Parser, Subcommand};

pub mod inspect;
pub mod rank;

#[derive(Parser)]
#[command(name = "seq-rank")]
#[command(version)]
#[command(about = "Rank FASTA records by similarity to a reference sequence")]
#[command(
    long_about = "seq-rank scores every record of a FASTA corpus against the first record (the reference) with two measures:\n- a positional distance over equalized per-letter index lists\n- cosine similarity of 26-letter frequency vectors\n\nThe corpus is then sorted by both scores and the top-K records are emitted."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score and rank a corpus against its first record
    Rank(rank::RankArgs),

    /// Parse a corpus and print a summary of it
    Inspect(inspect::InspectArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
