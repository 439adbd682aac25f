//! # seq-rank
//!
//! A library for ranking FASTA records by similarity to a reference
//! sequence.
//!
//! The first record of a corpus is the reference. Every record is scored
//! against it with two independent measures, and the corpus is sorted by
//! ascending positional distance (distance ties broken by higher cosine
//! similarity) to produce the top-K most similar records:
//!
//! - **Positional distance**: per shared letter, the mean-squared
//!   difference between the index positions at which the letter occurs in
//!   the two sequences. Position lists of unequal length are first
//!   equalized by inserting interpolated midpoints into the wider gaps of
//!   the shorter list.
//! - **Frequency cosine**: cosine similarity between the two 26-letter
//!   frequency vectors.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_rank::parsing::fasta::parse_fasta_file;
//! use seq_rank::ranking::{rank, RankWeights};
//! use seq_rank::scoring::score_corpus;
//! use std::path::Path;
//!
//! let mut corpus = parse_fasta_file(Path::new("proteins.fasta")).unwrap();
//! let reference = corpus[0].clone();
//!
//! score_corpus(&reference, &mut corpus);
//! let top = rank(&corpus, 50, RankWeights::default());
//!
//! for record in &top {
//!     println!(">{}", record.id);
//!     println!("{}", record.residues);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Sequence records and the tracked alphabet
//! - [`parsing`]: FASTA corpus parsing
//! - [`scoring`]: Positional distance and frequency cosine measures
//! - [`ranking`]: Deterministic top-K ranking
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod ranking;
pub mod scoring;

// Re-export commonly used types for convenience
pub use core::alphabet::LetterCounts;
pub use core::record::SeqRecord;
pub use ranking::{rank, RankWeights, DEFAULT_TOP_COUNT};
pub use scoring::SimilarityScore;
