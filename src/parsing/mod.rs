//! Parsers for reading a sequence corpus from disk.
//!
//! The corpus format is FASTA: each record begins with a `>` marker and
//! header line, followed by one or more lines of residues. Whitespace and
//! line breaks inside the sequence are stripped during parsing.
//!
//! ## Example
//!
//! ```rust,no_run
//! use seq_rank::parsing::fasta::parse_fasta_file;
//! use std::path::Path;
//!
//! let corpus = parse_fasta_file(Path::new("uniprot_sprot.fasta")).unwrap();
//! println!("parsed {} records", corpus.len());
//! ```

pub mod fasta;
