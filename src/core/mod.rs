//! Core data types for sequence similarity ranking.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`LetterCounts`](alphabet::LetterCounts): a 26-dimensional
//!   letter-frequency vector
//! - [`SeqRecord`](record::SeqRecord): a parsed FASTA record with
//!   precomputed letter counts and per-letter position lists
//!
//! Only the 26 uppercase ASCII letters are tracked. Indexing into any
//! letter-keyed container goes through [`alphabet::letter_index`], which
//! rejects every other byte.

pub mod alphabet;
pub mod record;
