use serde::Serialize;

use crate::core::alphabet::{letter_index, LetterCounts, ALPHABET_SIZE};

/// A single FASTA record with precomputed letter statistics.
///
/// The identifier and residues are sealed at construction. The two score
/// fields default to 0.0 and are written exactly once by the scoring phase;
/// a zero score is indistinguishable from "no shared letters".
#[derive(Debug, Clone, Serialize)]
pub struct SeqRecord {
    /// Header text following the record marker. May be empty.
    pub id: String,

    /// Concatenated sequence lines, whitespace stripped.
    pub residues: String,

    /// Per-letter occurrence counts.
    pub counts: LetterCounts,

    /// Per letter, the ascending zero-based indices at which it occurs
    /// in `residues`.
    #[serde(skip)]
    pub positions: [Vec<usize>; ALPHABET_SIZE],

    /// Mean-squared positional distance to the reference.
    pub score_positional: f64,

    /// Cosine similarity of letter-frequency vectors with the reference.
    pub score_cosine: f64,
}

impl SeqRecord {
    /// Build a record from an identifier and validated residues.
    ///
    /// Counts and positions are derived in one fold over `residues`.
    /// Bytes outside A-Z are ignored here; the parser is responsible for
    /// rejecting or dropping them before construction.
    #[must_use]
    pub fn new(id: impl Into<String>, residues: impl Into<String>) -> Self {
        let residues = residues.into();

        let mut counts = [0u64; ALPHABET_SIZE];
        let mut positions: [Vec<usize>; ALPHABET_SIZE] = std::array::from_fn(|_| Vec::new());
        for (pos, &byte) in residues.as_bytes().iter().enumerate() {
            if let Some(idx) = letter_index(byte) {
                counts[idx] += 1;
                positions[idx].push(pos);
            }
        }

        Self {
            id: id.into(),
            residues,
            counts: LetterCounts(counts),
            positions,
            score_positional: 0.0,
            score_cosine: 0.0,
        }
    }

    /// Number of residues in the sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// True if the record holds no residues.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Position list for a letter, by alphabet index.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, index: usize) -> &[usize] {
        &self.positions[index]
    }
}
