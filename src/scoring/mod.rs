//! Similarity scoring between a reference record and candidates.
//!
//! Two independent measures are computed per candidate:
//!
//! - [`positional::positional_distance`]: mean-squared distance between the
//!   index positions of shared letters, with length equalization for
//!   position lists of unequal length (lower is more similar);
//! - [`cosine::cosine_similarity`]: cosine of the two 26-letter frequency
//!   vectors (higher is more similar).
//!
//! Scoring each candidate depends only on itself and the fixed reference,
//! so the corpus pass is a plain sequential map.

pub mod cosine;
pub mod equalize;
pub mod positional;

use crate::core::record::SeqRecord;

/// Both similarity measures for one candidate against the reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityScore {
    /// Mean-squared positional distance (0.0 when no letter qualifies).
    pub positional: f64,

    /// Letter-frequency cosine similarity in [-1, 1].
    pub cosine: f64,
}

impl SimilarityScore {
    /// Calculate both measures between a reference and a candidate.
    #[must_use]
    pub fn calculate(reference: &SeqRecord, candidate: &SeqRecord) -> Self {
        Self {
            positional: positional::positional_distance(reference, candidate),
            cosine: cosine::cosine_similarity(&reference.counts, &candidate.counts),
        }
    }
}

/// Score every record in the corpus against the reference, writing both
/// score fields in place.
///
/// The reference is scored against itself like any other record; its
/// positional distance is 0 and its cosine similarity is 1 (for a non-empty
/// sequence), the best possible pair of ranking keys.
pub fn score_corpus(reference: &SeqRecord, corpus: &mut [SeqRecord]) {
    for record in corpus.iter_mut() {
        let score = SimilarityScore::calculate(reference, record);
        record.score_positional = score.positional;
        record.score_cosine = score.cosine;
    }
}
