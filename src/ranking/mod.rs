//! Deterministic top-K ranking of a scored corpus.
//!
//! Records are ordered ascending by weighted positional distance; distance
//! ties are broken by weighted cosine similarity, higher first, then by
//! original corpus position so equal keys always resolve the same way.

use std::cmp::Ordering;

use crate::core::record::SeqRecord;

/// Default number of records emitted by a ranking.
pub const DEFAULT_TOP_COUNT: usize = 50;

/// Multipliers applied to each score before comparison.
///
/// Both default to 1.0, which leaves the raw scores in charge.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct RankWeights {
    /// Multiplier for the positional distance key
    pub positional: f64,
    /// Multiplier for the cosine similarity key
    pub cosine: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            positional: 1.0,
            cosine: 1.0,
        }
    }
}

/// Rank a scored corpus and truncate to the top `k` records.
///
/// Sorts ascending by weighted positional distance, breaking distance ties
/// by weighted cosine similarity (higher first) and then by corpus index,
/// and returns the first `min(k, corpus.len())` records. The input corpus
/// is left untouched; a corpus smaller than `k` comes back whole.
#[must_use]
pub fn rank(corpus: &[SeqRecord], k: usize, weights: RankWeights) -> Vec<SeqRecord> {
    let mut indices: Vec<usize> = (0..corpus.len()).collect();

    indices.sort_by(|&a, &b| {
        compare_scores(&corpus[a], &corpus[b], weights)
            // Original corpus order as the final tie-break
            .then_with(|| a.cmp(&b))
    });

    indices
        .into_iter()
        .take(k)
        .map(|i| corpus[i].clone())
        .collect()
}

fn compare_scores(a: &SeqRecord, b: &SeqRecord, weights: RankWeights) -> Ordering {
    let key_a = a.score_positional * weights.positional;
    let key_b = b.score_positional * weights.positional;

    key_a
        .partial_cmp(&key_b)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            // Higher cosine similarity ranks first when distances tie
            (b.score_cosine * weights.cosine)
                .partial_cmp(&(a.score_cosine * weights.cosine))
                .unwrap_or(Ordering::Equal)
        })
}
