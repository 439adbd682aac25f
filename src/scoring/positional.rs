//! Positional distance between two records.
//!
//! For each letter shared by the reference and the candidate whose position
//! lists differ in length, the lists are equalized and the mean of squared
//! element-wise differences is that letter's distance. The record-level
//! score is the mean over all such letters.
//!
//! Letters are processed in alphabetical order so the result is
//! reproducible. Letters absent from the reference, and letters whose
//! position lists already have equal length, contribute nothing.

use crate::core::alphabet::ALPHABET_SIZE;
use crate::core::record::SeqRecord;
use crate::scoring::equalize::equalize;

/// Safely convert usize to f64 for distance calculations
#[inline]
fn count_to_f64(count: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    {
        count as f64
    }
}

/// Mean-squared positional distance between a reference and a candidate.
///
/// Returns 0.0 when no letter qualifies (no shared letters, or all shared
/// letters have equal-length position lists).
#[must_use]
pub fn positional_distance(reference: &SeqRecord, candidate: &SeqRecord) -> f64 {
    let mut sum = 0.0;
    let mut qualifying = 0usize;

    for idx in 0..ALPHABET_SIZE {
        let ref_positions = reference.positions_of(idx);
        let cand_positions = candidate.positions_of(idx);

        if cand_positions.is_empty() || ref_positions.is_empty() {
            continue;
        }
        if ref_positions.len() == cand_positions.len() {
            continue;
        }

        if let Some(distance) = letter_distance(ref_positions, cand_positions) {
            sum += distance;
            qualifying += 1;
        }
    }

    if qualifying == 0 {
        0.0
    } else {
        sum / count_to_f64(qualifying)
    }
}

/// Mean of squared differences between two equalized position lists.
///
/// The shorter list is chosen by actual length, not by role. Returns `None`
/// when equalization stalls (a single-position list has no gap to split),
/// which the caller treats as a non-qualifying letter.
fn letter_distance(a: &[usize], b: &[usize]) -> Option<f64> {
    let (grown, fixed) = if a.len() < b.len() {
        equalize(a, b)
    } else {
        equalize(b, a)
    };

    if grown.len() != fixed.len() {
        return None;
    }

    let sum: f64 = grown
        .iter()
        .zip(fixed.iter())
        .map(|(&x, &y)| {
            let d = count_to_f64(x.abs_diff(y));
            d * d
        })
        .sum();

    Some(sum / count_to_f64(grown.len()))
}
