//! Cosine similarity of letter-frequency vectors.

use crate::core::alphabet::{LetterCounts, ALPHABET_SIZE};

/// Cosine similarity between two 26-letter frequency vectors.
///
/// Standard dot-product over magnitudes, in [-1, 1] (non-negative here
/// since counts are non-negative). Returns exactly 0.0 when either vector
/// has zero magnitude, avoiding division by zero.
#[must_use]
pub fn cosine_similarity(a: &LetterCounts, b: &LetterCounts) -> f64 {
    let mut dot = 0u64;
    let mut mag_a = 0.0f64;
    let mut mag_b = 0.0f64;

    for i in 0..ALPHABET_SIZE {
        let (x, y) = (a.get(i), b.get(i));
        dot += x * y;

        #[allow(clippy::cast_precision_loss)]
        {
            mag_a += (x * x) as f64;
            mag_b += (y * y) as f64;
        }
    }

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    {
        dot as f64 / (mag_a.sqrt() * mag_b.sqrt())
    }
}
