//! Length equalization of ordered position lists.
//!
//! Two position lists for the same letter are usually of different lengths.
//! Before an element-wise distance can be computed, the shorter list is
//! grown by inserting interpolated values until the lengths match.

/// Equalize `shorter` to the length of `longer`.
///
/// Returns `(equalized_shorter, longer)`. The longer list is returned
/// unchanged; the shorter one is grown one element per iteration: scan all
/// adjacent pairs, pick the pair with the maximum absolute difference
/// (first occurrence wins ties), and insert the integer average of the pair
/// between them. Deterministic, and terminates in exactly
/// `longer.len() - shorter.len()` iterations.
///
/// If `shorter` is not actually shorter, both lists are returned as copies
/// with no insertions. If `shorter` has fewer than two elements there is no
/// gap to split: growth stalls and the result is returned short. Callers
/// must check the returned lengths rather than assume equality.
#[must_use]
pub fn equalize(shorter: &[usize], longer: &[usize]) -> (Vec<usize>, Vec<usize>) {
    let mut result = shorter.to_vec();
    let longer = longer.to_vec();

    if result.len() < 2 {
        return (result, longer);
    }

    while result.len() < longer.len() {
        let mut max_diff = 0;
        let mut insert_index = 0;

        for (i, pair) in result.windows(2).enumerate() {
            let diff = pair[0].abs_diff(pair[1]);
            if diff > max_diff {
                max_diff = diff;
                insert_index = i;
            }
        }

        let average = (result[insert_index] + result[insert_index + 1]) / 2;
        result.insert(insert_index + 1, average);
    }

    (result, longer)
}
