use serde::{Deserialize, Serialize};

/// Number of tracked residue symbols (the uppercase ASCII letters).
pub const ALPHABET_SIZE: usize = 26;

/// Map an uppercase ASCII letter to its index in `0..26`.
///
/// Returns `None` for every other byte. All letter-keyed container access
/// must go through this function; raw `byte - b'A'` arithmetic on
/// unvalidated input corrupts indexing.
///
/// # Examples
///
/// ```
/// use seq_rank::core::alphabet::letter_index;
///
/// assert_eq!(letter_index(b'A'), Some(0));
/// assert_eq!(letter_index(b'Z'), Some(25));
/// assert_eq!(letter_index(b'a'), None);
/// assert_eq!(letter_index(b'*'), None);
/// ```
#[inline]
#[must_use]
pub fn letter_index(byte: u8) -> Option<usize> {
    if byte.is_ascii_uppercase() {
        Some(usize::from(byte - b'A'))
    } else {
        None
    }
}

/// The uppercase letter at a given alphabet index.
///
/// # Panics
///
/// Panics if `index >= 26`.
#[inline]
#[must_use]
pub fn index_letter(index: usize) -> char {
    assert!(index < ALPHABET_SIZE, "alphabet index out of range: {index}");
    char::from(b'A' + index as u8)
}

/// A 26-dimensional letter-frequency vector.
///
/// One slot per uppercase letter, in alphabetical order. Built by a local
/// fold over a record's residues; each record owns its own counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterCounts(pub [u64; ALPHABET_SIZE]);

impl LetterCounts {
    /// Count occurrences of each tracked letter in `residues`.
    ///
    /// Bytes outside A-Z are ignored; callers validate residues before
    /// storing them.
    #[must_use]
    pub fn from_residues(residues: &str) -> Self {
        let mut counts = [0u64; ALPHABET_SIZE];
        for &byte in residues.as_bytes() {
            if let Some(idx) = letter_index(byte) {
                counts[idx] += 1;
            }
        }
        Self(counts)
    }

    /// Count for a single letter, by alphabet index.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> u64 {
        self.0[index]
    }

    /// Total number of counted residues.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// True if no letter has been counted.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_index_bounds() {
        assert_eq!(letter_index(b'A'), Some(0));
        assert_eq!(letter_index(b'M'), Some(12));
        assert_eq!(letter_index(b'Z'), Some(25));

        assert_eq!(letter_index(b'a'), None);
        assert_eq!(letter_index(b'z'), None);
        assert_eq!(letter_index(b'@'), None); // b'A' - 1
        assert_eq!(letter_index(b'['), None); // b'Z' + 1
        assert_eq!(letter_index(b'0'), None);
        assert_eq!(letter_index(b' '), None);
    }

    #[test]
    fn test_index_letter_round_trip() {
        for idx in 0..ALPHABET_SIZE {
            let letter = index_letter(idx);
            assert_eq!(letter_index(letter as u8), Some(idx));
        }
    }

    #[test]
    fn test_counts_from_residues() {
        let counts = LetterCounts::from_residues("AAABBC");
        assert_eq!(counts.get(0), 3);
        assert_eq!(counts.get(1), 2);
        assert_eq!(counts.get(2), 1);
        assert_eq!(counts.get(25), 0);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn test_counts_empty() {
        let counts = LetterCounts::from_residues("");
        assert!(counts.is_zero());
        assert_eq!(counts.total(), 0);
    }
}
