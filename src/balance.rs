//! Balance checks for sequences over Z_n.
//!
//! Two related notions are used in this crate:
//!
//! - **Balanced** ([`is_balanced`]): a sequence of length `modulus * quotient`
//!   in which every residue appears exactly `quotient` times. This defines the
//!   balanced vectors.
//! - **Equidistributed** ([`is_equidistributed`]): every residue appears the
//!   same number of times as every other residue, with no target count fixed in
//!   advance. This is the row test applied to log-Hadamard matrices.
//!
//! For a sequence of length `modulus * quotient` the two agree; they differ
//! only in how a length mismatch is treated (an error versus simply `false`).

use crate::error::{Error, Result};

/// Occurrence counts of each residue in a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceReport {
    /// `counts[v]` is the number of positions holding the value `v`.
    pub counts: Vec<usize>,
    /// The count each residue would need for the sequence to be balanced,
    /// or `None` if the length is not a multiple of the modulus.
    pub expected_count: Option<usize>,
}

impl BalanceReport {
    /// Whether every residue appears exactly `expected_count` times.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        match self.expected_count {
            Some(expected) => self.counts.iter().all(|&c| c == expected),
            None => false,
        }
    }

    /// Whether all residue counts are equal to each other.
    #[must_use]
    pub fn is_equidistributed(&self) -> bool {
        self.counts.windows(2).all(|w| w[0] == w[1])
    }
}

/// Tally a sequence by value into `modulus` buckets.
///
/// # Errors
///
/// Returns [`Error::ElementOutOfRange`] if a value is not below `modulus`.
pub fn tally(sequence: &[u32], modulus: u32) -> Result<BalanceReport> {
    let mut counts = vec![0usize; modulus as usize];
    for &value in sequence {
        let bucket = counts
            .get_mut(value as usize)
            .ok_or(Error::ElementOutOfRange { value, modulus })?;
        *bucket += 1;
    }

    let m = modulus as usize;
    let expected_count = (m > 0 && sequence.len() % m == 0).then(|| sequence.len() / m);

    Ok(BalanceReport {
        counts,
        expected_count,
    })
}

/// Decide whether every residue modulo `modulus` appears exactly `quotient`
/// times in `sequence`.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `sequence.len() != modulus * quotient`.
/// - [`Error::ElementOutOfRange`] if a value is not below `modulus`.
///
/// # Examples
///
/// ```
/// use fuglede::balance::is_balanced;
///
/// assert!(is_balanced(&[0, 1, 1, 0], 2, 2).unwrap());
/// assert!(!is_balanced(&[0, 0, 0, 0], 2, 2).unwrap());
/// assert!(is_balanced(&[0, 1, 1], 2, 2).is_err());
/// ```
pub fn is_balanced(sequence: &[u32], modulus: u32, quotient: usize) -> Result<bool> {
    let expected_len = (modulus as usize).checked_mul(quotient).ok_or_else(|| {
        Error::invalid_input(format!(
            "modulus * quotient = {modulus} * {quotient} overflows usize"
        ))
    })?;
    if sequence.len() != expected_len {
        return Err(Error::invalid_input(format!(
            "sequence has length {}, expected modulus * quotient = {} * {} = {}",
            sequence.len(),
            modulus,
            quotient,
            expected_len
        )));
    }

    let report = tally(sequence, modulus)?;
    Ok(report.counts.iter().all(|&c| c == quotient))
}

/// Decide whether all residues modulo `modulus` appear equally often.
///
/// Residues that do not appear count as zero, so a sequence that misses some
/// residue while containing another is not equidistributed.
///
/// # Errors
///
/// Returns [`Error::ElementOutOfRange`] if a value is not below `modulus`.
///
/// # Examples
///
/// ```
/// use fuglede::balance::is_equidistributed;
///
/// assert!(is_equidistributed(&[2, 0, 1], 3).unwrap());
/// assert!(!is_equidistributed(&[0, 0, 1, 1], 3).unwrap());
/// ```
pub fn is_equidistributed(sequence: &[u32], modulus: u32) -> Result<bool> {
    Ok(tally(sequence, modulus)?.is_equidistributed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_balanced() {
        assert!(is_balanced(&[0, 0, 1, 1], 2, 2).unwrap());
        assert!(is_balanced(&[2, 1, 0, 0, 1, 2], 3, 2).unwrap());
        assert!(!is_balanced(&[0, 0, 0, 1, 1, 2], 3, 2).unwrap());
        assert!(!is_balanced(&[0, 0, 0, 0], 2, 2).unwrap());
    }

    #[test]
    fn test_length_mismatch_is_invalid_input() {
        let err = is_balanced(&[0, 1, 0], 2, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_oversized_quotient_is_invalid_input() {
        let err = is_balanced(&[0, 1], 2, usize::MAX).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            is_balanced(&[0, 2], 2, 1),
            Err(Error::ElementOutOfRange {
                value: 2,
                modulus: 2
            })
        );
        assert!(is_equidistributed(&[5], 3).is_err());
    }

    #[test]
    fn test_tally_report() {
        let report = tally(&[0, 2, 2, 1, 0, 2], 3).unwrap();
        assert_eq!(report.counts, vec![2, 1, 3]);
        assert_eq!(report.expected_count, Some(2));
        assert!(!report.is_balanced());

        let report = tally(&[0, 1, 0], 2).unwrap();
        assert_eq!(report.expected_count, None);
        assert!(!report.is_balanced());
        assert!(!report.is_equidistributed());
    }

    #[test]
    fn test_equidistributed_needs_every_value() {
        assert!(is_equidistributed(&[0, 1, 1, 0], 2).unwrap());
        assert!(!is_equidistributed(&[1, 1, 1, 1], 2).unwrap());
        // Length not a multiple of the modulus can never be equidistributed
        assert!(!is_equidistributed(&[0, 1, 2, 0], 3).unwrap());
        // The empty sequence has all counts equal to zero
        assert!(is_equidistributed(&[], 3).unwrap());
    }

    proptest! {
        #[test]
        fn prop_balanced_agrees_with_equidistributed(
            modulus in 2u32..5,
            quotient in 1usize..4,
            seed in proptest::collection::vec(0u32..100, 16),
        ) {
            let len = modulus as usize * quotient;
            let sequence: Vec<u32> = seed.iter().cycle().take(len).map(|v| v % modulus).collect();
            prop_assert_eq!(
                is_balanced(&sequence, modulus, quotient).unwrap(),
                is_equidistributed(&sequence, modulus).unwrap()
            );
        }
    }
}
