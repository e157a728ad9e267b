//! Log-Hadamard matrices and the spectral pair test.
//!
//! For subsets `E` and `B` of Z_p^d (as `d × size` matrices) the log-Hadamard
//! matrix is `H = E^T B`, whose entry `(i, j)` is the pairing `e_i · b_j`.
//! The characters `x ↦ ω^(b · x)` for `b ∈ B` are orthogonal on `E` exactly
//! when, for every two distinct rows `i ≠ j` of `H`, the difference
//! `H_i - H_j` hits every residue equally often.

use itertools::Itertools;
use ndarray::{Array2, ArrayView1};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Subset, SubsetPairs};
use crate::balance;
use crate::error::{Error, Result};
use crate::linalg;

/// A first-type and a second-type subset that pass the row test.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralPair {
    /// The first-type subset `E`.
    pub first: Subset,
    /// The second-type subset `B`.
    pub second: Subset,
    /// `E^T B`.
    pub log_hadamard: Array2<u32>,
}

/// Summary of one run of the spectral pair test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralReport {
    /// Number of points in each subset.
    pub size: usize,
    /// Number of first-type subsets found.
    pub first_sets: usize,
    /// Number of second-type subsets found.
    pub second_sets: usize,
    /// Number of `(E, B)` pairs whose matrix was examined.
    pub pairs_tested: usize,
    /// Number of examined pairs with a failing row pair.
    pub pairs_rejected: usize,
    /// The pairs that passed, in the order they were found.
    pub pairs: Vec<SpectralPair>,
    /// Whether the run stopped at a report limit before testing every pair.
    pub stopped_early: bool,
}

impl SubsetPairs {
    /// The log-Hadamard matrix `first^T · second`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the subsets live in spaces of
    /// different dimension.
    pub fn log_hadamard(&self, first: &Subset, second: &Subset) -> Result<Array2<u32>> {
        linalg::mat_mul(
            self.ring(),
            &linalg::transpose(first.matrix()),
            second.matrix(),
        )
    }

    /// Whether `row0 - row1` contains every residue equally often.
    ///
    /// The difference is tallied by value into `modulus` buckets and all
    /// buckets must agree; there is no fixed target count.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if the rows have different lengths.
    /// - [`Error::ElementOutOfRange`] if an entry is not a residue.
    pub fn row_difference_balanced(
        &self,
        row0: ArrayView1<'_, u32>,
        row1: ArrayView1<'_, u32>,
    ) -> Result<bool> {
        if row0.len() != row1.len() {
            return Err(Error::DimensionMismatch {
                expected: format!("row of length {}", row0.len()),
                actual: format!("row of length {}", row1.len()),
            });
        }
        let ring = self.ring();
        let difference = row0
            .iter()
            .zip(row1.iter())
            .map(|(&a, &b)| Ok(ring.sub(ring.check(a)?, ring.check(b)?)))
            .collect::<Result<Vec<u32>>>()?;
        balance::is_equidistributed(&difference, ring.modulus())
    }

    /// Whether every ordered pair of distinct rows of `h` passes
    /// [`row_difference_balanced`](Self::row_difference_balanced).
    ///
    /// Stops at the first failing pair.
    ///
    /// # Errors
    ///
    /// See [`row_difference_balanced`](Self::row_difference_balanced).
    pub fn rows_balanced(&self, h: &Array2<u32>) -> Result<bool> {
        let rows = h.nrows();
        for (i, j) in (0..rows).cartesian_product(0..rows) {
            if i == j {
                continue;
            }
            if !self.row_difference_balanced(h.row(i), h.row(j))? {
                debug!(
                    row_i = i,
                    row_j = j,
                    lhs = ?h.row(i).to_vec(),
                    rhs = ?h.row(j).to_vec(),
                    "row difference is not balanced"
                );
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Test every first-type × second-type pair of `size`-point subsets.
    ///
    /// Both orders of a pair are tested when both subsets qualify for both
    /// roles.
    ///
    /// # Errors
    ///
    /// Propagates any failure from enumeration or matrix arithmetic; the
    /// search is aborted rather than returning a partial report.
    pub fn run_test(&self, size: usize) -> Result<SpectralReport> {
        self.run_test_until(size, None)
    }

    /// Like [`run_test`](Self::run_test), but stop after `max_reports`
    /// passing pairs when a limit is given.
    ///
    /// # Errors
    ///
    /// See [`run_test`](Self::run_test).
    pub fn run_test_until(&self, size: usize, max_reports: Option<usize>) -> Result<SpectralReport> {
        let firsts: Vec<Subset> = self.first_sets(size).collect::<Result<_>>()?;
        let seconds: Vec<Subset> = self.second_sets(size).collect();

        let mut report = SpectralReport {
            size,
            first_sets: firsts.len(),
            second_sets: seconds.len(),
            ..SpectralReport::default()
        };
        debug!(
            size,
            first_sets = report.first_sets,
            second_sets = report.second_sets,
            "starting spectral pair test"
        );

        'search: for first in &firsts {
            for second in &seconds {
                if max_reports.is_some_and(|limit| report.pairs.len() >= limit) {
                    report.stopped_early = true;
                    break 'search;
                }

                let h = self.log_hadamard(first, second)?;
                report.pairs_tested += 1;
                if !self.rows_balanced(&h)? {
                    report.pairs_rejected += 1;
                    continue;
                }

                info!(
                    first = ?first.indices(),
                    second = ?second.indices(),
                    "spectral pair found"
                );
                report.pairs.push(SpectralPair {
                    first: first.clone(),
                    second: second.clone(),
                    log_hadamard: h,
                });
            }
        }

        info!(
            size,
            tested = report.pairs_tested,
            found = report.pairs.len(),
            "spectral pair test finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_log_hadamard() {
        let space = SubsetPairs::new(2, 3).unwrap();
        let e = space.subset(&[0, 1, 2, 4]).unwrap();
        let b = space.subset(&[0, 3, 5, 6]).unwrap();
        let h = space.log_hadamard(&e, &b).unwrap();
        assert_eq!(
            h,
            array![[0u32, 0, 0, 0], [0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1]]
        );
    }

    #[test]
    fn test_row_difference_balanced() {
        let space = SubsetPairs::new(3, 2).unwrap();
        let r0 = array![0u32, 2, 1];
        let r1 = array![0u32, 0, 0];
        let r2 = array![1u32, 1, 1];
        // (0, 2, 1) hits each residue of Z_3 once
        assert!(space.row_difference_balanced(r0.view(), r1.view()).unwrap());
        // (2, 2, 2) hits only one residue
        assert!(!space.row_difference_balanced(r1.view(), r2.view()).unwrap());

        let short = array![0u32, 1];
        assert!(matches!(
            space.row_difference_balanced(r0.view(), short.view()),
            Err(Error::DimensionMismatch { .. })
        ));
        let bad = array![0u32, 5, 1];
        assert!(matches!(
            space.row_difference_balanced(r0.view(), bad.view()),
            Err(Error::ElementOutOfRange { .. })
        ));
    }

    #[test]
    fn test_row_difference_equal_counts_not_fixed_target() {
        let space = SubsetPairs::new(2, 3).unwrap();
        // Length 6: three zeros and three ones
        let r0 = array![0u32, 1, 0, 1, 1, 0];
        let r1 = array![0u32, 0, 0, 0, 0, 0];
        assert!(space.row_difference_balanced(r0.view(), r1.view()).unwrap());
        // Odd length over Z_2 can never split evenly
        let r2 = array![1u32, 0, 1];
        let r3 = array![0u32, 0, 0];
        assert!(!space.row_difference_balanced(r2.view(), r3.view()).unwrap());
    }

    #[test]
    fn test_run_test_gf2_cube_size_4() {
        let space = SubsetPairs::new(2, 3).unwrap();
        let report = space.run_test(4).unwrap();

        assert_eq!(report.first_sets, 1);
        assert_eq!(report.second_sets, 35);
        assert_eq!(report.pairs_tested, 35);
        assert_eq!(report.pairs_rejected, 34);
        assert!(!report.stopped_early);

        // {0, e1, e2, e3} with the even-weight vectors {0, e1+e2, e1+e3, e2+e3}.
        // Every row difference of H has two zeros and two ones. A tally indexed
        // by position instead of by value rejects this pair and reports none.
        assert_eq!(report.pairs.len(), 1);
        let pair = &report.pairs[0];
        assert_eq!(pair.first.indices(), &[0, 1, 2, 4]);
        assert_eq!(pair.second.indices(), &[0, 3, 5, 6]);
        assert!(space.rows_balanced(&pair.log_hadamard).unwrap());
    }

    #[test]
    fn test_run_test_gf3_plane_size_3() {
        let space = SubsetPairs::new(3, 2).unwrap();
        let report = space.run_test(3).unwrap();

        assert_eq!(report.first_sets, 1);
        assert_eq!(report.second_sets, 28);
        assert_eq!(report.pairs.len(), 1);
        let pair = &report.pairs[0];
        assert_eq!(pair.first.indices(), &[0, 1, 3]);
        assert_eq!(pair.second.indices(), &[0, 5, 7]);
        assert_eq!(
            pair.log_hadamard,
            array![[0u32, 0, 0], [0, 2, 1], [0, 1, 2]]
        );
    }

    #[test]
    fn test_run_test_no_pairs() {
        let space = SubsetPairs::new(2, 2).unwrap();
        let report = space.run_test(3).unwrap();
        assert_eq!(report.first_sets, 1);
        assert_eq!(report.second_sets, 3);
        assert_eq!(report.pairs_tested, 3);
        assert!(report.pairs.is_empty());

        // No first-type subsets at all
        let report = space.run_test(2).unwrap();
        assert_eq!(report.first_sets, 0);
        assert_eq!(report.pairs_tested, 0);
    }

    #[test]
    fn test_run_test_until_limit() {
        let space = SubsetPairs::new(2, 3).unwrap();
        let report = space.run_test_until(4, Some(0)).unwrap();
        assert!(report.stopped_early);
        assert_eq!(report.pairs_tested, 0);
        assert!(report.pairs.is_empty());

        let report = space.run_test_until(4, Some(1)).unwrap();
        assert_eq!(report.pairs.len(), 1);
    }
}
