//! Subsets of Z_p^d and the search for spectral pairs.
//!
//! Fuglede's conjecture relates sets that tile by translation to sets that
//! admit an orthogonal basis of characters (spectral sets). In Z_p^d a pair
//! `(E, B)` of equal-size subsets is a spectral pair when every two distinct
//! rows of the log-Hadamard matrix `E^T B` differ by a vector in which every
//! residue appears equally often.
//!
//! ## Overview
//!
//! - [`SubsetPairs`]: the space Z_p^d with its fixed point order and the
//!   subset enumerators
//! - [`Subset`]: a canonical subset, stored column-wise as a `d × size` matrix
//! - [`SpectralPair`] and [`SpectralReport`]: results of
//!   [`SubsetPairs::run_test`]
//!
//! ## Subset categories
//!
//! | Category    | Condition |
//! |-------------|-----------|
//! | canonical   | point indices strictly increasing |
//! | second type | canonical, first point is zero |
//! | first type  | second type, matrix already in RREF, rank `min(size, d)` |
//!
//! Only first-type × second-type pairs are tested, so the search can only
//! find counterexamples of that shape.
//!
//! ## Example
//!
//! ```
//! use fuglede::spectral::SubsetPairs;
//!
//! let space = SubsetPairs::new(2, 3).unwrap();
//! assert_eq!(space.subsets(4).count(), 70);   // C(8, 4)
//! assert_eq!(space.second_sets(4).count(), 35);
//!
//! let report = space.run_test(4).unwrap();
//! assert_eq!(report.pairs.len(), 1);
//! ```

mod hadamard;

pub use hadamard::{SpectralPair, SpectralReport};

use std::fmt;

use ndarray::{Array1, Array2, ArrayView1};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::linalg;
use crate::ring::ZnRing;
use crate::utils::combinations;

/// A set of distinct points of Z_p^d in canonical (increasing) order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subset {
    indices: Vec<usize>,
    /// Shape `(dimension, size)`; column `j` is point `indices[j]`.
    matrix: Array2<u32>,
}

impl Subset {
    /// Positions of the points in the space's point order.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The `dimension × size` matrix whose columns are the points.
    #[must_use]
    pub fn matrix(&self) -> &Array2<u32> {
        &self.matrix
    }

    /// Number of points.
    #[must_use]
    pub fn size(&self) -> usize {
        self.indices.len()
    }

    /// The `j`-th point.
    ///
    /// # Panics
    ///
    /// Panics if `j >= self.size()`.
    #[must_use]
    pub fn point(&self, j: usize) -> ArrayView1<'_, u32> {
        self.matrix.column(j)
    }

    /// Whether the point indices are strictly increasing.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.indices.windows(2).all(|w| w[0] < w[1])
    }

    /// Whether the first point is the zero point of `ring`.
    #[must_use]
    pub fn starts_at_zero(&self, ring: ZnRing) -> bool {
        self.size() > 0 && self.point(0).iter().all(|&x| x == ring.zero())
    }
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.matrix.rows() {
            let row_str: Vec<String> = row.iter().map(ToString::to_string).collect();
            writeln!(f, "[{}]", row_str.join(" "))?;
        }
        Ok(())
    }
}

/// The space Z_p^d together with everything needed to enumerate its subsets.
#[derive(Debug, Clone)]
pub struct SubsetPairs {
    ring: ZnRing,
    dimension: usize,
    points: Vec<Array1<u32>>,
}

impl SubsetPairs {
    /// Create the space Z_`modulus`^`dimension`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `modulus` is not prime, the
    /// dimension is zero, or the space has more points than fit in memory
    /// addressing.
    pub fn new(modulus: u32, dimension: usize) -> Result<Self> {
        let ring = ZnRing::field(modulus)?;
        if dimension == 0 {
            return Err(Error::invalid_configuration("dimension must be at least 1"));
        }
        let exponent = u32::try_from(dimension)
            .map_err(|_| Error::invalid_configuration("dimension is too large"))?;
        (modulus as usize).checked_pow(exponent).ok_or_else(|| {
            Error::invalid_configuration(format!("{modulus}^{dimension} points overflow usize"))
        })?;

        let points = linalg::points(ring, dimension);
        debug!(modulus, dimension, points = points.len(), "subset space ready");
        Ok(Self {
            ring,
            dimension,
            points,
        })
    }

    /// The modulus p.
    #[must_use]
    pub fn modulus(&self) -> u32 {
        self.ring.modulus()
    }

    /// The dimension d.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The underlying field.
    #[must_use]
    pub fn ring(&self) -> ZnRing {
        self.ring
    }

    /// All `p^d` points in the fixed point order.
    #[must_use]
    pub fn points(&self) -> &[Array1<u32>] {
        &self.points
    }

    /// The standard basis `e_1, ..., e_d`.
    #[must_use]
    pub fn basis(&self) -> Vec<Array1<u32>> {
        (0..self.dimension)
            .map(|k| {
                let mut e = Array1::zeros(self.dimension);
                e[k] = 1;
                e
            })
            .collect()
    }

    /// Position of `point` in the point order.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if the point has the wrong length.
    /// - [`Error::ElementOutOfRange`] if a coordinate is not a residue.
    pub fn point_index(&self, point: ArrayView1<'_, u32>) -> Result<usize> {
        if point.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: format!("{} coordinates", self.dimension),
                actual: format!("{} coordinates", point.len()),
            });
        }
        linalg::point_index(self.ring, point)
    }

    /// Build the subset made of the points at `indices`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if an index is out of range or the
    /// indices are not strictly increasing.
    pub fn subset(&self, indices: &[usize]) -> Result<Subset> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.points.len()) {
            return Err(Error::invalid_input(format!(
                "point index {bad} is out of range for {} points",
                self.points.len()
            )));
        }
        if !indices.windows(2).all(|w| w[0] < w[1]) {
            return Err(Error::invalid_input(format!(
                "point indices {indices:?} are not strictly increasing"
            )));
        }
        Ok(self.subset_unchecked(indices.to_vec()))
    }

    fn subset_unchecked(&self, indices: Vec<usize>) -> Subset {
        let mut matrix = Array2::zeros((self.dimension, indices.len()));
        for (j, &idx) in indices.iter().enumerate() {
            matrix.column_mut(j).assign(&self.points[idx]);
        }
        Subset { indices, matrix }
    }

    /// Every canonical subset of `size` points.
    ///
    /// Subsets are listed in lexicographic order of their point indices, one
    /// per unordered set of points. Each call starts a fresh enumeration.
    pub fn subsets(&self, size: usize) -> impl Iterator<Item = Subset> + '_ {
        combinations(self.points.len(), size).map(move |indices| self.subset_unchecked(indices))
    }

    /// Whether `subset` is of the first type: it starts at zero, its matrix is
    /// in reduced row echelon form and has rank `min(size, dimension)`.
    ///
    /// # Errors
    ///
    /// Propagates row-reduction errors; none occur over a prime field.
    pub fn is_first_type(&self, subset: &Subset) -> Result<bool> {
        if !subset.starts_at_zero(self.ring) {
            return Ok(false);
        }
        let reduced = linalg::rref(self.ring, subset.matrix())?;
        Ok(reduced.matrix == *subset.matrix()
            && reduced.rank == subset.size().min(self.dimension))
    }

    /// Whether `subset` is of the second type: it starts at zero.
    #[must_use]
    pub fn is_second_type(&self, subset: &Subset) -> bool {
        subset.starts_at_zero(self.ring)
    }

    /// Canonical subsets of the first type.
    pub fn first_sets(&self, size: usize) -> impl Iterator<Item = Result<Subset>> + '_ {
        self.subsets(size)
            .filter_map(move |subset| match self.is_first_type(&subset) {
                Ok(true) => Some(Ok(subset)),
                Ok(false) => None,
                Err(err) => Some(Err(err)),
            })
    }

    /// Canonical subsets of the second type.
    pub fn second_sets(&self, size: usize) -> impl Iterator<Item = Subset> + '_ {
        self.subsets(size)
            .filter(move |subset| self.is_second_type(subset))
    }
}
