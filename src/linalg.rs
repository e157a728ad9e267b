//! Matrix arithmetic over Z_n on top of `ndarray`.
//!
//! Matrices are `Array2<u32>` holding canonical residues; every function takes
//! the [`ZnRing`] that gives them meaning. Row reduction needs inverses for its
//! pivots, so it is only guaranteed to succeed over a field.
//!
//! Points of the space Z_p^d are enumerated in a fixed order by [`points`]:
//! point number `i` has coordinate `k` equal to digit `k` of `i` written in
//! base p, so the first coordinate varies fastest. The zero point is always
//! first and the standard basis vector e_k sits at index p^k.

use itertools::Itertools;
use ndarray::{s, Array1, Array2, ArrayView1, Axis, Zip};

use crate::error::{Error, Result};
use crate::ring::ZnRing;

/// Enumerate every point of `ring^dimension` in the fixed point order.
///
/// # Examples
///
/// ```
/// use fuglede::linalg::points;
/// use fuglede::ring::ZnRing;
///
/// let pts = points(ZnRing::new(2).unwrap(), 2);
/// let coords: Vec<Vec<u32>> = pts.iter().map(|p| p.to_vec()).collect();
/// assert_eq!(coords, vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
/// ```
#[must_use]
pub fn points(ring: ZnRing, dimension: usize) -> Vec<Array1<u32>> {
    if dimension == 0 {
        return vec![Array1::zeros(0)];
    }
    (0..dimension)
        .map(|_| ring.elements())
        .multi_cartesian_product()
        .map(|mut coords| {
            // multi_cartesian_product varies its last factor fastest
            coords.reverse();
            Array1::from(coords)
        })
        .collect()
}

/// Position of `point` in the order produced by [`points`].
///
/// # Errors
///
/// Returns [`Error::ElementOutOfRange`] if a coordinate is not a residue.
pub fn point_index(ring: ZnRing, point: ArrayView1<'_, u32>) -> Result<usize> {
    let p = ring.modulus() as usize;
    point.iter().rev().try_fold(0usize, |acc, &coord| {
        Ok(acc * p + ring.check(coord)? as usize)
    })
}

/// Matrix transpose.
#[must_use]
pub fn transpose(a: &Array2<u32>) -> Array2<u32> {
    a.t().to_owned()
}

/// Matrix product `a · b` over the ring.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if `a.ncols() != b.nrows()`.
pub fn mat_mul(ring: ZnRing, a: &Array2<u32>, b: &Array2<u32>) -> Result<Array2<u32>> {
    if a.ncols() != b.nrows() {
        return Err(Error::DimensionMismatch {
            expected: format!("{} rows on the right", a.ncols()),
            actual: format!("{} rows", b.nrows()),
        });
    }

    let mut product = Array2::zeros((a.nrows(), b.ncols()));
    for ((i, j), entry) in product.indexed_iter_mut() {
        *entry = ring.dot(a.row(i).iter().copied(), b.column(j).iter().copied());
    }
    Ok(product)
}

/// A matrix in reduced row echelon form together with its rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReduction {
    /// The reduced row echelon form.
    pub matrix: Array2<u32>,
    /// Number of non-zero rows of `matrix`.
    pub rank: usize,
    /// Column of the leading one in each non-zero row.
    pub pivots: Vec<usize>,
}

/// Gauss-Jordan elimination to reduced row echelon form.
///
/// Pivots are chosen as the first row with a non-zero entry in the current
/// column, so the result is the unique RREF of `a`.
///
/// # Errors
///
/// Returns [`Error::NotInvertible`] if a pivot has no inverse, which can only
/// happen when the ring is not a field.
pub fn rref(ring: ZnRing, a: &Array2<u32>) -> Result<RowReduction> {
    let mut m = a.clone();
    let (rows, cols) = m.dim();
    let mut pivots = Vec::new();
    let mut rank = 0;

    for col in 0..cols {
        if rank == rows {
            break;
        }
        let Some(offset) = m.slice(s![rank.., col]).iter().position(|&x| x != 0) else {
            continue;
        };
        let pivot_row = rank + offset;

        if pivot_row != rank {
            let (mut above, mut below) = m.view_mut().split_at(Axis(0), pivot_row);
            Zip::from(above.row_mut(rank))
                .and(below.row_mut(0))
                .for_each(std::mem::swap);
        }

        let pivot = m[[rank, col]];
        let inverse = ring.inv(pivot).ok_or(Error::NotInvertible {
            value: pivot,
            modulus: ring.modulus(),
        })?;
        m.row_mut(rank).mapv_inplace(|x| ring.mul(x, inverse));

        let pivot_values = m.row(rank).to_owned();
        for row in 0..rows {
            let factor = m[[row, col]];
            if row == rank || factor == 0 {
                continue;
            }
            Zip::from(m.row_mut(row))
                .and(&pivot_values)
                .for_each(|x, &p| *x = ring.sub(*x, ring.mul(factor, p)));
        }

        pivots.push(col);
        rank += 1;
    }

    Ok(RowReduction {
        matrix: m,
        rank,
        pivots,
    })
}

/// Rank of `a` over the ring.
///
/// # Errors
///
/// See [`rref`].
pub fn rank(ring: ZnRing, a: &Array2<u32>) -> Result<usize> {
    Ok(rref(ring, a)?.rank)
}

/// Whether `a` is already in reduced row echelon form.
///
/// # Errors
///
/// See [`rref`].
pub fn is_rref(ring: ZnRing, a: &Array2<u32>) -> Result<bool> {
    Ok(rref(ring, a)?.matrix == *a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_points_order() {
        let z3 = ZnRing::new(3).unwrap();
        let pts = points(z3, 2);
        assert_eq!(pts.len(), 9);
        assert_eq!(pts[0], array![0u32, 0]);
        assert_eq!(pts[1], array![1u32, 0]);
        assert_eq!(pts[3], array![0u32, 1]);
        assert_eq!(pts[8], array![2u32, 2]);

        for (i, p) in pts.iter().enumerate() {
            assert_eq!(point_index(z3, p.view()).unwrap(), i);
        }
    }

    #[test]
    fn test_basis_positions() {
        let z2 = ZnRing::new(2).unwrap();
        let pts = points(z2, 3);
        assert_eq!(pts[1], array![1u32, 0, 0]);
        assert_eq!(pts[2], array![0u32, 1, 0]);
        assert_eq!(pts[4], array![0u32, 0, 1]);
    }

    #[test]
    fn test_mat_mul() {
        let z5 = ZnRing::new(5).unwrap();
        let a = array![[1, 2], [3, 4]];
        let b = array![[4, 0], [1, 1]];
        // [[1*4+2*1, 2], [3*4+4*1, 4]] = [[6, 2], [16, 4]] ≡ [[1, 2], [1, 4]]
        assert_eq!(mat_mul(z5, &a, &b).unwrap(), array![[1u32, 2], [1, 4]]);

        let c = array![[1, 2, 3]];
        assert!(matches!(
            mat_mul(z5, &a, &c),
            Err(Error::DimensionMismatch { .. })
        ));
        assert_eq!(transpose(&c), array![[1u32], [2], [3]]);
    }

    #[test]
    fn test_rref_gf2() {
        let z2 = ZnRing::new(2).unwrap();
        let a = array![[0, 1, 1, 0], [0, 1, 0, 1], [0, 0, 1, 1]];
        let reduced = rref(z2, &a).unwrap();
        assert_eq!(reduced.matrix, array![[0u32, 1, 0, 1], [0, 0, 1, 1], [0, 0, 0, 0]]);
        assert_eq!(reduced.rank, 2);
        assert_eq!(reduced.pivots, vec![1, 2]);
        assert!(!is_rref(z2, &a).unwrap());
        assert!(is_rref(z2, &reduced.matrix).unwrap());
    }

    #[test]
    fn test_rref_gf3() {
        let z3 = ZnRing::new(3).unwrap();
        let a = array![[2, 1], [1, 2]];
        // Row 2 = 2 * row 1 over GF(3), so the rank is 1
        let reduced = rref(z3, &a).unwrap();
        assert_eq!(reduced.matrix, array![[1u32, 2], [0, 0]]);
        assert_eq!(rank(z3, &a).unwrap(), 1);

        let identity = array![[0, 1, 0], [0, 0, 1]];
        assert!(is_rref(z3, &identity).unwrap());
        assert_eq!(rank(z3, &identity).unwrap(), 2);
    }

    #[test]
    fn test_rref_requires_units() {
        let z4 = ZnRing::new(4).unwrap();
        let a = array![[2, 1]];
        assert_eq!(
            rref(z4, &a),
            Err(Error::NotInvertible {
                value: 2,
                modulus: 4
            })
        );
    }
}
