//! The ring of residues Z_n.
//!
//! Every vector and matrix in this crate holds plain `u32` residues; [`ZnRing`]
//! carries the modulus and performs the arithmetic on them, the same way a
//! table-driven field works on raw integer representations. When the modulus
//! is prime the ring is the field GF(p) and [`ZnRing::inv`] succeeds for every
//! non-zero element.
//!
//! ## Example
//!
//! ```
//! use fuglede::ring::ZnRing;
//!
//! let z7 = ZnRing::new(7).unwrap();
//! assert_eq!(z7.add(3, 5), 1);     // 3 + 5 = 8 ≡ 1 (mod 7)
//! assert_eq!(z7.sub(3, 5), 5);     // 3 - 5 = -2 ≡ 5 (mod 7)
//! assert_eq!(z7.inv(3), Some(5));  // 3 * 5 = 15 ≡ 1 (mod 7)
//! ```

use std::fmt;
use std::ops::Range;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::utils::is_prime;

/// The ring Z_n of integers modulo `n`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZnRing {
    modulus: u32,
}

impl ZnRing {
    /// Create the ring of residues modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `modulus < 2`.
    pub fn new(modulus: u32) -> Result<Self> {
        if modulus < 2 {
            return Err(Error::invalid_configuration(format!(
                "modulus must be at least 2, got {modulus}"
            )));
        }
        Ok(Self { modulus })
    }

    /// Create the prime field GF(p).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `modulus` is not prime.
    pub fn field(modulus: u32) -> Result<Self> {
        if !is_prime(modulus) {
            return Err(Error::invalid_configuration(format!(
                "modulus {modulus} is not prime, so Z_{modulus} is not a field"
            )));
        }
        Self::new(modulus)
    }

    /// The modulus `n`, which is also the number of elements.
    #[must_use]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Whether every non-zero element is invertible.
    #[must_use]
    pub fn is_field(&self) -> bool {
        is_prime(self.modulus)
    }

    /// The additive identity.
    #[must_use]
    pub fn zero(&self) -> u32 {
        0
    }

    /// Reduce an arbitrary integer into the ring.
    #[must_use]
    pub fn element(&self, value: u32) -> u32 {
        value % self.modulus
    }

    /// Iterate over all elements in increasing order.
    pub fn elements(&self) -> Range<u32> {
        0..self.modulus
    }

    /// Check that `value` is a canonical residue.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ElementOutOfRange`] if `value >= modulus`.
    pub fn check(&self, value: u32) -> Result<u32> {
        if value < self.modulus {
            Ok(value)
        } else {
            Err(Error::ElementOutOfRange {
                value,
                modulus: self.modulus,
            })
        }
    }

    /// Ring addition.
    #[must_use]
    pub fn add(&self, a: u32, b: u32) -> u32 {
        ((u64::from(a) + u64::from(b)) % u64::from(self.modulus)) as u32
    }

    /// Ring subtraction.
    #[must_use]
    pub fn sub(&self, a: u32, b: u32) -> u32 {
        let m = u64::from(self.modulus);
        ((u64::from(a) % m + m - u64::from(b) % m) % m) as u32
    }

    /// Additive inverse.
    #[must_use]
    pub fn neg(&self, a: u32) -> u32 {
        self.sub(0, a)
    }

    /// Ring multiplication.
    #[must_use]
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        ((u64::from(a) * u64::from(b)) % u64::from(self.modulus)) as u32
    }

    /// Multiplicative inverse, if `a` is a unit.
    ///
    /// Uses the extended Euclidean algorithm, so it works in any Z_n.
    #[must_use]
    pub fn inv(&self, a: u32) -> Option<u32> {
        let n = i64::from(self.modulus);
        let (mut r0, mut r1) = (n, i64::from(a) % n);
        let (mut t0, mut t1) = (0i64, 1i64);
        while r1 != 0 {
            let q = r0 / r1;
            (r0, r1) = (r1, r0 - q * r1);
            (t0, t1) = (t1, t0 - q * t1);
        }
        if r0 != 1 {
            return None;
        }
        Some(t0.rem_euclid(n) as u32)
    }

    /// Sum of products `Σ a_i b_i`, the bilinear pairing on Z_n^d.
    #[must_use]
    pub fn dot(&self, a: impl IntoIterator<Item = u32>, b: impl IntoIterator<Item = u32>) -> u32 {
        a.into_iter()
            .zip(b)
            .fold(0, |acc, (x, y)| self.add(acc, self.mul(x, y)))
    }
}

impl fmt::Debug for ZnRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Z_{}", self.modulus)
    }
}

impl fmt::Display for ZnRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_field() {
            write!(f, "GF({})", self.modulus)
        } else {
            write!(f, "Z_{}", self.modulus)
        }
    }
}
