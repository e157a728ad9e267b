//! Balanced vectors and the result of differencing them.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vector over Z_p of length `k * p` in which every residue appears
/// exactly `k` times.
///
/// Values of this type are only handed out by a
/// [`BalancedVectorSpace`](super::BalancedVectorSpace), which checks the
/// balance condition on the way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BalancedVector(Vec<u32>);

impl BalancedVector {
    pub(crate) fn new_unchecked(components: Vec<u32>) -> Self {
        Self(components)
    }

    /// The components of the vector.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// The length of the vector.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The first component, used to pick out reduced vectors.
    #[must_use]
    pub fn first(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// Consume the vector and return its components.
    #[must_use]
    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }
}

impl fmt::Display for BalancedVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl AsRef<[u32]> for BalancedVector {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

/// The outcome of differencing two balanced vectors.
///
/// Subtraction does not preserve balance, so the difference is a partial
/// operation. `Unbalanced` marks the undefined case and absorbs every later
/// difference it takes part in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difference {
    /// The difference is itself a balanced vector.
    Balanced(BalancedVector),
    /// The difference is not balanced.
    Unbalanced,
}

impl Difference {
    /// Whether this is the absorbing `Unbalanced` value.
    #[must_use]
    pub fn is_unbalanced(&self) -> bool {
        matches!(self, Self::Unbalanced)
    }

    /// The balanced vector, if there is one.
    #[must_use]
    pub fn as_vector(&self) -> Option<&BalancedVector> {
        match self {
            Self::Balanced(v) => Some(v),
            Self::Unbalanced => None,
        }
    }

    /// Consume the difference and return the balanced vector, if any.
    #[must_use]
    pub fn into_vector(self) -> Option<BalancedVector> {
        match self {
            Self::Balanced(v) => Some(v),
            Self::Unbalanced => None,
        }
    }
}

impl From<BalancedVector> for Difference {
    fn from(v: BalancedVector) -> Self {
        Self::Balanced(v)
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced(v) => write!(f, "{v}"),
            Self::Unbalanced => write!(f, "unbalanced"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let v = BalancedVector::new_unchecked(vec![0, 1, 1, 0]);
        assert_eq!(v.to_string(), "(0, 1, 1, 0)");
        assert_eq!(Difference::from(v).to_string(), "(0, 1, 1, 0)");
        assert_eq!(Difference::Unbalanced.to_string(), "unbalanced");
    }

    #[test]
    fn test_accessors() {
        let v = BalancedVector::new_unchecked(vec![2, 0, 1]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.first(), Some(2));
        assert_eq!(v.as_slice(), &[2, 0, 1]);

        let d = Difference::from(v.clone());
        assert!(!d.is_unbalanced());
        assert_eq!(d.as_vector(), Some(&v));
        assert_eq!(d.into_vector(), Some(v));
        assert_eq!(Difference::Unbalanced.into_vector(), None);
    }
}
