//! Error types for the fuglede library.
//!
//! All fallible operations return [`Result`], whose error type is the single
//! [`Error`] enum below. Degenerate differences are *not* errors: they are
//! reported through [`Difference::Unbalanced`](crate::balanced::Difference).

use thiserror::Error;

/// The main error type for the fuglede library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // ============ Construction Errors ============
    /// Parameters that cannot describe a valid space or search.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of what is invalid.
        message: String,
    },

    // ============ Input Errors ============
    /// A sequence or vector handed to an operation does not fit its contract.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// Description of what is invalid.
        message: String,
    },

    /// A value is not a residue of the modulus in use.
    #[error("element {value} is out of range for Z_{modulus}, must be in 0..{modulus}")]
    ElementOutOfRange {
        /// The invalid element value.
        value: u32,
        /// The modulus of the ring.
        modulus: u32,
    },

    // ============ Linear Algebra Errors ============
    /// Matrix shapes are incompatible.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimension description.
        expected: String,
        /// Actual dimension description.
        actual: String,
    },

    /// A pivot has no multiplicative inverse in the ring.
    #[error("{value} has no inverse in Z_{modulus}")]
    NotInvertible {
        /// The value that could not be inverted.
        value: u32,
        /// The modulus of the ring.
        modulus: u32,
    },

    // ============ Orbit Errors ============
    /// An orbit trace did not close on its starting vector.
    #[error("orbit did not return to its starting vector after {steps} steps")]
    NoCycleFound {
        /// Number of differencing steps taken before giving up.
        steps: usize,
    },
}

/// A specialized `Result` type for fuglede operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    /// Create a new `InvalidConfiguration` error.
    #[must_use]
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Create a new `InvalidInput` error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_configuration("size 5 is not a multiple of modulus 2");
        assert!(err.to_string().contains("invalid configuration"));
        assert!(err.to_string().contains("size 5"));

        let err = Error::ElementOutOfRange {
            value: 3,
            modulus: 2,
        };
        assert!(err.to_string().contains("Z_2"));
        assert!(err.to_string().contains('3'));

        let err = Error::NoCycleFound { steps: 12 };
        assert!(err.to_string().contains("12 steps"));
    }

    #[test]
    fn test_error_equality() {
        let err1 = Error::invalid_input("length 3, expected 4");
        let err2 = Error::invalid_input("length 3, expected 4");
        let err3 = Error::invalid_input("length 5, expected 4");

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
