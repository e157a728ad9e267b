//! Builders for the balanced vector space and the spectral pair search.
//!
//! Both builders collect their parameters as `Option`s and validate them all
//! in `build()`, so a half-configured builder never produces a value.
//!
//! # Example
//!
//! ```
//! use fuglede::{BalancedSpaceBuilder, SpectralSearchBuilder};
//!
//! let space = BalancedSpaceBuilder::new()
//!     .size(4)
//!     .modulus(2)
//!     .build()
//!     .unwrap();
//! assert_eq!(space.elements().count(), 6);
//!
//! let search = SpectralSearchBuilder::new()
//!     .modulus(3)
//!     .dimension(2)
//!     .size(3)
//!     .build()
//!     .unwrap();
//! let report = search.run().unwrap();
//! assert_eq!(report.pairs.len(), 1);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::balanced::BalancedVectorSpace;
use crate::error::{Error, Result};
use crate::spectral::{SpectralReport, SubsetPairs};

/// Builder for [`BalancedVectorSpace`].
#[derive(Debug, Clone, Default)]
pub struct BalancedSpaceBuilder {
    size: Option<usize>,
    modulus: Option<u32>,
    max_orbit_steps: Option<usize>,
}

impl BalancedSpaceBuilder {
    /// Create a new builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the vector length.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the modulus of the coefficient ring.
    #[must_use]
    pub fn modulus(mut self, modulus: u32) -> Self {
        self.modulus = Some(modulus);
        self
    }

    /// Bound the number of steps an orbit trace may take.
    ///
    /// Defaults to the number of balanced vectors in the space.
    #[must_use]
    pub fn max_orbit_steps(mut self, steps: usize) -> Self {
        self.max_orbit_steps = Some(steps);
        self
    }

    /// Build the space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `size` or `modulus` is
    /// missing, if `max_orbit_steps` is zero, or if
    /// [`BalancedVectorSpace::new`] rejects the pair.
    pub fn build(self) -> Result<BalancedVectorSpace> {
        let size = self
            .size
            .ok_or_else(|| Error::invalid_configuration("size must be specified"))?;
        let modulus = self
            .modulus
            .ok_or_else(|| Error::invalid_configuration("modulus must be specified"))?;

        let space = BalancedVectorSpace::new(size, modulus)?;
        match self.max_orbit_steps {
            Some(0) => Err(Error::invalid_configuration(
                "max_orbit_steps must be at least 1",
            )),
            Some(steps) => Ok(space.with_max_orbit_steps(steps)),
            None => Ok(space),
        }
    }
}

/// Validated parameters of a spectral pair search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpectralConfig {
    /// Prime modulus p.
    pub modulus: u32,
    /// Dimension d of Z_p^d.
    pub dimension: usize,
    /// Number of points in each subset.
    pub size: usize,
    /// Stop after this many passing pairs.
    pub max_reports: Option<usize>,
}

/// A configured spectral pair search, ready to run.
#[derive(Debug, Clone)]
pub struct SpectralSearch {
    config: SpectralConfig,
    pairs: SubsetPairs,
}

impl SpectralSearch {
    /// The parameters this search was built with.
    #[must_use]
    pub fn config(&self) -> &SpectralConfig {
        &self.config
    }

    /// The subset space the search runs over.
    #[must_use]
    pub fn space(&self) -> &SubsetPairs {
        &self.pairs
    }

    /// Run the search.
    ///
    /// # Errors
    ///
    /// See [`SubsetPairs::run_test`].
    pub fn run(&self) -> Result<SpectralReport> {
        self.pairs
            .run_test_until(self.config.size, self.config.max_reports)
    }
}

impl TryFrom<SpectralConfig> for SpectralSearch {
    type Error = Error;

    fn try_from(config: SpectralConfig) -> Result<Self> {
        if config.size == 0 {
            return Err(Error::invalid_configuration("size must be at least 1"));
        }
        let pairs = SubsetPairs::new(config.modulus, config.dimension)?;
        if config.size > pairs.points().len() {
            return Err(Error::invalid_configuration(format!(
                "size {} exceeds the {} points of the space",
                config.size,
                pairs.points().len()
            )));
        }
        Ok(Self { config, pairs })
    }
}

/// Builder for [`SpectralSearch`].
#[derive(Debug, Clone, Default)]
pub struct SpectralSearchBuilder {
    modulus: Option<u32>,
    dimension: Option<usize>,
    size: Option<usize>,
    max_reports: Option<usize>,
}

impl SpectralSearchBuilder {
    /// Create a new builder with nothing set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prime modulus.
    #[must_use]
    pub fn modulus(mut self, modulus: u32) -> Self {
        self.modulus = Some(modulus);
        self
    }

    /// Set the dimension of the space.
    #[must_use]
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Set the number of points in each subset.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Stop the search after this many passing pairs.
    #[must_use]
    pub fn max_reports(mut self, max_reports: usize) -> Self {
        self.max_reports = Some(max_reports);
        self
    }

    /// The configuration the builder would validate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a required parameter is
    /// missing.
    pub fn config(&self) -> Result<SpectralConfig> {
        Ok(SpectralConfig {
            modulus: self
                .modulus
                .ok_or_else(|| Error::invalid_configuration("modulus must be specified"))?,
            dimension: self
                .dimension
                .ok_or_else(|| Error::invalid_configuration("dimension must be specified"))?,
            size: self
                .size
                .ok_or_else(|| Error::invalid_configuration("size must be specified"))?,
            max_reports: self.max_reports,
        })
    }

    /// Build the search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a parameter is missing, the
    /// modulus is not prime, the dimension or size is zero, or the size
    /// exceeds the number of points.
    pub fn build(self) -> Result<SpectralSearch> {
        SpectralSearch::try_from(self.config()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_builder() {
        let space = BalancedSpaceBuilder::new()
            .size(6)
            .modulus(3)
            .build()
            .unwrap();
        assert_eq!(space.quotient(), 2);
        assert_eq!(space.max_orbit_steps(), 90);

        let bounded = BalancedSpaceBuilder::new()
            .size(4)
            .modulus(2)
            .max_orbit_steps(3)
            .build()
            .unwrap();
        assert_eq!(bounded.max_orbit_steps(), 3);
    }

    #[test]
    fn test_balanced_builder_missing_params() {
        assert!(matches!(
            BalancedSpaceBuilder::new().modulus(2).build(),
            Err(Error::InvalidConfiguration { .. })
        ));
        assert!(BalancedSpaceBuilder::new().size(4).build().is_err());
        assert!(BalancedSpaceBuilder::new()
            .size(4)
            .modulus(2)
            .max_orbit_steps(0)
            .build()
            .is_err());
        assert!(BalancedSpaceBuilder::new()
            .size(5)
            .modulus(2)
            .build()
            .is_err());
    }

    #[test]
    fn test_spectral_builder() {
        let search = SpectralSearchBuilder::new()
            .modulus(2)
            .dimension(3)
            .size(4)
            .build()
            .unwrap();
        assert_eq!(
            *search.config(),
            SpectralConfig {
                modulus: 2,
                dimension: 3,
                size: 4,
                max_reports: None,
            }
        );
        assert_eq!(search.space().points().len(), 8);

        let report = search.run().unwrap();
        assert_eq!(report.size, 4);
        assert_eq!(report.pairs.len(), 1);
    }

    #[test]
    fn test_spectral_builder_max_reports() {
        let search = SpectralSearchBuilder::new()
            .modulus(2)
            .dimension(3)
            .size(4)
            .max_reports(0)
            .build()
            .unwrap();
        let report = search.run().unwrap();
        assert!(report.stopped_early);
        assert!(report.pairs.is_empty());
    }

    #[test]
    fn test_spectral_builder_validation() {
        assert!(SpectralSearchBuilder::new().dimension(2).size(2).build().is_err());
        assert!(SpectralSearchBuilder::new()
            .modulus(4)
            .dimension(2)
            .size(2)
            .build()
            .is_err());
        assert!(SpectralSearchBuilder::new()
            .modulus(2)
            .dimension(2)
            .size(0)
            .build()
            .is_err());
        assert!(matches!(
            SpectralSearchBuilder::new()
                .modulus(2)
                .dimension(2)
                .size(5)
                .build(),
            Err(Error::InvalidConfiguration { .. })
        ));
    }
}
