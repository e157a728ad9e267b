//! # Fuglede
//!
//! Exhaustive search tools for experiments with Fuglede's conjecture over
//! finite vector spaces.
//!
//! ## Overview
//!
//! The crate has two independent halves:
//!
//! - **Balanced vectors** ([`balanced`]): vectors over Z_p of length `k * p`
//!   in which every residue appears exactly `k` times, the partial
//!   differencing operation between them, and the action digraph it induces.
//! - **Spectral pairs** ([`spectral`]): subsets `E` and `B` of Z_p^d whose
//!   log-Hadamard matrix `E^T B` has pairwise equidistributed row
//!   differences, so that the characters indexed by `B` are orthogonal on `E`.
//!
//! Both rest on modular arithmetic ([`ring`]), matrix routines over Z_p
//! ([`linalg`]) and the residue counting in [`balance`].
//!
//! ## Quick Start
//!
//! ```rust
//! use fuglede::prelude::*;
//!
//! let space = BalancedVectorSpace::new(4, 2).unwrap();
//! let first = space.elements().next().unwrap();
//! assert_eq!(first.as_slice(), &[0, 0, 1, 1]);
//!
//! let graph = space.reduced_digraph(&first);
//! assert_eq!(graph.connected_components().len(), 2);
//!
//! let pairs = SubsetPairs::new(2, 3).unwrap();
//! let report = pairs.run_test(4).unwrap();
//! assert_eq!(report.first_sets, 1);
//! ```
//!
//! ## Logging
//!
//! Enumeration steps and search results are reported through `tracing`.
//! Binaries can call [`telemetry::init_tracing`] to print them.
//!
//! ## Features
//!
//! - `serde`: Enable serialization/deserialization of vectors, subsets,
//!   search configurations and reports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod balance;
pub mod balanced;
pub mod builder;
pub mod error;
pub mod graph;
pub mod linalg;
pub mod ring;
pub mod spectral;
pub mod telemetry;
pub mod utils;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::balance::{is_balanced, is_equidistributed, tally, BalanceReport};
    pub use crate::balanced::{
        ActionGraph, BalancedVector, BalancedVectorSpace, Difference, PairAction,
    };
    pub use crate::builder::{
        BalancedSpaceBuilder, SpectralConfig, SpectralSearch, SpectralSearchBuilder,
    };
    pub use crate::error::{Error, Result};
    pub use crate::graph::Digraph;
    pub use crate::ring::ZnRing;
    pub use crate::spectral::{SpectralPair, SpectralReport, Subset, SubsetPairs};
}

// Re-export commonly used items at crate root
pub use balanced::{BalancedVector, BalancedVectorSpace, Difference};
pub use builder::{BalancedSpaceBuilder, SpectralSearchBuilder};
pub use error::{Error, Result};
pub use spectral::{SpectralReport, SubsetPairs};
