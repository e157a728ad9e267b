//! Balanced vectors over Z_p and the differencing action on them.
//!
//! A balanced vector of size `s = k * p` over Z_p is a length-`s` vector in
//! which each residue `0, 1, ..., p-1` appears exactly `k` times. The set of
//! them is the set of distinct arrangements of the multiset
//! `{0^k, 1^k, ..., (p-1)^k}`, of which there are `s! / (k!)^p`.
//!
//! ## Overview
//!
//! - [`BalancedVectorSpace`]: the collection of balanced vectors of one size
//! - [`BalancedVector`]: a single member of that collection
//! - [`Difference`]: the result of differencing two members, which may fail
//!   to be balanced
//! - [`ActionGraph`]: the digraph `x → v - x` of the action of a vector `v`
//!
//! ## Example
//!
//! ```
//! use fuglede::balanced::{BalancedVectorSpace, Difference};
//!
//! let space = BalancedVectorSpace::new(4, 2).unwrap();
//! assert_eq!(space.elements().count(), 6);
//!
//! let v = space.vector(&[0, 0, 1, 1]).unwrap();
//! let x = space.vector(&[0, 1, 0, 1]).unwrap();
//! assert_eq!(space.subtract(&v, &x), Difference::from(space.vector(&[0, 1, 1, 0]).unwrap()));
//! assert_eq!(space.subtract(&v, &v), Difference::Unbalanced);
//! ```

mod vector;

pub use vector::{BalancedVector, Difference};

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::balance;
use crate::error::{Error, Result};
use crate::graph::Digraph;
use crate::ring::ZnRing;
use crate::utils::{multinomial, multiset_permutations};

/// Directed graph of a differencing action.
///
/// Nodes are differences so that the unbalanced outcome can appear as a sink.
pub type ActionGraph = Digraph<Difference>;

/// Outcome of tracing the orbit of one vector under the action of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairAction {
    /// The first difference is already unbalanced.
    Degenerate,
    /// The intermediate vectors visited before returning to the start.
    Orbit(Vec<BalancedVector>),
}

/// The collection of balanced vectors of a fixed size over Z_p.
#[derive(Debug, Clone)]
pub struct BalancedVectorSpace {
    size: usize,
    quotient: usize,
    ring: ZnRing,
    max_orbit_steps: usize,
}

impl BalancedVectorSpace {
    /// Create the space of balanced vectors of length `size` over Z_`modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if `modulus < 2`, `size` is zero,
    /// or `size` is not a multiple of `modulus`.
    pub fn new(size: usize, modulus: u32) -> Result<Self> {
        let ring = ZnRing::new(modulus)?;
        if size == 0 {
            return Err(Error::invalid_configuration("size must be at least 1"));
        }
        if size % modulus as usize != 0 {
            return Err(Error::invalid_configuration(format!(
                "size {size} is not a multiple of modulus {modulus}"
            )));
        }

        let quotient = size / modulus as usize;
        let max_orbit_steps = multinomial(&vec![quotient; modulus as usize])
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(usize::MAX);

        debug!(size, modulus, quotient, "balanced vector space ready");
        Ok(Self {
            size,
            quotient,
            ring,
            max_orbit_steps,
        })
    }

    /// Bound the number of steps [`pair_action`](Self::pair_action) may take.
    ///
    /// Defaults to the number of balanced vectors.
    #[must_use]
    pub fn with_max_orbit_steps(mut self, steps: usize) -> Self {
        self.max_orbit_steps = steps;
        self
    }

    /// Length of the vectors.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The modulus p.
    #[must_use]
    pub fn modulus(&self) -> u32 {
        self.ring.modulus()
    }

    /// How many times each residue appears, `size / modulus`.
    #[must_use]
    pub fn quotient(&self) -> usize {
        self.quotient
    }

    /// The underlying ring.
    #[must_use]
    pub fn ring(&self) -> ZnRing {
        self.ring
    }

    /// The orbit step bound in use.
    #[must_use]
    pub fn max_orbit_steps(&self) -> usize {
        self.max_orbit_steps
    }

    /// Number of balanced vectors, `size! / (quotient!)^modulus`.
    ///
    /// Returns `None` if it does not fit in a `u64`.
    #[must_use]
    pub fn cardinality(&self) -> Option<u64> {
        multinomial(&vec![self.quotient; self.modulus() as usize])
    }

    /// Check raw components and wrap them as a balanced vector of this space.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if the length is wrong or the vector is not
    ///   balanced.
    /// - [`Error::ElementOutOfRange`] if a component is not a residue.
    pub fn vector(&self, components: &[u32]) -> Result<BalancedVector> {
        if !balance::is_balanced(components, self.modulus(), self.quotient)? {
            return Err(Error::invalid_input(format!(
                "{components:?} is not balanced over Z_{}",
                self.modulus()
            )));
        }
        Ok(BalancedVector::new_unchecked(components.to_vec()))
    }

    /// Every balanced vector of this space, each exactly once.
    ///
    /// Vectors come out in lexicographic order. Each call starts a fresh
    /// enumeration.
    pub fn elements(&self) -> impl Iterator<Item = BalancedVector> {
        let multiset: Vec<u32> = self
            .ring
            .elements()
            .flat_map(|value| std::iter::repeat(value).take(self.quotient))
            .collect();
        multiset_permutations(&multiset).map(BalancedVector::new_unchecked)
    }

    /// The balanced vectors whose first component is zero.
    pub fn reduced_elements(&self) -> impl Iterator<Item = BalancedVector> {
        // Lexicographic order puts every zero-led vector first
        let zero = self.ring.zero();
        self.elements().take_while(move |v| v.first() == Some(zero))
    }

    /// Component-wise difference `lhs - rhs`, if it is balanced.
    #[must_use]
    pub fn subtract(&self, lhs: &BalancedVector, rhs: &BalancedVector) -> Difference {
        let components: Vec<u32> = lhs
            .as_slice()
            .iter()
            .zip(rhs.as_slice())
            .map(|(&a, &b)| self.ring.sub(a, b))
            .collect();

        // Vectors from a different space fail the length check
        match balance::is_balanced(&components, self.modulus(), self.quotient) {
            Ok(true) => Difference::Balanced(BalancedVector::new_unchecked(components)),
            _ => Difference::Unbalanced,
        }
    }

    /// Difference of two differences; `Unbalanced` on either side absorbs.
    #[must_use]
    pub fn difference(&self, lhs: &Difference, rhs: &Difference) -> Difference {
        match (lhs, rhs) {
            (Difference::Balanced(a), Difference::Balanced(b)) => self.subtract(a, b),
            _ => Difference::Unbalanced,
        }
    }

    /// Pairs `(x, vec - x)` for every balanced vector `x`.
    pub fn action<'a>(
        &'a self,
        vec: &'a BalancedVector,
    ) -> impl Iterator<Item = (BalancedVector, Difference)> + 'a {
        self.elements().map(move |x| {
            let image = self.subtract(vec, &x);
            (x, image)
        })
    }

    /// Pairs `(x, vec - x)` for every reduced balanced vector `x`.
    pub fn reduced_action<'a>(
        &'a self,
        vec: &'a BalancedVector,
    ) -> impl Iterator<Item = (BalancedVector, Difference)> + 'a {
        self.reduced_elements().map(move |x| {
            let image = self.subtract(vec, &x);
            (x, image)
        })
    }

    /// The digraph with an edge `x → vec - x` for every reduced vector `x`.
    #[must_use]
    pub fn reduced_digraph(&self, vec: &BalancedVector) -> ActionGraph {
        self.generators_digraph(std::iter::once(vec))
    }

    /// One digraph holding the reduced actions of several vectors.
    #[must_use]
    pub fn generators_digraph<'a>(
        &self,
        generators: impl IntoIterator<Item = &'a BalancedVector>,
    ) -> ActionGraph {
        let mut graph = ActionGraph::new();
        for generator in generators {
            for (x, image) in self.reduced_action(generator) {
                graph.add_edge(Difference::Balanced(x), image);
            }
        }
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "action digraph built"
        );
        graph
    }

    /// Trace `vec1` under repeated differencing by `vec0`.
    ///
    /// Starting from `vec0 - vec1`, the map `x ↦ vec0 - x` is applied until it
    /// returns to `vec1`; the vectors visited on the way are returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCycleFound`] if the trace revisits a vector, reaches an
    /// unbalanced difference, or exceeds the orbit step bound before
    /// returning to `vec1`.
    pub fn pair_action(&self, vec0: &BalancedVector, vec1: &BalancedVector) -> Result<PairAction> {
        let mut current = self.subtract(vec0, vec1);
        if current.is_unbalanced() {
            debug!(%vec0, %vec1, "degenerate action");
            return Ok(PairAction::Degenerate);
        }

        let mut orbit = Vec::new();
        let mut seen = HashSet::new();
        while let Difference::Balanced(v) = current {
            if v == *vec1 {
                return Ok(PairAction::Orbit(orbit));
            }
            if orbit.len() >= self.max_orbit_steps || !seen.insert(v.clone()) {
                break;
            }
            trace!(step = orbit.len(), vector = %v, "orbit step");
            current = self.subtract(vec0, &v);
            orbit.push(v);
        }

        Err(Error::NoCycleFound { steps: orbit.len() })
    }
}
