//! Combinatorial helpers shared by the enumerators.
//!
//! This module provides the counting functions used to size enumerations and
//! the two index-level generators everything else is built on: k-combinations
//! (canonical subsets) and distinct multiset permutations (balanced vectors).

/// Compute binomial coefficient C(n, k) = n! / (k! * (n-k)!)
///
/// Returns `None` if the result would overflow `u64`.
///
/// # Examples
///
/// ```
/// use fuglede::utils::binomial;
///
/// assert_eq!(binomial(5, 2), Some(10));
/// assert_eq!(binomial(8, 4), Some(70));
/// assert_eq!(binomial(3, 5), Some(0)); // k > n
/// ```
#[must_use]
pub fn binomial(n: u64, k: u64) -> Option<u64> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    if k == 0 {
        return Some(1);
    }

    let mut result: u64 = 1;
    for i in 0..k {
        // result * (n - i) is always divisible by (i + 1)
        result = result.checked_mul(n - i)?;
        result /= i + 1;
    }

    Some(result)
}

/// Compute the multinomial coefficient (k_1 + ... + k_m)! / (k_1! ... k_m!).
///
/// This is the number of distinct arrangements of a multiset whose values
/// occur `parts[i]` times. Returns `None` on `u64` overflow.
///
/// # Examples
///
/// ```
/// use fuglede::utils::multinomial;
///
/// assert_eq!(multinomial(&[2, 2]), Some(6));
/// assert_eq!(multinomial(&[2, 2, 2]), Some(90));
/// assert_eq!(multinomial(&[]), Some(1));
/// ```
#[must_use]
pub fn multinomial(parts: &[usize]) -> Option<u64> {
    let mut remaining: u64 = parts.iter().map(|&k| k as u64).sum();
    let mut result: u64 = 1;
    for &k in parts {
        result = result.checked_mul(binomial(remaining, k as u64)?)?;
        remaining -= k as u64;
    }
    Some(result)
}

/// Trial-division primality test.
///
/// Moduli in this crate are tiny, so nothing cleverer is needed.
///
/// ```
/// use fuglede::utils::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(7));
/// assert!(!is_prime(1));
/// assert!(!is_prime(9));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u32;
    while d.saturating_mul(d) <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Generate all k-combinations of indices 0..n in lexicographic order.
///
/// # Examples
///
/// ```
/// use fuglede::utils::combinations;
///
/// let combos: Vec<Vec<usize>> = combinations(4, 2).collect();
/// assert_eq!(combos.len(), 6); // C(4,2) = 6
/// assert_eq!(combos[0], vec![0, 1]);
/// assert_eq!(combos[5], vec![2, 3]);
/// ```
pub fn combinations(n: usize, k: usize) -> impl Iterator<Item = Vec<usize>> {
    CombinationIterator::new(n, k)
}

/// Iterator over k-combinations of 0..n.
struct CombinationIterator {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    finished: bool,
}

impl CombinationIterator {
    fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            k,
            indices: (0..k).collect(),
            finished: k > n,
        }
    }
}

impl Iterator for CombinationIterator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.indices.clone();

        // Advance the rightmost index that still has room, then pack the tail
        let mut i = self.k;
        while i > 0 {
            i -= 1;
            if self.indices[i] < self.n - self.k + i {
                self.indices[i] += 1;
                for j in (i + 1)..self.k {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
                return Some(result);
            }
        }

        self.finished = true;
        Some(result)
    }
}

/// Generate every distinct arrangement of a multiset, in lexicographic order.
///
/// The multiset is given as a slice of values (in any order, with repeats).
/// Each arrangement is produced exactly once, so repeated values never yield
/// duplicate tuples.
///
/// # Examples
///
/// ```
/// use fuglede::utils::multiset_permutations;
///
/// let perms: Vec<Vec<u32>> = multiset_permutations(&[1, 0, 1]).collect();
/// assert_eq!(perms, vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]);
/// ```
pub fn multiset_permutations(values: &[u32]) -> MultisetPermutations {
    let mut current = values.to_vec();
    current.sort_unstable();
    MultisetPermutations {
        current: Some(current),
    }
}

/// Iterator over the distinct permutations of a multiset.
///
/// Created by [`multiset_permutations`]. Walks the arrangements with the
/// classic next-permutation step, which skips equal-value swaps by
/// construction.
#[derive(Debug, Clone)]
pub struct MultisetPermutations {
    current: Option<Vec<u32>>,
}

impl Iterator for MultisetPermutations {
    type Item = Vec<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current.take()?;
        let mut next = result.clone();

        // Longest non-increasing suffix starts after the pivot
        let Some(pivot) = next.windows(2).rposition(|w| w[0] < w[1]) else {
            return Some(result);
        };
        // Rightmost element greater than the pivot; exists since next[pivot + 1] is one
        let mut successor = next.len() - 1;
        while next[successor] <= next[pivot] {
            successor -= 1;
        }
        next.swap(pivot, successor);
        next[pivot + 1..].reverse();

        self.current = Some(next);
        Some(result)
    }
}
