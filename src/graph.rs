//! A small directed graph keyed by node value.
//!
//! Nodes are stored once, in insertion order, and addressed by value through a
//! hash index. Parallel edges are collapsed; self-loops are kept. Connected
//! components are *weak* components: edge direction is ignored, which is what
//! the orbit structure of an action graph needs.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Directed graph over hashable node values.
#[derive(Debug, Clone)]
pub struct Digraph<N> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    edges: Vec<(usize, usize)>,
    edge_set: HashSet<(usize, usize)>,
    // Undirected adjacency, used for weak connectivity
    neighbours: Vec<Vec<usize>>,
}

impl<N> Default for Digraph<N> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
            edge_set: HashSet::new(),
            neighbours: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Digraph<N> {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node if it is not present, returning its index.
    pub fn add_node(&mut self, node: N) -> usize {
        if let Some(&idx) = self.index.get(&node) {
            return idx;
        }
        let idx = self.nodes.len();
        self.index.insert(node.clone(), idx);
        self.nodes.push(node);
        self.neighbours.push(Vec::new());
        idx
    }

    /// Insert the edge `from → to`, adding missing endpoints.
    ///
    /// Returns `false` if the edge was already present.
    pub fn add_edge(&mut self, from: N, to: N) -> bool {
        let a = self.add_node(from);
        let b = self.add_node(to);
        if !self.edge_set.insert((a, b)) {
            return false;
        }
        self.edges.push((a, b));
        self.neighbours[a].push(b);
        if a != b {
            self.neighbours[b].push(a);
        }
        true
    }

    /// Number of distinct nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether `node` is in the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.index.contains_key(node)
    }

    /// Whether the edge `from → to` is in the graph.
    #[must_use]
    pub fn contains_edge(&self, from: &N, to: &N) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&a), Some(&b)) => self.edge_set.contains(&(a, b)),
            _ => false,
        }
    }

    /// Nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.edges
            .iter()
            .map(|&(a, b)| (&self.nodes[a], &self.nodes[b]))
    }

    /// Targets of the edges leaving `node`.
    pub fn successors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + 'a {
        let from = self.index.get(node).copied();
        self.edges
            .iter()
            .filter(move |&&(a, _)| Some(a) == from)
            .map(move |&(_, b)| &self.nodes[b])
    }

    /// Weakly connected components.
    ///
    /// Components are listed in the order their first node was inserted, and
    /// the nodes of each component in depth-first discovery order.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let mut visited = vec![false; self.nodes.len()];
        let mut components = Vec::new();

        for start in 0..self.nodes.len() {
            if visited[start] {
                continue;
            }
            let mut component = Vec::new();
            let mut stack = vec![start];
            visited[start] = true;
            while let Some(node) = stack.pop() {
                component.push(self.nodes[node].clone());
                for &next in &self.neighbours[node] {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
            components.push(component);
        }

        components
    }
}
