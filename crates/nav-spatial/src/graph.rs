//! Directed, weighted adjacency-list graph.
//!
//! # Data layout
//!
//! ```text
//! adjacency: V → (V → W)
//! ```
//!
//! Both levels are `FxHashMap`s, so vertex and edge mutation is amortized
//! O(1).  Hash iteration order is never observable through the API: anything
//! order-sensitive ([`Graph::neighbors`], [`Graph::out_edges`]) comes back
//! sorted by vertex.
//!
//! Undirected links are two directed edges inserted explicitly by the caller;
//! the store never implies a reverse edge.

use std::collections::BTreeSet;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Directed graph over vertices `V` with edge weights `W`.
///
/// # Invariants
///
/// - An edge exists only between two vertices already in the graph.
/// - `edge_count` equals the number of distinct ordered `(from, to)` pairs;
///   overwriting a weight does not change it.
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    adjacency:  FxHashMap<V, FxHashMap<V, W>>,
    edge_count: usize,
}

impl<V, W> Graph<V, W>
where
    V: Clone + Eq + Hash + Ord,
    W: Clone,
{
    pub fn new() -> Self {
        Self { adjacency: FxHashMap::default(), edge_count: 0 }
    }

    /// Pre-allocate for the expected number of vertices.
    pub fn with_capacity(vertices: usize) -> Self {
        let mut adjacency = FxHashMap::default();
        adjacency.reserve(vertices);
        Self { adjacency, edge_count: 0 }
    }

    /// Add `v` with no outgoing edges.
    ///
    /// Returns `false` (and changes nothing) if `v` is already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.adjacency.contains_key(&v) {
            return false;
        }
        self.adjacency.insert(v, FxHashMap::default());
        true
    }

    /// Add or overwrite the directed edge `from → to`.
    ///
    /// Returns `false` if either endpoint is not a vertex; missing vertices
    /// are never created implicitly.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        if !self.adjacency.contains_key(&to) {
            return false;
        }
        let Some(out) = self.adjacency.get_mut(&from) else {
            return false;
        };
        if out.insert(to, weight).is_none() {
            self.edge_count += 1;
        }
        true
    }

    /// Weight of `from → to`, or `None` if `from` is absent or has no such
    /// edge.
    #[inline]
    pub fn weight(&self, from: &V, to: &V) -> Option<W> {
        self.adjacency.get(from)?.get(to).cloned()
    }

    /// Out-neighbors of `v`.  Empty if `v` is absent.
    pub fn neighbors(&self, v: &V) -> BTreeSet<V> {
        self.adjacency
            .get(v)
            .map(|out| out.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Out-neighbors of `v` paired with edge weights, ascending by neighbor.
    pub fn out_edges(&self, v: &V) -> Vec<(V, W)> {
        let mut edges: Vec<(V, W)> = self
            .adjacency
            .get(v)
            .map(|out| out.iter().map(|(n, w)| (n.clone(), w.clone())).collect())
            .unwrap_or_default();
        edges.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        edges
    }

    /// Number of outgoing edges of `v` (0 if absent).
    #[inline]
    pub fn out_degree(&self, v: &V) -> usize {
        self.adjacency.get(v).map_or(0, |out| out.len())
    }

    #[inline]
    pub fn contains_vertex(&self, v: &V) -> bool {
        self.adjacency.contains_key(v)
    }

    /// All vertices, in unspecified order.
    pub fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.  O(1).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V, W> Default for Graph<V, W>
where
    V: Clone + Eq + Hash + Ord,
    W: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
