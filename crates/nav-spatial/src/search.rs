//! Shortest-path search with forbidden intermediate vertices.
//!
//! # Pluggability
//!
//! `nav-query` calls the search through the [`Router`] trait, so callers can
//! swap in another exact algorithm without touching the query layer.  The
//! default [`DijkstraRouter`] forwards to [`shortest_path`].
//!
//! # Determinism
//!
//! The heap is keyed by `(distance, vertex)`: among equal distances the
//! smaller vertex id is settled first.  Out-edges are relaxed in ascending
//! neighbor order.  Expected outputs are literal vertex sequences, so both
//! orders are part of the contract.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxHashMap;

use crate::graph::Graph;

// ── Weight ────────────────────────────────────────────────────────────────────

/// Non-negative edge weight usable as a Dijkstra cost.
pub trait Weight: Copy {
    const ZERO: Self;

    /// Total order used by the priority queue.
    fn total_cmp(&self, other: &Self) -> Ordering;

    /// Path-cost accumulation.  Integer weights saturate instead of wrapping.
    fn accumulate(self, edge: Self) -> Self;
}

impl Weight for f64 {
    const ZERO: f64 = 0.0;

    fn total_cmp(&self, other: &Self) -> Ordering {
        f64::total_cmp(self, other)
    }

    fn accumulate(self, edge: Self) -> Self {
        self + edge
    }
}

impl Weight for f32 {
    const ZERO: f32 = 0.0;

    fn total_cmp(&self, other: &Self) -> Ordering {
        f32::total_cmp(self, other)
    }

    fn accumulate(self, edge: Self) -> Self {
        self + edge
    }
}

macro_rules! integer_weight {
    ($($t:ty),*) => {$(
        impl Weight for $t {
            const ZERO: $t = 0;

            fn total_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            fn accumulate(self, edge: Self) -> Self {
                self.saturating_add(edge)
            }
        }
    )*};
}

integer_weight!(u32, u64, usize);

/// Heap key wrapper giving `W` a total order.
#[derive(Clone, Copy)]
struct Cost<W>(W);

impl<W: Weight> PartialEq for Cost<W> {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl<W: Weight> Eq for Cost<W> {}

impl<W: Weight> PartialOrd for Cost<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for Cost<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable exact shortest-path engine.
pub trait Router<V, W> {
    /// Vertices of a shortest `start → target` path whose interior avoids
    /// `forbidden`, or an empty `Vec` if none exists.
    fn route<S: BuildHasher>(
        &self,
        graph: &Graph<V, W>,
        start: V,
        target: V,
        forbidden: &HashSet<V, S>,
    ) -> Vec<V>;
}

/// Dijkstra's algorithm over [`Graph`]; see [`shortest_path`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraRouter;

impl<V, W> Router<V, W> for DijkstraRouter
where
    V: Copy + Eq + Hash + Ord,
    W: Weight,
{
    fn route<S: BuildHasher>(
        &self,
        graph: &Graph<V, W>,
        start: V,
        target: V,
        forbidden: &HashSet<V, S>,
    ) -> Vec<V> {
        shortest_path(graph, start, target, forbidden)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Shortest path from `start` to `target` that uses no vertex of `forbidden`
/// as an intermediate.
///
/// `start` and `target` are exempt even when listed in `forbidden`.  Returns
/// `[start]` when `start == target` and an empty `Vec` when `target` cannot be
/// reached.
///
/// Forbidden vertices are filtered twice: they are never relaxed into, and
/// are discarded if they are ever popped.  Together this keeps them out of
/// every predecessor chain.
pub fn shortest_path<V, W, S>(
    graph: &Graph<V, W>,
    start: V,
    target: V,
    forbidden: &HashSet<V, S>,
) -> Vec<V>
where
    V: Copy + Eq + Hash + Ord,
    W: Weight,
    S: BuildHasher,
{
    if start == target {
        return vec![start];
    }

    let barred = |v: V| v != start && v != target && forbidden.contains(&v);

    // Absent entries are at infinite distance.
    let mut dist: FxHashMap<V, W> = FxHashMap::default();
    let mut prev: FxHashMap<V, V> = FxHashMap::default();

    dist.insert(start, W::ZERO);

    // Min-heap: (cost, vertex). Secondary key V gives deterministic ties.
    let mut heap: BinaryHeap<Reverse<(Cost<W>, V)>> = BinaryHeap::new();
    heap.push(Reverse((Cost(W::ZERO), start)));

    while let Some(Reverse((Cost(cost), node))) = heap.pop() {
        if node == target {
            break;
        }
        if barred(node) {
            continue;
        }

        // Skip stale heap entries.
        if dist
            .get(&node)
            .is_some_and(|best| cost.total_cmp(best) == Ordering::Greater)
        {
            continue;
        }

        for (next, weight) in graph.out_edges(&node) {
            if barred(next) {
                continue;
            }

            let new_cost = cost.accumulate(weight);
            let improves = dist
                .get(&next)
                .is_none_or(|best| new_cost.total_cmp(best) == Ordering::Less);

            if improves {
                dist.insert(next, new_cost);
                prev.insert(next, node);
                heap.push(Reverse((Cost(new_cost), next)));
            }
        }
    }

    if !dist.contains_key(&target) {
        return Vec::new();
    }
    reconstruct(&prev, start, target)
}

fn reconstruct<V>(prev: &FxHashMap<V, V>, start: V, target: V) -> Vec<V>
where
    V: Copy + Eq + Hash,
{
    let mut path = vec![target];
    let mut cur = target;
    while cur != start {
        let Some(&p) = prev.get(&cur) else {
            return Vec::new();
        };
        path.push(p);
        cur = p;
    }
    path.reverse();
    path
}

/// Sum of edge weights along `path`.
///
/// `None` if some consecutive pair has no direct edge.  Paths with fewer than
/// two vertices have length [`Weight::ZERO`].
pub fn path_length<V, W>(graph: &Graph<V, W>, path: &[V]) -> Option<W>
where
    V: Copy + Eq + Hash + Ord,
    W: Weight,
{
    path.windows(2).try_fold(W::ZERO, |total, pair| {
        graph
            .weight(&pair[0], &pair[1])
            .map(|w| total.accumulate(w))
    })
}
