//! The [`Graph`] capability trait and its two representations.
//!
//! Both representations satisfy the same contract; algorithms in [`alg`]
//! only go through the trait and never depend on the storage strategy.

use rustc_hash::FxBuildHasher;
use std::hash::Hash;

mod adj_list;
mod adj_matrix;
pub mod alg;

pub use adj_list::AdjListGraph;
pub use adj_matrix::AdjMatrixGraph;

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
pub(crate) type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// An undirected graph over equality-comparable, hashable vertex values.
///
/// Edges are symmetric: once `add_edge(u, v)` succeeds, `adjacent(u, v)` and
/// `adjacent(v, u)` both hold until the edge is removed. Re-adding a vertex
/// or an edge that is already present is not an error; it reports "no
/// change" by returning `false`. No operation panics on absent vertices —
/// queries answer `false` or empty instead.
///
/// The trait is object-safe, so callers can pick a representation at
/// runtime behind `&dyn Graph<T>` or `Box<dyn Graph<T>>`.
pub trait Graph<T>
where
    T: Eq + Hash + Clone,
{
    /// Inserts `v` with no edges. Returns `false` if it was already present.
    fn add_vertex(&mut self, v: T) -> bool;

    /// Vertex membership, O(1) amortized.
    fn has_vertex(&self, v: &T) -> bool;

    /// Records the undirected edge `u -- v`, creating either endpoint if it
    /// is absent. Returns `true` iff the edge did not previously exist.
    /// Self-loops are permitted.
    fn add_edge(&mut self, u: T, v: T) -> bool;

    /// Removes the edge in both directions. Returns `false` if either
    /// endpoint or the edge itself is absent; the vertices stay.
    fn remove_edge(&mut self, u: &T, v: &T) -> bool;

    /// `true` iff an edge connects `u` and `v`. `false` when either
    /// endpoint is absent.
    fn adjacent(&self, u: &T, v: &T) -> bool;

    /// The vertices with an edge to `u`, as an unordered owned collection.
    /// Empty if `u` is absent or isolated.
    fn neighbors(&self, u: &T) -> Vec<T>;
}
