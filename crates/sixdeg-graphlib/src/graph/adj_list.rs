//! Sparse adjacency-list representation.

use super::{Graph, HashMap, HashSet};
use std::hash::Hash;

/// Vertex → neighbor-set storage. O(V + E) space, O(1) expected vertex and
/// edge operations, O(deg(u)) `neighbors`.
#[derive(Debug, Clone)]
pub struct AdjListGraph<T> {
    adj: HashMap<T, HashSet<T>>,
}

impl<T> AdjListGraph<T> {
    pub fn new() -> Self {
        Self {
            adj: HashMap::default(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }
}

impl<T> Default for AdjListGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for AdjListGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, v: T) -> bool {
        match self.adj.entry(v) {
            hashbrown::hash_map::Entry::Occupied(_) => false,
            hashbrown::hash_map::Entry::Vacant(e) => {
                e.insert(HashSet::default());
                true
            }
        }
    }

    fn has_vertex(&self, v: &T) -> bool {
        self.adj.contains_key(v)
    }

    fn add_edge(&mut self, u: T, v: T) -> bool {
        let a = self.adj.entry(u.clone()).or_default().insert(v.clone());
        let b = self.adj.entry(v).or_default().insert(u);
        // The undirected edge counts once: it is new iff either direction
        // was missing.
        a || b
    }

    fn remove_edge(&mut self, u: &T, v: &T) -> bool {
        if !self.adj.contains_key(u) || !self.adj.contains_key(v) {
            return false;
        }
        let a = self.adj.get_mut(u).is_some_and(|set| set.remove(v));
        let b = self.adj.get_mut(v).is_some_and(|set| set.remove(u));
        // Both directions must have been present. Under the symmetry
        // invariant this agrees with the matrix representation's OR-based
        // check, but each side is still validated independently.
        a && b
    }

    fn adjacent(&self, u: &T, v: &T) -> bool {
        self.adj.get(u).is_some_and(|set| set.contains(v))
    }

    fn neighbors(&self, u: &T) -> Vec<T> {
        self.adj
            .get(u)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }
}
