//! Representation-agnostic algorithms over the [`Graph`] trait.

use super::{Graph, HashMap, HashSet};
use std::collections::VecDeque;
use std::hash::Hash;

/// Checks whether `path` spells a simple cycle in `g`.
///
/// Accepted walks close (first element equals last), take every hop along
/// an existing edge, visit at least three distinct vertices (so at least
/// four positions, `u, v, w, u`), and repeat no vertex except the final
/// closing one. Malformed input is rejected, never a panic.
pub fn is_simple_cycle<T, G>(g: &G, path: &[T]) -> bool
where
    T: Eq + Hash + Clone,
    G: Graph<T> + ?Sized,
{
    // Minimum encoding of a three-vertex cycle is four positions.
    if path.len() < 4 {
        return false;
    }
    if path.first() != path.last() {
        return false;
    }

    let mut seen: HashSet<&T> = HashSet::default();
    for i in 0..path.len() - 1 {
        let (u, v) = (&path[i], &path[i + 1]);
        if !g.adjacent(u, v) {
            return false;
        }
        // Every position except the closing element must be a first visit.
        // The closing element is exempt: it is expected to repeat the start.
        if !seen.insert(u) {
            return false;
        }
    }
    true
}

/// Unweighted shortest path from `source` to `target` via breadth-first
/// search, as a `source → … → target` vertex sequence.
///
/// Returns `None` when either endpoint is absent or no path exists. When
/// `source == target` the path is the single vertex. The frontier expands
/// in level order, and each vertex's parent is fixed at first visit, so
/// the reconstructed path is shortest; which shortest path is returned
/// depends on neighbor enumeration order.
pub fn shortest_path<T, G>(g: &G, source: &T, target: &T) -> Option<Vec<T>>
where
    T: Eq + Hash + Clone,
    G: Graph<T> + ?Sized,
{
    if !g.has_vertex(source) || !g.has_vertex(target) {
        return None;
    }

    let mut parent: HashMap<T, T> = HashMap::default();
    let mut visited: HashSet<T> = HashSet::default();
    let mut frontier: VecDeque<T> = VecDeque::new();

    visited.insert(source.clone());
    frontier.push_back(source.clone());

    let mut found = false;
    while let Some(u) = frontier.pop_front() {
        if u == *target {
            found = true;
            break;
        }
        for v in g.neighbors(&u) {
            if visited.insert(v.clone()) {
                parent.insert(v.clone(), u.clone());
                frontier.push_back(v);
            }
        }
    }
    if !found {
        return None;
    }

    // Walk parent links target → source, then flip into path order.
    let mut rev: Vec<T> = Vec::new();
    let mut cur = target;
    loop {
        rev.push(cur.clone());
        if cur == source {
            break;
        }
        let Some(next) = parent.get(cur) else {
            debug_assert!(false, "parent link missing for visited vertex");
            return None;
        };
        cur = next;
    }
    rev.reverse();
    Some(rev)
}

/// The edge count of the shortest path between `source` and `target` — the
/// "Bacon number". Zero when the endpoints coincide, `None` when
/// disconnected or absent.
pub fn degrees_of_separation<T, G>(g: &G, source: &T, target: &T) -> Option<usize>
where
    T: Eq + Hash + Clone,
    G: Graph<T> + ?Sized,
{
    shortest_path(g, source, target).map(|path| path.len() - 1)
}
