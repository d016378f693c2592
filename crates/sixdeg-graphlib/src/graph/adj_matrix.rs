//! Dense adjacency-matrix representation.

use super::{Graph, HashMap};
use std::hash::Hash;

/// Flat 0/1 presence matrix with stable vertex indices.
///
/// Vertices get a dense index on first insertion, in insertion order, and
/// keep it for the lifetime of the instance; vertex removal is not
/// supported (only edge removal). The matrix lives in one row-major
/// `Vec<u8>` addressed as `i * dim + j` rather than nested vectors, with
/// `dim` always equal to the number of assigned indices.
///
/// O(V²) space; O(1) `adjacent`/`add_edge`/`remove_edge`, O(V) `neighbors`.
#[derive(Debug, Clone)]
pub struct AdjMatrixGraph<T> {
    /// Index → vertex, in insertion order.
    vertices: Vec<T>,
    /// Vertex → matrix index.
    index: HashMap<T, usize>,
    /// Row-major `dim * dim` presence flags, symmetric by construction.
    cells: Vec<u8>,
    dim: usize,
}

impl<T> AdjMatrixGraph<T> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::default(),
            cells: Vec::new(),
            dim: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Re-lays the buffer for one more row and column, preserving every
    /// existing cell. New cells start cleared.
    fn grow(&mut self) {
        let old = self.dim;
        let new = old + 1;
        let mut cells = vec![0u8; new * new];
        for i in 0..old {
            let src = i * old;
            let dst = i * new;
            cells[dst..dst + old].copy_from_slice(&self.cells[src..src + old]);
        }
        self.cells = cells;
        self.dim = new;
    }

    fn at(&self, i: usize, j: usize) -> bool {
        self.cells[i * self.dim + j] != 0
    }

    fn set(&mut self, i: usize, j: usize, present: bool) {
        self.cells[i * self.dim + j] = u8::from(present);
    }
}

impl<T> Default for AdjMatrixGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> for AdjMatrixGraph<T>
where
    T: Eq + Hash + Clone,
{
    fn add_vertex(&mut self, v: T) -> bool {
        if self.index.contains_key(&v) {
            return false;
        }
        let i = self.vertices.len();
        self.vertices.push(v.clone());
        self.index.insert(v, i);
        self.grow();
        true
    }

    fn has_vertex(&self, v: &T) -> bool {
        self.index.contains_key(v)
    }

    fn add_edge(&mut self, u: T, v: T) -> bool {
        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        let (Some(&i), Some(&j)) = (self.index.get(&u), self.index.get(&v)) else {
            debug_assert!(false, "endpoints exist after add_vertex");
            return false;
        };
        // Check both cells; symmetry should make them agree, but the
        // was-present test ORs them rather than trusting one side.
        let was = self.at(i, j) || self.at(j, i);
        self.set(i, j, true);
        self.set(j, i, true);
        !was
    }

    fn remove_edge(&mut self, u: &T, v: &T) -> bool {
        let (Some(&i), Some(&j)) = (self.index.get(u), self.index.get(v)) else {
            return false;
        };
        if !self.at(i, j) && !self.at(j, i) {
            return false;
        }
        self.set(i, j, false);
        self.set(j, i, false);
        true
    }

    fn adjacent(&self, u: &T, v: &T) -> bool {
        let (Some(&i), Some(&j)) = (self.index.get(u), self.index.get(v)) else {
            return false;
        };
        self.at(i, j)
    }

    fn neighbors(&self, u: &T) -> Vec<T> {
        let Some(&i) = self.index.get(u) else {
            return Vec::new();
        };
        let row = &self.cells[i * self.dim..(i + 1) * self.dim];
        row.iter()
            .enumerate()
            .filter(|&(_, &cell)| cell != 0)
            .map(|(j, _)| self.vertices[j].clone())
            .collect()
    }
}
