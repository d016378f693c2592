//! Graph containers and separation queries used by `sixdeg`.
//!
//! Two interchangeable representations implement the [`Graph`] trait: the
//! sparse [`AdjListGraph`] and the dense [`AdjMatrixGraph`]. The
//! [`graph::alg`] module layers a simple-cycle validator and an unweighted
//! shortest-path search on top of either; [`reader`] loads graphs from an
//! `A -- B` edge-list text format.

pub mod graph;
pub mod reader;

pub use graph::{AdjListGraph, AdjMatrixGraph, Graph, alg};
pub use reader::{LoadStats, ParseError, load_edge_list};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
