//! # graphlet
//!
//! Graphlet degree vectors for undirected simple graphs: for every node, how
//! many times it participates in each of the 73 automorphism orbits of the
//! connected graphlets on 2 to 5 nodes.
//!
//! The counting follows the two-stage shape of the ORCA method (Hočevar &
//! Demšar, Bioinformatics 2014): a combinatorial pass enumerates the small
//! orbits and eleven rooted 4-node patterns around each node while gathering
//! shared statistics (common-neighbor tables, per-edge triangle counts, full
//! 5-clique counts), then a fixed triangular system of identities recovers
//! the 58 remaining orbits without ever enumerating a 5-node subgraph other
//! than the 5-cliques.
//!
//! ## Quick start
//!
//! ```
//! use graphlet::prelude::*;
//!
//! // A triangle: every node has degree 2 and one triangle corner.
//! let graph = Graph::from_text("3 3\n0 1\n1 2\n0 2\n").unwrap();
//! let orbits = count_orbits(graph).unwrap();
//! assert_eq!(orbits.row(0)[0], 2);
//! assert_eq!(orbits.row(0)[3], 1);
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: the immutable graph store and the edge-list parser.
//! - [`adjacency`]: interchangeable adjacency back-ends (dense bit matrix or
//!   binary search over sorted lists).
//! - [`tables`]: precomputed common-neighbor, triangle, and 5-clique counts.
//! - [`orbits`]: the counting session and the resulting n x 73 matrix.
//! - [`solve`]: the triangular identity system for orbits 15..=72.
//!
//! ## Performance notes
//!
//! - The dense adjacency back-end is selected automatically while its
//!   `n x n` bit matrix stays under 100 MiB; beyond that, lookups fall back
//!   to binary search with no change in results.
//! - Scratch tables are reset through touched-key lists, so per-node cost
//!   tracks the local neighborhood size rather than `n`.
//! - Counts are `u64` throughout; the engine is single-threaded.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::inline_always)] // Intentional for hot-path code
#![allow(clippy::many_single_char_names)] // Mathematical variable names
#![allow(clippy::needless_range_loop)] // Often clearer for index-coupled loops

pub mod adjacency;
pub mod graph;
pub mod keys;
pub mod orbits;
pub mod solve;
pub mod tables;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::adjacency::{AdjacencyOracle, DenseAdjacency, SortedAdjacency};
    pub use crate::graph::{parse_edge_list, Graph, GraphError};
    pub use crate::orbits::{count_orbits, count_orbits_with, OrbitCounts, ORBIT_COUNT};
    pub use crate::solve::InvariantViolation;
}
