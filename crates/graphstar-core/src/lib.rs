//! **graphstar-core** — a small position-keyed graph container.
//!
//! This crate provides the data model shared by the search algorithms in
//! `graphstar-paths`: integer [`Point`]s, the distance [`heuristic`]s, and the
//! append-only [`Graph`] store of [`Node`]s and directed [`Connection`]s.
//!
//! ```
//! use graphstar_core::Graph;
//!
//! let mut g = Graph::new(false);
//! let a = g.make_node(1, 1);
//! let b = g.make_node(3, 3);
//! g.make_connection(&a, &b).unwrap();
//! assert_eq!(g.connections(&a)[0].cost, 4.0);
//! ```
//!
//! Enable the `serde` feature to serialize and deserialize graphs.

pub mod geom;
pub mod graph;
pub mod heuristic;

pub use geom::Point;
pub use graph::{Connection, ConnectionError, Graph, Node, NodeId};
pub use heuristic::{diagonal, euclidean, manhattan};
