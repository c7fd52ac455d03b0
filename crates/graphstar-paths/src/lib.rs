//! Route search over [`graphstar_core::Graph`]s.
//!
//! - **A\*** with a pluggable [`Heuristic`] ([`a_star`], [`a_star_with`])
//! - **Breadth-first** fewest-hops search ([`breadth_first`])
//!
//! Both searches borrow the graph immutably for their whole run, keep all of
//! their working state local to the call, and answer with the node ids of
//! the route from start to goal, or `None` when the goal cannot be reached.
//!
//! ```
//! use graphstar_core::{Graph, euclidean};
//! use graphstar_paths::{a_star, breadth_first};
//!
//! let mut g = Graph::new(false);
//! let a = g.make_node(0, 0);
//! let b = g.make_node(0, 2);
//! let c = g.make_node(3, 2);
//! g.make_connection(&a, &b).unwrap();
//! g.make_connection(&b, &c).unwrap();
//!
//! assert_eq!(a_star(&g, &a, &c, euclidean), Some(vec![0, 1, 2]));
//! assert_eq!(breadth_first(&g, &c, &a), None);
//! ```

mod astar;
mod bfs;
mod route;
mod traits;

pub use astar::{Priority, a_star, a_star_with};
pub use bfs::breadth_first;
pub use route::{reconstruct, route_cost};
pub use traits::Heuristic;
