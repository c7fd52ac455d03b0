//! The graph store: nodes on unique positions and directed, costed
//! connections between them.
//!
//! The store is append-only. Nodes receive sequential ids starting at 0 and
//! are deduplicated by position; connections are deduplicated by their
//! `(from, to)` pair and keep the Manhattan cost computed when they were made.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::geom::Point;
use crate::heuristic::manhattan;

/// Stable handle of a node inside a [`Graph`].
pub type NodeId = usize;

/// A node: a unique id and the position it occupies.
///
/// `Node::default()` (id 0 at the origin) is a plain value that is not tied
/// to any graph; graph operations treat it like any other foreign node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub id: NodeId,
    pub pos: Point,
}

/// A directed connection between two nodes and the cost of taking it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    pub cost: f64,
}

impl Connection {
    /// A zero-cost self-loop on `id`, used to seed a search at its start node.
    #[inline]
    pub const fn seed(id: NodeId) -> Self {
        Self {
            from: id,
            to: id,
            cost: 0.0,
        }
    }

    /// Whether both ends are the same node.
    #[inline]
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// Reasons a connection request is refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// No node of the graph sits on this endpoint position.
    UnknownEndpoint(Point),
    /// A connection with the same direction already exists.
    Duplicate { from: NodeId, to: NodeId },
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownEndpoint(p) => write!(f, "graph: no node on position {p}"),
            Self::Duplicate { from, to } => {
                write!(f, "graph: connection {from} -> {to} already exists")
            }
        }
    }
}

impl std::error::Error for ConnectionError {}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

/// Owns every node and connection.
///
/// Nodes are indexed both by id and by position. Connections are grouped by
/// the id of the node they leave, in creation order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    bidirectional: bool,
    nodes: Vec<Node>,
    positions: HashMap<Point, NodeId>,
    connections: HashMap<NodeId, Vec<Connection>>,
    pairs: HashSet<(NodeId, NodeId)>,
}

impl Graph {
    /// Create an empty graph.
    ///
    /// `bidirectional` is recorded and reported by
    /// [`is_bidirectional`](Self::is_bidirectional); connections are always
    /// stored in the single direction they were made in.
    pub fn new(bidirectional: bool) -> Self {
        Self {
            bidirectional,
            ..Self::default()
        }
    }

    /// The flag given to [`Graph::new`].
    #[inline]
    pub fn is_bidirectional(&self) -> bool {
        self.bidirectional
    }

    /// Return the node on `(x, y)`, creating it with the next id if the
    /// position is still free.
    pub fn make_node(&mut self, x: i32, y: i32) -> Node {
        let pos = Point::new(x, y);
        if let Some(node) = self.node_at(pos) {
            return node;
        }

        let node = Node {
            id: self.nodes.len(),
            pos,
        };
        self.nodes.push(node);
        self.positions.insert(pos, node.id);
        log::trace!("graph: node {} on {}", node.id, pos);
        node
    }

    /// Look up a node by id.
    #[inline]
    pub fn node_by_id(&self, id: NodeId) -> Option<Node> {
        self.nodes.get(id).copied()
    }

    /// Look up the node occupying `pos`.
    #[inline]
    pub fn node_at(&self, pos: Point) -> Option<Node> {
        self.positions.get(&pos).map(|&id| self.nodes[id])
    }

    /// Whether any node occupies `pos`.
    #[inline]
    pub fn node_on_position(&self, pos: Point) -> bool {
        self.positions.contains_key(&pos)
    }

    /// Whether every given node's position is occupied by a node of this graph.
    pub fn nodes_in_graph(&self, nodes: &[Node]) -> bool {
        nodes.iter().all(|n| self.node_on_position(n.pos))
    }

    /// Connect `from` to `to`.
    ///
    /// Endpoints are matched by position, so a node value rebuilt by the
    /// caller connects the stored node on the same spot. The cost is the
    /// Manhattan distance between the two positions.
    pub fn make_connection(&mut self, from: &Node, to: &Node) -> Result<(), ConnectionError> {
        let (from, to) = match (self.node_at(from.pos), self.node_at(to.pos)) {
            (Some(f), Some(t)) => (f, t),
            (None, _) => return Err(self.reject(ConnectionError::UnknownEndpoint(from.pos))),
            (_, None) => return Err(self.reject(ConnectionError::UnknownEndpoint(to.pos))),
        };

        if !self.pairs.insert((from.id, to.id)) {
            return Err(self.reject(ConnectionError::Duplicate {
                from: from.id,
                to: to.id,
            }));
        }

        let conn = Connection {
            from: from.id,
            to: to.id,
            cost: manhattan(from.pos, to.pos),
        };
        log::trace!("graph: connection {} -> {} cost {}", conn.from, conn.to, conn.cost);
        self.connections.entry(from.id).or_default().push(conn);
        Ok(())
    }

    fn reject(&self, err: ConnectionError) -> ConnectionError {
        log::debug!("{err}");
        err
    }

    /// Connections leaving `node`, in creation order. Empty if there are none.
    #[inline]
    pub fn connections(&self, node: &Node) -> &[Connection] {
        self.outgoing(node.id)
    }

    /// Connections leaving the node with id `id`.
    #[inline]
    pub fn outgoing(&self, id: NodeId) -> &[Connection] {
        self.connections
            .get(&id)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All nodes in id order.
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connection_count(&self) -> usize {
        self.pairs.len()
    }
}

// ---------------------------------------------------------------------------
// serde
// ---------------------------------------------------------------------------

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Connection, Graph, Node};

    #[derive(Serialize)]
    struct GraphRef<'a> {
        bidirectional: bool,
        nodes: &'a [Node],
        connections: Vec<&'a Connection>,
    }

    #[derive(Deserialize)]
    struct GraphRecord {
        bidirectional: bool,
        nodes: Vec<Node>,
        connections: Vec<Connection>,
    }

    impl Serialize for Graph {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let connections = self
                .nodes
                .iter()
                .flat_map(|n| self.outgoing(n.id))
                .collect();
            GraphRef {
                bidirectional: self.bidirectional,
                nodes: &self.nodes,
                connections,
            }
            .serialize(serializer)
        }
    }

    // Records are replayed through the regular constructors so every
    // invariant of a hand-built graph holds for a loaded one.
    impl<'de> Deserialize<'de> for Graph {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let record = GraphRecord::deserialize(deserializer)?;
            let mut g = Graph::new(record.bidirectional);

            for (i, n) in record.nodes.iter().enumerate() {
                if n.id != i {
                    return Err(D::Error::custom(format!(
                        "graph: node id {} out of sequence, expected {i}",
                        n.id
                    )));
                }
                if g.make_node(n.pos.x, n.pos.y).id != i {
                    return Err(D::Error::custom(format!(
                        "graph: two nodes on position {}",
                        n.pos
                    )));
                }
            }

            for c in &record.connections {
                let (Some(from), Some(to)) = (g.node_by_id(c.from), g.node_by_id(c.to)) else {
                    return Err(D::Error::custom(format!(
                        "graph: connection {} -> {} references a missing node",
                        c.from, c.to
                    )));
                };
                g.make_connection(&from, &to).map_err(D::Error::custom)?;
            }

            Ok(g)
        }
    }
}
