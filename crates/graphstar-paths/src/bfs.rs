use std::collections::{HashSet, VecDeque};

use graphstar_core::{Connection, Graph, Node, NodeId};

use crate::route::{is_goal, reconstruct};

/// Search a route from `start` to `goal` breadth-first.
///
/// Connection costs are ignored: the returned route has the fewest hops,
/// which is not necessarily the cheapest one. A node is enqueued at most
/// once. Returns `None` if `goal` is not reachable or is not a node of
/// `graph`.
pub fn breadth_first(graph: &Graph, start: &Node, goal: &Node) -> Option<Vec<NodeId>> {
    let mut queue: VecDeque<Connection> = VecDeque::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut log: Vec<Connection> = Vec::new();

    visited.insert(start.id);
    queue.push_back(Connection::seed(start.id));

    while let Some(conn) = queue.pop_front() {
        log.push(conn);

        if is_goal(graph, conn.to, goal) {
            log::debug!(
                "bfs: reached {} from {} after visiting {} nodes",
                goal.id,
                start.id,
                visited.len()
            );
            return Some(reconstruct(&log, goal.id));
        }

        for edge in graph.outgoing(conn.to) {
            if visited.insert(edge.to) {
                queue.push_back(*edge);
            }
        }
    }

    log::debug!(
        "bfs: {} unreachable from {} after visiting {} nodes",
        goal.id,
        start.id,
        visited.len()
    );
    None
}
