//! Turning a search's traversal-order log into a route.

use graphstar_core::{Connection, Graph, Node, NodeId};

/// Rebuild the route that ends at `goal` from the connections a search
/// dequeued, in the order they were dequeued.
///
/// The log is walked backwards: each connection arriving at the node being
/// looked for extends the route by its source node. The walk stops at the
/// start's self-loop. The result runs from start to goal and is empty if
/// `goal` never appears as a destination.
pub fn reconstruct(log: &[Connection], goal: NodeId) -> Vec<NodeId> {
    let mut route = Vec::new();
    let mut looking_for = goal;

    for c in log.iter().rev() {
        if c.to != looking_for {
            continue;
        }
        if route.is_empty() {
            route.push(c.to);
        }
        if c.is_loop() {
            break;
        }
        route.push(c.from);
        looking_for = c.from;
    }

    route.reverse();
    route
}

/// Summed connection cost along `route`, or `None` if two consecutive ids
/// are not connected in that direction.
pub fn route_cost(graph: &Graph, route: &[NodeId]) -> Option<f64> {
    route.windows(2).try_fold(0.0, |acc, w| {
        graph
            .outgoing(w[0])
            .iter()
            .find(|c| c.to == w[1])
            .map(|c| acc + c.cost)
    })
}

/// Whether `id` names the stored node equal to `goal`.
#[inline]
pub(crate) fn is_goal(graph: &Graph, id: NodeId, goal: &Node) -> bool {
    graph.node_by_id(id).as_ref() == Some(goal)
}
