use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use graphstar_core::{Connection, Graph, Node, NodeId};

use crate::route::{is_goal, reconstruct};
use crate::traits::Heuristic;

/// Which value orders the A* frontier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Cumulative cost from the start only (uniform-cost order). The
    /// heuristic is still evaluated for every discovered connection but
    /// never changes which connection is expanded next.
    #[default]
    Cumulative,
    /// Cumulative cost plus the heuristic estimate to the goal (f = g + h).
    Estimated,
}

/// Frontier entry, ordered for use in a max-heap `BinaryHeap` so the lowest
/// priority pops first and equal priorities pop in insertion order.
#[derive(Clone, Copy)]
struct Frontier {
    priority: f64,
    seq: u64,
    g: f64,
    conn: Connection,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

/// Search a route from `start` to `goal`, expanding connections in order of
/// cumulative cost ([`Priority::Cumulative`]).
///
/// Returns the node ids from start to goal, or `None` if `goal` is not
/// reachable or is not a node of `graph`.
pub fn a_star<H: Heuristic>(
    graph: &Graph,
    start: &Node,
    goal: &Node,
    heuristic: H,
) -> Option<Vec<NodeId>> {
    a_star_with(graph, start, goal, heuristic, Priority::Cumulative)
}

/// Like [`a_star`] with an explicit frontier [`Priority`].
pub fn a_star_with<H: Heuristic>(
    graph: &Graph,
    start: &Node,
    goal: &Node,
    heuristic: H,
    priority: Priority,
) -> Option<Vec<NodeId>> {
    let mut open: BinaryHeap<Frontier> = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut expanded: HashSet<NodeId> = HashSet::new();
    // Best cumulative cost known for each discovered node.
    let mut cost_to: HashMap<NodeId, f64> = HashMap::new();
    let mut log: Vec<Connection> = Vec::new();

    cost_to.insert(start.id, 0.0);
    open.push(Frontier {
        priority: 0.0,
        seq,
        g: 0.0,
        conn: Connection::seed(start.id),
    });

    while let Some(Frontier { conn, g, .. }) = open.pop() {
        // A cheaper connection into this node was expanded already.
        if !expanded.insert(conn.to) {
            continue;
        }
        log.push(conn);

        if is_goal(graph, conn.to, goal) {
            log::debug!(
                "astar: reached {} from {} at cost {g} after {} expansions",
                goal.id,
                start.id,
                expanded.len()
            );
            return Some(reconstruct(&log, goal.id));
        }

        for edge in graph.outgoing(conn.to) {
            if expanded.contains(&edge.to) {
                continue;
            }
            let Some(next) = graph.node_by_id(edge.to) else {
                continue;
            };

            let current = g + edge.cost;
            if cost_to.get(&edge.to).is_some_and(|&known| current >= known) {
                continue;
            }
            let total = current + heuristic.estimate(goal.pos, next.pos);
            log::trace!("astar: {} -> {} g={current} f={total}", edge.from, edge.to);

            cost_to.insert(edge.to, current);
            seq += 1;
            open.push(Frontier {
                priority: match priority {
                    Priority::Cumulative => current,
                    Priority::Estimated => total,
                },
                seq,
                g: current,
                conn: *edge,
            });
        }
    }

    log::debug!(
        "astar: {} unreachable from {} after {} expansions",
        goal.id,
        start.id,
        expanded.len()
    );
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::route_cost;
    use graphstar_core::{Point, euclidean, manhattan};

    /// A 2-hop detour and a cheaper 3-hop straight line from `a` to `b`.
    ///
    /// ```text
    /// x
    /// |
    /// a - c - d - b
    /// ```
    fn detour() -> (Graph, Node, Node) {
        let mut g = Graph::default();
        let a = g.make_node(0, 0);
        let x = g.make_node(0, 10);
        let b = g.make_node(5, 0);
        let c = g.make_node(2, 0);
        let d = g.make_node(4, 0);
        g.make_connection(&a, &x).unwrap();
        g.make_connection(&x, &b).unwrap();
        g.make_connection(&a, &c).unwrap();
        g.make_connection(&c, &d).unwrap();
        g.make_connection(&d, &b).unwrap();
        (g, a, b)
    }

    #[test]
    fn cheapest_route_wins_over_fewest_hops() {
        let (g, a, b) = detour();
        let route = a_star(&g, &a, &b, manhattan).unwrap();
        assert_eq!(route, vec![0, 3, 4, 2]);
        assert_eq!(route_cost(&g, &route), Some(5.0));
    }

    #[test]
    fn estimated_priority_finds_same_route() {
        let (g, a, b) = detour();
        let route = a_star_with(&g, &a, &b, euclidean, Priority::Estimated).unwrap();
        assert_eq!(route, vec![0, 3, 4, 2]);
    }

    /// `b` is first reached through `p` at cost 5, then through `q` at 3
    /// before it is expanded.
    ///
    /// ```text
    /// s p
    ///
    /// q
    /// b . . . . . . . . . t
    /// ```
    fn rediscovered_cheaper() -> (Graph, Node, Node) {
        let mut g = Graph::default();
        let s = g.make_node(0, 0);
        let p = g.make_node(1, 0);
        let q = g.make_node(0, 2);
        let b = g.make_node(0, 3);
        let t = g.make_node(10, 3);
        g.make_connection(&s, &p).unwrap();
        g.make_connection(&s, &q).unwrap();
        g.make_connection(&p, &b).unwrap();
        g.make_connection(&q, &b).unwrap();
        g.make_connection(&b, &t).unwrap();
        (g, s, t)
    }

    #[test]
    fn cheaper_rediscovery_replaces_first_cost() {
        let (g, s, t) = rediscovered_cheaper();
        for priority in [Priority::Cumulative, Priority::Estimated] {
            let route = a_star_with(&g, &s, &t, euclidean, priority).unwrap();
            assert_eq!(route, vec![0, 2, 3, 4], "{priority:?}");
            assert_eq!(route_cost(&g, &route), Some(13.0), "{priority:?}");
        }
    }

    #[test]
    fn start_is_goal() {
        let (g, a, _) = detour();
        assert_eq!(a_star(&g, &a, &a, manhattan), Some(vec![a.id]));
    }

    #[test]
    fn unreachable_goal_on_cycle_terminates() {
        let mut g = Graph::default();
        let a = g.make_node(0, 0);
        let b = g.make_node(1, 0);
        let c = g.make_node(1, 1);
        let island = g.make_node(9, 9);
        g.make_connection(&a, &b).unwrap();
        g.make_connection(&b, &c).unwrap();
        g.make_connection(&c, &a).unwrap();
        assert_eq!(a_star(&g, &a, &island, euclidean), None);
    }

    #[test]
    fn direction_matters() {
        let (g, a, b) = detour();
        assert_eq!(a_star(&g, &b, &a, manhattan), None);
    }

    #[test]
    fn foreign_goal_not_found() {
        let (g, a, _) = detour();
        // Shares id 0 with `a` but sits elsewhere.
        let foreign = Node {
            id: 0,
            pos: Point::new(-1, -1),
        };
        assert_eq!(a_star(&g, &a, &foreign, manhattan), None);
    }

    #[test]
    fn closure_heuristic() {
        let (g, a, b) = detour();
        let zero = |_: Point, _: Point| 0.0;
        assert_eq!(
            a_star_with(&g, &a, &b, zero, Priority::Estimated),
            Some(vec![0, 3, 4, 2])
        );
    }

    #[test]
    fn equal_costs_expand_in_discovery_order() {
        // Two routes of cost 2 to the goal; the first discovered one wins.
        let mut g = Graph::default();
        let s = g.make_node(0, 0);
        let up = g.make_node(0, 1);
        let right = g.make_node(1, 0);
        let goal = g.make_node(1, 1);
        g.make_connection(&s, &up).unwrap();
        g.make_connection(&s, &right).unwrap();
        g.make_connection(&up, &goal).unwrap();
        g.make_connection(&right, &goal).unwrap();
        assert_eq!(
            a_star(&g, &s, &goal, manhattan),
            Some(vec![s.id, up.id, goal.id])
        );
    }
}
