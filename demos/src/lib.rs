//! Shared helpers for the demos: building a grid-like graph from a text map
//! and drawing a route back onto it.

use graphstar_core::{Graph, Node, NodeId, Point};

/// Text map used by the `grid` demo. `#` is a wall, `S` the start, `G` the
/// goal, anything else open floor.
pub const MAP: &str = "\
S.....#.....
.####.#.###.
.#....#...#.
.#.####.#.#.
.#......#..G";

/// A text map turned into a graph of its floor cells.
pub struct Maze {
    pub graph: Graph,
    pub width: i32,
    pub height: i32,
    pub start: Node,
    pub goal: Node,
}

impl Maze {
    /// Parse `map`. Every floor cell becomes a node and is connected to its
    /// floor neighbours to the right and below; with `bidirectional` the
    /// reverse connections are made too.
    ///
    /// Returns `None` if the map lacks a start or a goal.
    pub fn parse(map: &str, bidirectional: bool) -> Option<Self> {
        let mut graph = Graph::new(bidirectional);
        let (mut start, mut goal) = (None, None);
        let mut width = 0;
        let mut height = 0;

        for (y, line) in map.lines().enumerate() {
            height = y as i32 + 1;
            for (x, ch) in line.chars().enumerate() {
                width = width.max(x as i32 + 1);
                if ch == '#' {
                    continue;
                }
                let node = graph.make_node(x as i32, y as i32);
                match ch {
                    'S' => start = Some(node),
                    'G' => goal = Some(node),
                    _ => {}
                }
            }
        }

        let floor: Vec<Node> = graph.nodes().collect();
        for n in &floor {
            for step in [Point::new(1, 0), Point::new(0, 1)] {
                let Some(next) = graph.node_at(n.pos + step) else {
                    continue;
                };
                let made = graph.make_connection(n, &next);
                debug_assert!(made.is_ok(), "{made:?}");
                if graph.is_bidirectional() {
                    let made = graph.make_connection(&next, n);
                    debug_assert!(made.is_ok(), "{made:?}");
                }
            }
        }

        Some(Self {
            graph,
            width,
            height,
            start: start?,
            goal: goal?,
        })
    }

    /// Draw the map with `route` marked by `*`.
    pub fn render(&self, route: &[NodeId]) -> String {
        let mut out = String::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let p = Point::new(x, y);
                let ch = match self.graph.node_at(p) {
                    None => '#',
                    Some(n) if n == self.start => 'S',
                    Some(n) if n == self.goal => 'G',
                    Some(n) if route.contains(&n.id) => '*',
                    Some(_) => '.',
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}
