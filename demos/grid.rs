//! Text demo: A* and breadth-first routes through a small maze.
//!
//! Run: cargo run --bin grid

use graphstar_core::{NodeId, Point, diagonal, euclidean, manhattan};
use graphstar_demos::{MAP, Maze};
use graphstar_paths::{Priority, a_star_with, breadth_first, route_cost};

fn main() {
    let Some(maze) = Maze::parse(MAP, true) else {
        eprintln!("Error: map needs a start and a goal");
        std::process::exit(1);
    };

    println!(
        "{} nodes, {} connections\n",
        maze.graph.node_count(),
        maze.graph.connection_count()
    );

    let heuristics: [(&str, fn(Point, Point) -> f64); 3] = [
        ("manhattan", manhattan),
        ("diagonal", diagonal),
        ("euclidean", euclidean),
    ];
    for (name, h) in heuristics {
        for priority in [Priority::Cumulative, Priority::Estimated] {
            let route = a_star_with(&maze.graph, &maze.start, &maze.goal, h, priority);
            show(&maze, &format!("A* {name} {priority:?}"), route);
        }
    }

    let route = breadth_first(&maze.graph, &maze.start, &maze.goal);
    show(&maze, "breadth-first", route);
}

fn show(maze: &Maze, title: &str, route: Option<Vec<NodeId>>) {
    match route {
        Some(route) => {
            let cost = route_cost(&maze.graph, &route).unwrap_or(f64::NAN);
            println!("{title}: {} hops, cost {cost}", route.len() - 1);
            println!("{}", maze.render(&route));
        }
        None => println!("{title}: no route\n"),
    }
}
