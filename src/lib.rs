#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the cheapest Path through a textual Maze.
//!
//! ## Introduction
//! A Maze is a single string of newline-separated rows. `#` is a wall, a
//! digit `0`-`9` is a weighted cell that costs its digit value to step onto,
//! and every other character (canonically a space) is open terrain with a
//! step cost of 1. A digit that appears on exactly two cells additionally
//! forms a **Portal**: the two cells are directly connected, and taking the
//! jump costs the digit's value.
//!
//! The Maze is entered and left through its two exits: the first two
//! boundary cells of open terrain, scanning rows top to bottom. [`solve`]
//! finds a minimum-cost Path between them with Dijkstra's algorithm, driven
//! by an [`IndexedMinHeap`] frontier, and returns the Maze with every Path
//! cell replaced by `o`. If the Maze has no two exits or no Path connects
//! them, the input is returned unchanged.
//!
//! ## Examples
//! ```
//! use maze_pathfinding::solve;
//!
//! let maze = "## ##\n#   #\n## ##\n";
//! assert_eq!(solve(maze), "##o##\n# o #\n##o##\n");
//! ```
//! Weighted cells are avoided when a detour is cheaper, and Portals can
//! shortcut otherwise unreachable sections:
//! ```
//! use maze_pathfinding::solve;
//!
//! // the two `2`s form a Portal through the solid wall
//! let maze = "## ##\n#2  #\n#####\n#2  #\n## ##\n";
//! assert_eq!(solve(maze), "##o##\n#oo #\n#####\n#oo #\n##o##\n");
//! ```
//!
//! The intermediate stages are public as well: [`Maze::parse`] for the grid,
//! [`MazeGraph::build`] for the weighted Graph and [`dijkstra_search`] for
//! the raw search, in case only the Path or its Cost is of interest.

use log::debug;

/// The Type used to reference a Node in the Maze Graph
pub type NodeID = usize;

/// A shorthand for positions on the Grid: `(row, column)`, 0-based
pub type Point = (usize, usize);

/// a Type to represent the Cost of traversing a Node
pub type Cost = usize;

pub(crate) type PointMap<V> = hashbrown::HashMap<Point, V>;

mod heap;
pub use self::heap::IndexedMinHeap;

mod maze;
pub use self::maze::{Cell, Maze};

mod path;
pub use self::path::Path;

pub mod graph;
pub use self::graph::{dijkstra_search, MazeGraph};

pub mod node_id;

/// The most common imports
pub mod prelude {
    pub use crate::{dijkstra_search, solve, Cell, IndexedMinHeap, Maze, MazeGraph, Path};
}

/// Solves a Maze, marking a cheapest Path between its two exits with `o`.
///
/// The input is returned unchanged if it cannot be solved: no rows, rows of
/// differing lengths, fewer than two exits on the boundary, or no Path
/// between the exits. See the [crate documentation](crate) for the Maze
/// format and an example.
pub fn solve(maze: &str) -> String {
    let parsed = match Maze::parse(maze) {
        Some(parsed) => parsed,
        None => return maze.to_string(),
    };
    let (start_pos, goal_pos) = match parsed.exits() {
        Some(exits) => exits,
        None => {
            debug!("maze has fewer than two exits");
            return maze.to_string();
        }
    };

    let graph = MazeGraph::build(&parsed);
    // exits are open terrain, so both have a Node
    let (start, goal) = match (graph.node_at(start_pos), graph.node_at(goal_pos)) {
        (Some(start), Some(goal)) => (start, goal),
        _ => return maze.to_string(),
    };

    match dijkstra_search(&graph, start, goal) {
        Some(path) => parsed.render_path(path.steps()),
        None => {
            debug!("no path between {:?} and {:?}", start_pos, goal_pos);
            maze.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_straight_corridor() {
        assert_eq!(solve("# #\n# #\n# #\n"), "#o#\n#o#\n#o#\n");
    }

    #[test]
    fn solve_without_exits_is_identity() {
        let maze = "###\n# #\n###\n";
        assert_eq!(solve(maze), maze);
    }
}
