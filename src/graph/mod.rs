//! The weighted Graph built from a Maze, and the search over it.

mod node;
pub use self::node::{Edge, Node};

mod dijkstra;
pub use self::dijkstra::dijkstra_search;

use crate::{Cell, Cost, Maze, NodeID, Point, PointMap};
use hashbrown::HashMap;
use log::debug;

/// A sparse Graph of all traversable Maze cells.
///
/// Every non-wall cell becomes a [`Node`] in an arena, referenced by
/// [`NodeID`]. Edges connect 4-directional neighbors (costing the
/// destination cell's step cost) and Portal pairs (costing the shared digit
/// value); the edge lists are fully populated by [`build`](MazeGraph::build)
/// before any search runs.
///
/// ## Examples
/// ```
/// use maze_pathfinding::{Maze, MazeGraph};
///
/// let maze = Maze::parse("###\n# #\n###\n").unwrap();
/// let graph = MazeGraph::build(&maze);
///
/// assert_eq!(graph.len(), 1);
/// assert!(graph.node_at((1, 1)).is_some());
/// assert!(graph.node_at((0, 0)).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct MazeGraph {
    nodes: slab::Slab<Node>,
    pos_map: PointMap<NodeID>,
}

impl MazeGraph {
    /// Builds the Graph for a Maze.
    ///
    /// Directional edges lead to each of a Node's up/down/left/right
    /// neighbors that are not walls and cost the neighbor's step cost. A
    /// digit occurring on exactly two cells gets a bidirectional edge pair
    /// at the digit's value; any other occurrence count leaves the cells as
    /// plain weighted Nodes.
    pub fn build(maze: &Maze) -> MazeGraph {
        let mut nodes = slab::Slab::new();
        let mut pos_map = PointMap::default();
        let mut portals: HashMap<u8, Vec<NodeID>> = HashMap::new();

        for (pos, cell) in maze.cells() {
            if cell.is_wall() {
                continue;
            }
            let id = nodes.insert(Node::new(pos, cell.step_cost()));
            pos_map.insert(pos, id);
            if let Cell::Portal(digit) = cell {
                portals.entry(digit).or_default().push(id);
            }
        }

        let mut graph = MazeGraph { nodes, pos_map };

        for (pos, cell) in maze.cells() {
            if cell.is_wall() {
                continue;
            }
            let id = graph.pos_map[&pos];
            for neighbor in neighbors(pos, maze.height(), maze.width()) {
                if let Some(&target) = graph.pos_map.get(&neighbor) {
                    let cost = graph.nodes[target].step_cost;
                    graph.nodes[id].edges.push(Edge { target, cost });
                }
            }
        }

        for (digit, endpoints) in portals {
            if let [a, b] = endpoints[..] {
                let cost = digit as Cost;
                graph.nodes[a].edges.push(Edge { target: b, cost });
                graph.nodes[b].edges.push(Edge { target: a, cost });
            }
        }

        debug!(
            "built graph with {} nodes for a {}x{} maze",
            graph.len(),
            maze.height(),
            maze.width()
        );
        graph
    }

    /// The number of Nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` if the Graph holds no Nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The Node at a grid position, if that cell is traversable.
    pub fn node_at(&self, pos: Point) -> Option<NodeID> {
        self.pos_map.get(&pos).copied()
    }

    /// Iterates over all `(NodeID, &Node)` pairs.
    pub fn iter(&self) -> slab::Iter<Node> {
        self.nodes.iter()
    }
}

use std::ops::{Index, IndexMut};
impl Index<NodeID> for MazeGraph {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeID) -> &Node {
        &self.nodes[index]
    }
}
impl IndexMut<NodeID> for MazeGraph {
    #[track_caller]
    fn index_mut(&mut self, index: NodeID) -> &mut Node {
        &mut self.nodes[index]
    }
}

fn neighbors((row, column): Point, height: usize, width: usize) -> impl Iterator<Item = Point> {
    let (row, column) = (row as isize, column as isize);

    [(-1isize, 0isize), (1, 0), (0, -1), (0, 1)]
        .into_iter()
        .map(move |(dr, dc)| (row + dr, column + dc))
        .filter(move |&(r, c)| r >= 0 && c >= 0 && (r as usize) < height && (c as usize) < width)
        .map(|(r, c)| (r as usize, c as usize))
}
