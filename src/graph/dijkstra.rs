use super::MazeGraph;
use crate::node_id::{node_id_map, node_id_set, NodeIDMap};
use crate::{Cost, IndexedMinHeap, NodeID, Path, Point};

use log::trace;
use std::collections::hash_map::Entry;

/// Searches a cheapest Path from `start` to `goal` with Dijkstra's
/// algorithm, using an [`IndexedMinHeap`] as the frontier.
///
/// Returns the steps from `start` to `goal` inclusive together with the
/// total Cost, or `None` if no Path connects the two. A Node's Cost is
/// final once it leaves the frontier; relaxation only ever pushes an unseen
/// Node or lowers a frontier entry in place.
pub fn dijkstra_search(graph: &MazeGraph, start: NodeID, goal: NodeID) -> Option<Path<Point>> {
    let mut frontier = IndexedMinHeap::with_capacity(graph.len());
    let mut costs = node_id_map::<Cost>();
    let mut parents = node_id_map::<NodeID>();
    let mut settled = node_id_set();

    frontier.push(start, 0);
    costs.insert(start, 0);

    while !frontier.is_empty() {
        let (current, current_cost) = frontier.pop_min();
        if !settled.insert(current) {
            // already finalized, a stale frontier entry
            continue;
        }

        if current == goal {
            trace!("reached goal at cost {}", current_cost);
            return Some(backtrack(graph, &parents, start, goal, current_cost));
        }

        for edge in &graph[current].edges {
            if settled.contains(&edge.target) {
                continue;
            }
            let candidate = current_cost + edge.cost;
            match costs.entry(edge.target) {
                Entry::Vacant(entry) => {
                    entry.insert(candidate);
                    parents.insert(edge.target, current);
                    frontier.push(edge.target, candidate);
                }
                Entry::Occupied(mut entry) => {
                    if candidate < *entry.get() {
                        entry.insert(candidate);
                        parents.insert(edge.target, current);
                        frontier.decrease_key(edge.target, candidate);
                    }
                }
            }
        }
    }

    None
}

fn backtrack(
    graph: &MazeGraph,
    parents: &NodeIDMap<NodeID>,
    start: NodeID,
    goal: NodeID,
    cost: Cost,
) -> Path<Point> {
    let mut steps = vec![];
    let mut current = goal;

    while current != start {
        steps.push(graph[current].pos);
        current = parents[&current];
    }
    steps.push(graph[start].pos);
    steps.reverse();

    Path::new(steps, cost)
}
