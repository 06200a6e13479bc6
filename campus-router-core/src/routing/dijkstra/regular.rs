use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::state::State;
use crate::model::{CampusGraph, WeightKind};
use crate::{Error, NodeId};

/// Costs of the shortest path from `start` to every reachable node.
///
/// One-to-all variant without path reconstruction, used for bulk cost
/// queries. Unreached nodes are absent from the result.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if `start` is not in the graph.
pub fn shortest_path_costs(
    graph: &CampusGraph,
    start: NodeId,
    kind: WeightKind,
) -> Result<HashMap<NodeId, f64>, Error> {
    if !graph.contains_node(start) {
        return Err(Error::NodeNotFound(start));
    }

    let mut distances: HashMap<NodeId, f64> = HashMap::with_capacity(graph.node_count());
    let mut heap = BinaryHeap::with_capacity(graph.node_count());

    distances.insert(start, 0.0);
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if let Some(&best) = distances.get(&node) {
            if cost > best {
                continue;
            }
        }

        for (next, weights) in graph.neighbors(node) {
            let next_cost = cost + weights.get(kind);

            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    Ok(distances)
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::model::EdgeWeights;

    fn edge(duration_min: f64) -> EdgeWeights {
        EdgeWeights {
            car_distance_km: duration_min,
            car_duration_min: duration_min,
            walk_distance_km: duration_min,
            walk_duration_min: duration_min,
        }
    }

    #[test]
    fn settles_all_reachable_nodes() {
        let mut graph = CampusGraph::new();
        for id in 0..4 {
            graph.add_node(id, Point::new(0.0, 0.0), format!("n{id}"));
        }
        graph.add_edge(0, 1, edge(5.0));
        graph.add_edge(1, 2, edge(5.0));
        graph.add_edge(0, 2, edge(20.0));

        let costs = shortest_path_costs(&graph, 0, WeightKind::CarDuration).unwrap();

        assert_eq!(costs[&0], 0.0);
        assert_eq!(costs[&1], 5.0);
        assert_eq!(costs[&2], 10.0);
        // Node 3 has no incoming edges.
        assert!(!costs.contains_key(&3));
    }
}
