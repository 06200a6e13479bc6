use std::collections::BinaryHeap;

use hashbrown::HashMap;

use super::state::State;
use crate::model::{CampusGraph, WeightKind};
use crate::{Error, NodeId};

/// Shortest path from `start` to `end` under the chosen weight.
///
/// Returns the node sequence including both endpoints, the empty vector
/// when `end` is unreachable, and `[start]` when `start == end`.
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if either endpoint is not in the graph.
pub fn shortest_path(
    graph: &CampusGraph,
    start: NodeId,
    end: NodeId,
    kind: WeightKind,
) -> Result<Vec<NodeId>, Error> {
    if !graph.contains_node(start) {
        return Err(Error::NodeNotFound(start));
    }
    if !graph.contains_node(end) {
        return Err(Error::NodeNotFound(end));
    }

    let estimated = graph.node_count();
    let mut distances: HashMap<NodeId, f64> = HashMap::with_capacity(estimated);
    let mut predecessors: HashMap<NodeId, NodeId> = HashMap::with_capacity(estimated);
    let mut heap = BinaryHeap::with_capacity(estimated);

    distances.insert(start, 0.0);
    heap.push(State {
        cost: 0.0,
        node: start,
    });

    while let Some(State { cost, node }) = heap.pop() {
        // Target settled: everything cheaper has already been extracted,
        // so stop relaxing and reconstruct.
        if node == end {
            return Ok(reconstruct(&predecessors, start, end));
        }

        // Skip if we've found a better path
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
                    predecessors.insert(next, node);
                    heap.push(State {
                        cost: next_cost,
                        node: next,
                    });
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost < *entry.get() {
                        *entry.get_mut() = next_cost;
                        predecessors.insert(next, node);
                        heap.push(State {
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    // Heap exhausted without settling the target: no route.
    Ok(Vec::new())
}

fn reconstruct(predecessors: &HashMap<NodeId, NodeId>, start: NodeId, end: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = end;
    path.push(current);
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => current = prev,
            None => break,
        }
        path.push(current);
    }
    path.reverse();
    path
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
            walk_duration_min: duration_min * 10.0,
        }
    }

    fn graph_with_nodes(n: usize) -> CampusGraph {
        let mut graph = CampusGraph::new();
        for id in 0..n {
            graph.add_node(id, Point::new(id as f64, 0.0), format!("n{id}"));
        }
        graph
    }

    #[test]
    fn finds_cheaper_multi_hop_route_over_direct_edge() {
        let mut graph = graph_with_nodes(4);
        graph.add_edge(0, 1, edge(5.0));
        graph.add_edge(1, 2, edge(5.0));
        graph.add_edge(0, 2, edge(20.0));
        graph.add_edge(2, 3, edge(1.0));

        let path = shortest_path(&graph, 0, 3, WeightKind::CarDuration).unwrap();
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn self_search_returns_single_node() {
        let mut graph = graph_with_nodes(2);
        graph.add_edge(0, 1, edge(1.0));

        let path = shortest_path(&graph, 0, 0, WeightKind::CarDuration).unwrap();
        assert_eq!(path, vec![0]);
    }

    #[test]
    fn unreachable_target_yields_empty_path() {
        let mut graph = graph_with_nodes(3);
        // Edge points away from node 2 only.
        graph.add_edge(2, 0, edge(1.0));
        graph.add_edge(0, 1, edge(1.0));

        let path = shortest_path(&graph, 0, 2, WeightKind::CarDuration).unwrap();
        assert!(path.is_empty());
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let graph = graph_with_nodes(1);
        assert!(matches!(
            shortest_path(&graph, 0, 9, WeightKind::CarDuration),
            Err(Error::NodeNotFound(9))
        ));
        assert!(matches!(
            shortest_path(&graph, 9, 0, WeightKind::CarDuration),
            Err(Error::NodeNotFound(9))
        ));
    }

    #[test]
    fn asymmetric_weights_give_direction_dependent_routes() {
        let mut graph = graph_with_nodes(3);
        // Forward: 0 -> 1 -> 2 is cheaper than 0 -> 2.
        graph.add_edge(0, 1, edge(1.0));
        graph.add_edge(1, 2, edge(1.0));
        graph.add_edge(0, 2, edge(10.0));
        // Backward: the direct edge is the cheap one.
        graph.add_edge(2, 1, edge(10.0));
        graph.add_edge(1, 0, edge(10.0));
        graph.add_edge(2, 0, edge(3.0));

        let forward = shortest_path(&graph, 0, 2, WeightKind::CarDuration).unwrap();
        let backward = shortest_path(&graph, 2, 0, WeightKind::CarDuration).unwrap();
        assert_eq!(forward, vec![0, 1, 2]);
        assert_eq!(backward, vec![2, 0]);
    }

    #[test]
    fn weight_attribute_selects_different_routes() {
        let mut graph = graph_with_nodes(3);
        // Driving prefers the highway through 1; walking the direct edge.
        graph.add_edge(
            0,
            1,
            EdgeWeights {
                car_distance_km: 1.0,
                car_duration_min: 1.0,
                walk_distance_km: 1.0,
                walk_duration_min: 30.0,
            },
        );
        graph.add_edge(
            1,
            2,
            EdgeWeights {
                car_distance_km: 1.0,
                car_duration_min: 1.0,
                walk_distance_km: 1.0,
                walk_duration_min: 30.0,
            },
        );
        graph.add_edge(
            0,
            2,
            EdgeWeights {
                car_distance_km: 2.0,
                car_duration_min: 10.0,
                walk_distance_km: 2.0,
                walk_duration_min: 25.0,
            },
        );

        let driving = shortest_path(&graph, 0, 2, WeightKind::CarDuration).unwrap();
        let walking = shortest_path(&graph, 0, 2, WeightKind::WalkDuration).unwrap();
        assert_eq!(driving, vec![0, 1, 2]);
        assert_eq!(walking, vec![0, 2]);
    }
}
