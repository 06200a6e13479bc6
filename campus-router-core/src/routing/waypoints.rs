use itertools::Itertools;

use super::dijkstra::shortest_path;
use crate::model::{CampusGraph, Mode};
use crate::{Error, NodeId};

/// Shortest path from `start` to `end` that visits `waypoints` in the given
/// order, under the mode's duration weight.
///
/// Each consecutive pair of the sequence [start] + waypoints + [end] is
/// routed independently and the segments are concatenated, dropping the
/// leading node of every segment after the first (it duplicates the joint).
///
/// # Errors
///
/// Returns [`Error::NodeNotFound`] if any stop is not in the graph, and
/// [`Error::Unreachable`] as soon as any segment has no route. No partial
/// path is returned.
pub fn path_with_waypoints(
    graph: &CampusGraph,
    start: NodeId,
    end: NodeId,
    mode: Mode,
    waypoints: &[NodeId],
) -> Result<Vec<NodeId>, Error> {
    let kind = mode.duration_weight();
    let mut path = Vec::new();

    let stops = std::iter::once(start)
        .chain(waypoints.iter().copied())
        .chain(std::iter::once(end));

    for (from, to) in stops.tuple_windows() {
        let segment = shortest_path(graph, from, to, kind)?;
        if segment.is_empty() {
            return Err(Error::Unreachable { from, to });
        }
        if path.is_empty() {
            path.extend(segment);
        } else {
            path.extend(segment.into_iter().skip(1));
        }
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use geo::Point;

    use super::*;
    use crate::model::EdgeWeights;
    use crate::routing::metrics::path_weight;

    fn edge(duration_min: f64) -> EdgeWeights {
        EdgeWeights {
            car_distance_km: duration_min,
            car_duration_min: duration_min,
            walk_distance_km: duration_min,
            walk_duration_min: duration_min,
        }
    }

    /// Ring 0 -> 1 -> 2 -> 3 -> 0 with a direct chord 0 -> 3.
    fn ring_graph() -> CampusGraph {
        let mut graph = CampusGraph::new();
        for id in 0..4 {
            graph.add_node(id, Point::new(id as f64, 0.0), format!("n{id}"));
        }
        graph.add_edge(0, 1, edge(5.0));
        graph.add_edge(1, 2, edge(5.0));
        graph.add_edge(2, 3, edge(5.0));
        graph.add_edge(3, 0, edge(5.0));
        graph.add_edge(0, 3, edge(2.0));
        graph
    }

    #[test]
    fn no_waypoints_matches_plain_shortest_path() {
        let graph = ring_graph();
        let direct = shortest_path(&graph, 0, 3, Mode::Driving.duration_weight()).unwrap();
        let chained = path_with_waypoints(&graph, 0, 3, Mode::Driving, &[]).unwrap();
        assert_eq!(chained, direct);
        assert_eq!(chained, vec![0, 3]);
    }

    #[test]
    fn single_waypoint_forces_detour_and_sums_segment_weights() {
        let graph = ring_graph();
        let path = path_with_waypoints(&graph, 0, 3, Mode::Driving, &[2]).unwrap();

        assert_eq!(path, vec![0, 1, 2, 3]);
        assert_eq!(path.iter().filter(|&&node| node == 2).count(), 1);

        let kind = Mode::Driving.duration_weight();
        let via = path_weight(&graph, &path, kind).unwrap();
        let leg_a = path_weight(
            &graph,
            &shortest_path(&graph, 0, 2, kind).unwrap(),
            kind,
        )
        .unwrap();
        let leg_b = path_weight(
            &graph,
            &shortest_path(&graph, 2, 3, kind).unwrap(),
            kind,
        )
        .unwrap();
        assert_approx_eq!(via, leg_a + leg_b);
    }

    #[test]
    fn joint_nodes_are_not_duplicated() {
        let graph = ring_graph();
        let path = path_with_waypoints(&graph, 0, 0, Mode::Driving, &[2, 3]).unwrap();
        // 0 -> 2 (via 1), 2 -> 3, 3 -> 0: joints appear once each.
        assert_eq!(path, vec![0, 1, 2, 3, 0]);
    }

    #[test]
    fn unreachable_segment_fails_fast() {
        let mut graph = ring_graph();
        graph.add_node(4, Point::new(4.0, 0.0), "island");

        let result = path_with_waypoints(&graph, 0, 3, Mode::Driving, &[4]);
        assert!(matches!(
            result,
            Err(Error::Unreachable { from: 0, to: 4 })
        ));
    }

    #[test]
    fn unknown_waypoint_is_not_found() {
        let graph = ring_graph();
        let result = path_with_waypoints(&graph, 0, 3, Mode::Driving, &[9]);
        assert!(matches!(result, Err(Error::NodeNotFound(9))));
    }
}
