use log::warn;
use rayon::prelude::*;

use super::dijkstra::shortest_path_costs;
use crate::model::{CampusGraph, Mode};

/// All-pairs travel time matrix (minutes) over the built graph.
///
/// Rows follow ascending node id order; `result[i][j]` is the cost of the
/// shortest route from the i-th to the j-th node under the mode's duration
/// weight, `None` when unreachable. Rows are computed in parallel, which is
/// safe because searches never mutate the graph.
pub fn cost_matrix(graph: &CampusGraph, mode: Mode) -> Vec<Vec<Option<f64>>> {
    let ids = graph.node_ids();
    let kind = mode.duration_weight();

    ids.par_iter()
        .map(|&source| match shortest_path_costs(graph, source, kind) {
            Ok(costs) => ids.iter().map(|target| costs.get(target).copied()).collect(),
            Err(e) => {
                warn!("cost matrix row failed for node {source}: {e}");
                vec![None; ids.len()]
            }
        })
        .collect()
}
