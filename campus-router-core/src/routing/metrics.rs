use itertools::Itertools;

use crate::model::{CampusGraph, Mode, WeightKind};
use crate::{Error, NodeId};

/// Sum of the chosen scalar over every consecutive pair of `path`.
///
/// A path of zero or one nodes weighs 0.
///
/// # Errors
///
/// Returns [`Error::EdgeNotFound`] if any consecutive pair has no edge.
pub fn path_weight(graph: &CampusGraph, path: &[NodeId], kind: WeightKind) -> Result<f64, Error> {
    path.iter()
        .tuple_windows()
        .map(|(&from, &to)| graph.edge_weight(from, to, kind))
        .sum()
}

/// Total distance of `path` in kilometers under the mode's distance weight.
pub fn path_distance(graph: &CampusGraph, path: &[NodeId], mode: Mode) -> Result<f64, Error> {
    path_weight(graph, path, mode.distance_weight())
}

/// Total travel time of `path` in minutes under the mode's duration weight.
pub fn path_duration(graph: &CampusGraph, path: &[NodeId], mode: Mode) -> Result<f64, Error> {
    path_weight(graph, path, mode.duration_weight())
}
