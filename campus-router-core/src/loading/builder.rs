use log::{debug, info};

use super::matrix::TravelMatrix;
use crate::model::{CampusGraph, EdgeWeights, Landmark};
use crate::Error;

/// Builds the campus graph from an ordered landmark table and one travel
/// matrix per mode.
///
/// Node ids are assigned by landmark position. A directed edge `i -> j` is
/// created only when both matrices carry a complete cell for the pair;
/// diagonal and unreachable cells are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the landmark table is empty or either
/// matrix is not square with one row per landmark.
pub fn build_campus_graph(
    landmarks: &[Landmark],
    car: &TravelMatrix,
    walk: &TravelMatrix,
) -> Result<CampusGraph, Error> {
    if landmarks.is_empty() {
        return Err(Error::InvalidData("no landmarks provided".to_string()));
    }
    car.validate(landmarks.len())?;
    walk.validate(landmarks.len())?;

    let n = landmarks.len();
    let mut graph = CampusGraph::with_capacity(n);

    for (id, landmark) in landmarks.iter().enumerate() {
        graph.add_node(id, landmark.geometry(), landmark.name.clone());
    }

    let mut skipped = 0usize;
    for from in 0..n {
        for to in 0..n {
            if from == to {
                continue;
            }
            let (Some(car_cell), Some(walk_cell)) = (car.cell(from, to), walk.cell(from, to))
            else {
                skipped += 1;
                continue;
            };
            graph.add_edge(
                from,
                to,
                EdgeWeights {
                    car_distance_km: car_cell.distance_km(),
                    car_duration_min: car_cell.duration_min(),
                    walk_distance_km: walk_cell.distance_km(),
                    walk_duration_min: walk_cell.duration_min(),
                },
            );
        }
    }

    if skipped > 0 {
        debug!("skipped {skipped} incomplete matrix cells");
    }
    info!(
        "campus graph built: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    Ok(graph)
}
