// Re-export key components
pub use crate::error::Error;
pub use crate::loading::{TravelMatrix, build_campus_graph};
pub use crate::model::{CampusGraph, EdgeWeights, Landmark, Mode, Node, WeightKind};
pub use crate::routing::{
    cost_matrix, path_distance, path_duration, path_weight, path_with_waypoints, shortest_path,
    shortest_path_costs,
};
pub use crate::NodeId;
