//! Shortest-path routing between named campus landmarks.
//!
//! The graph is populated once from a pairwise travel matrix (one per
//! travel mode) supplied by an external routing provider, and is read-only
//! afterwards. Searches are plain Dijkstra over a selectable edge weight;
//! multi-stop requests are answered by chaining pairwise searches.

pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{TravelMatrix, build_campus_graph};
pub use model::{CampusGraph, EdgeWeights, Landmark, Mode, Node, WeightKind};
pub use routing::{
    cost_matrix, path_distance, path_duration, path_weight, path_with_waypoints, shortest_path,
    shortest_path_costs,
};

/// Dense node identifier, assigned in landmark ingestion order (0..N-1).
pub type NodeId = usize;
