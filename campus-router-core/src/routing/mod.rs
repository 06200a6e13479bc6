//! Shortest-path search and path composition over the campus graph

pub mod dijkstra;
pub mod matrix;
pub mod metrics;
pub mod waypoints;

pub use dijkstra::{shortest_path, shortest_path_costs};
pub use matrix::cost_matrix;
pub use metrics::{path_distance, path_duration, path_weight};
pub use waypoints::path_with_waypoints;
