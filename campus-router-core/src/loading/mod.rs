//! Graph construction from provider travel matrices

pub mod builder;
pub mod matrix;

pub use builder::build_campus_graph;
pub use matrix::TravelMatrix;
