//! Data model for campus routing
//!
//! Landmarks are the input records; the graph holds one node per landmark
//! and a directed edge per ordered pair that the travel matrix covers.

pub mod graph;
pub mod landmark;

pub use graph::{CampusGraph, EdgeWeights, Mode, Node, WeightKind};
pub use landmark::Landmark;
