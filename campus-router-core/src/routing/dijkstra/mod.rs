//! Dijkstra search over a selectable edge weight.
//!
//! Both variants use a lazy-deletion binary heap: a relaxation pushes a
//! fresh entry instead of decreasing a key, and entries whose recorded
//! cost is stale are skipped on extraction. Edge weights must be
//! non-negative; this is a precondition, not validated here.

mod regular;
mod state;
mod traced;

pub use regular::shortest_path_costs;
pub use traced::shortest_path;
