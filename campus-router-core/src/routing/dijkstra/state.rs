use std::cmp::Ordering;

use crate::NodeId;

#[derive(Copy, Clone, PartialEq)]
pub(super) struct State {
    pub(super) cost: f64,
    pub(super) node: NodeId,
}

impl Eq for State {}

// Min-heap by cost (reversed from standard Rust BinaryHeap). Costs are
// finite and non-negative, so total_cmp agrees with the usual order.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
