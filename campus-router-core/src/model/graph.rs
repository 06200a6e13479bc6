use std::str::FromStr;

use geo::Point;
use hashbrown::HashMap;

use crate::{Error, NodeId};

/// One of the four scalar weights carried by every edge.
///
/// A closed enum rather than a string key, so an unrecognized attribute is
/// rejected at the parse boundary instead of silently weighing zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightKind {
    CarDistance,
    CarDuration,
    WalkDistance,
    WalkDuration,
}

impl FromStr for WeightKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "car-distance" => Ok(Self::CarDistance),
            "car-duration" => Ok(Self::CarDuration),
            "walk-distance" => Ok(Self::WalkDistance),
            "walk-duration" => Ok(Self::WalkDuration),
            other => Err(Error::UnknownWeight(other.to_string())),
        }
    }
}

/// Travel mode selector, determining which weight pair is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Driving,
    Walking,
}

impl Mode {
    pub fn duration_weight(self) -> WeightKind {
        match self {
            Self::Driving => WeightKind::CarDuration,
            Self::Walking => WeightKind::WalkDuration,
        }
    }

    pub fn distance_weight(self) -> WeightKind {
        match self {
            Self::Driving => WeightKind::CarDistance,
            Self::Walking => WeightKind::WalkDistance,
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}

/// Graph node for a single landmark.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Landmark coordinates (x = lon, y = lat)
    pub geometry: Point<f64>,
    /// Display name of the landmark
    pub label: String,
}

/// Directed edge weights, already converted to kilometers and minutes.
///
/// All four values are non-negative. Edges are asymmetric: they come from a
/// real-world routing matrix, so A->B may differ from B->A.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeWeights {
    pub car_distance_km: f64,
    pub car_duration_min: f64,
    pub walk_distance_km: f64,
    pub walk_duration_min: f64,
}

impl EdgeWeights {
    pub fn get(&self, kind: WeightKind) -> f64 {
        match kind {
            WeightKind::CarDistance => self.car_distance_km,
            WeightKind::CarDuration => self.car_duration_min,
            WeightKind::WalkDistance => self.walk_distance_km,
            WeightKind::WalkDuration => self.walk_duration_min,
        }
    }
}

/// The campus graph: one node per landmark, directed weighted edges between
/// them.
///
/// Built once at startup and read-only afterwards; searches never mutate it,
/// so a shared reference may be used from multiple threads.
#[derive(Debug, Clone, Default)]
pub struct CampusGraph {
    nodes: HashMap<NodeId, Node>,
    edges: HashMap<NodeId, HashMap<NodeId, EdgeWeights>>,
}

impl CampusGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: HashMap::with_capacity(nodes),
            edges: HashMap::with_capacity(nodes),
        }
    }

    /// Inserts the node at `id`. A duplicate id overwrites the previous
    /// node (last write wins).
    pub fn add_node(&mut self, id: NodeId, geometry: Point<f64>, label: impl Into<String>) {
        self.nodes.insert(
            id,
            Node {
                id,
                geometry,
                label: label.into(),
            },
        );
    }

    /// Inserts the directed edge `from -> to`. A duplicate pair overwrites
    /// the previous weights (last write wins).
    ///
    /// The caller must not pass `from == to`; self-loops and absent matrix
    /// cells are skipped during ingestion.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weights: EdgeWeights) {
        debug_assert_ne!(from, to, "self-loops are excluded at ingestion");
        self.edges.entry(from).or_default().insert(to, weights);
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Display name of a node.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NodeNotFound`] if the id is absent.
    pub fn node_label(&self, id: NodeId) -> Result<&str, Error> {
        self.nodes
            .get(&id)
            .map(|node| node.label.as_str())
            .ok_or(Error::NodeNotFound(id))
    }

    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&EdgeWeights> {
        self.edges.get(&from)?.get(&to)
    }

    /// The requested scalar of the edge `from -> to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EdgeNotFound`] if no such edge exists.
    pub fn edge_weight(&self, from: NodeId, to: NodeId, kind: WeightKind) -> Result<f64, Error> {
        self.edge(from, to)
            .map(|weights| weights.get(kind))
            .ok_or(Error::EdgeNotFound { from, to })
    }

    /// Outgoing neighbors of `from` with their edge weights.
    pub fn neighbors(&self, from: NodeId) -> impl Iterator<Item = (NodeId, &EdgeWeights)> {
        self.edges
            .get(&from)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(&to, weights)| (to, weights)))
    }

    /// Node ids in ascending order, for stable listing.
    pub fn node_ids(&self) -> Vec<NodeId> {
        let mut ids: Vec<NodeId> = self.nodes.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
