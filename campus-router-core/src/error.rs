use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("node {0} does not exist")]
    NodeNotFound(NodeId),
    #[error("no edge between nodes {from} and {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },
    #[error("unknown weight attribute: {0}")]
    UnknownWeight(String),
    #[error("unknown travel mode: {0}")]
    UnknownMode(String),
    #[error("no route between nodes {from} and {to}")]
    Unreachable { from: NodeId, to: NodeId },
    #[error("invalid data: {0}")]
    InvalidData(String),
}
