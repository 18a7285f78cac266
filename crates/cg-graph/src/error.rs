//! Graph-subsystem error type.

use thiserror::Error;

use cg_core::NodeId;

/// Errors produced by `cg-graph`.  All of them are recoverable at the call
/// site: nothing here means the graph itself is corrupt.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in graph")]
    NodeNotFound(NodeId),

    #[error("node {0} was supplied twice to the graph builder")]
    DuplicateNode(NodeId),

    #[error("no suitable source: no node in the graph has a neighbor")]
    NoSuitableSource,
}

pub type GraphResult<T> = Result<T, GraphError>;
