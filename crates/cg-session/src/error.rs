use thiserror::Error;

use cg_core::{CoreError, NodeId};
use cg_graph::GraphError;
use cg_ingest::IngestError;

/// Session-level errors.  Every variant leaves the session in the state it
/// was in before the failing call, so the caller can simply re-prompt.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no facilities in region {0:?}")]
    EmptyRegion(String),

    #[error("no region selected")]
    NoRegionSelected,

    #[error("nothing reachable from source {0}")]
    NothingReachable(NodeId),

    #[error("session configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

pub type SessionResult<T> = Result<T, SessionError>;
