//! Workspace base error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` or wrap it as one variant, whichever keeps their
//! error sites clean.

use thiserror::Error;

use crate::NodeId;

/// The error type for `cg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("node id space exhausted at {0} facilities")]
    IdSpaceExhausted(usize),
}

/// Shorthand result type for `cg-core`.
pub type CoreResult<T> = Result<T, CoreError>;
