//! Source selection for farthest-node searches.
//!
//! The rule, in order:
//!
//! 1. If no node of the graph has a neighbor, the search fails with
//!    [`GraphError::NoSuitableSource`] and no engine runs.
//! 2. Otherwise, if any synthesized facility (one created by the placement
//!    heuristic) is in the graph, the most recently synthesized one is the
//!    source.  It is used even if it has no neighbors itself; the search
//!    then simply finds nothing.
//! 3. Otherwise the source is the first node, in ascending id order, with at
//!    least one neighbor.
//!
//! Rule 2 makes repeated placement rounds walk outward from the last
//! placement instead of restarting at the same original facility.

use cg_core::NodeId;

use crate::{GraphError, GraphResult, ProximityGraph};

/// Pick the search source.  `synthesized` lists synthesized ids in creation
/// order (oldest first); ids outside `graph` are ignored.
pub fn select_source(graph: &ProximityGraph, synthesized: &[NodeId]) -> GraphResult<NodeId> {
    let first_linked = graph
        .node_ids()
        .find(|&id| graph.degree(id) > 0)
        .ok_or(GraphError::NoSuitableSource)?;

    Ok(synthesized
        .iter()
        .rev()
        .copied()
        .find(|&id| graph.contains(id))
        .unwrap_or(first_linked))
}
