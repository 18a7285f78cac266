//! Placement heuristic: put a new facility halfway between a source and the
//! farthest facility reachable from it.
//!
//! The midpoint is planar (`GeoPoint::planar_midpoint`), not geodesic.  The
//! new facility gets the next free id, the active region and no label, is
//! marked [`Origin::Synthesized`], and is appended to the full node set.  The
//! caller owns the graph and must rebuild it afterwards; see
//! [`Session::place_new_facility`].
//!
//! [`Origin::Synthesized`]: cg_core::Origin::Synthesized
//! [`Session::place_new_facility`]: crate::Session::place_new_facility

use log::info;

use cg_core::{Facility, FacilityStore, NodeId, RegionCode};
use cg_graph::{GraphError, ProximityGraph};

use crate::SessionResult;

/// Insert a facility at the midpoint of `source` and `farthest`.
///
/// Both ids must be in `graph`; otherwise nothing is inserted and the call
/// fails with [`GraphError::NodeNotFound`].
pub fn suggest_and_insert(
    store:    &mut FacilityStore,
    graph:    &ProximityGraph,
    source:   NodeId,
    farthest: NodeId,
    region:   &RegionCode,
) -> SessionResult<Facility> {
    let a = graph.facility(source).ok_or(GraphError::NodeNotFound(source))?;
    let b = graph.facility(farthest).ok_or(GraphError::NodeNotFound(farthest))?;
    let pos = a.pos.planar_midpoint(b.pos);

    let id = store.push_synthesized(pos, region.clone())?;
    info!("placed facility {id} at {pos} in {region} (between {source} and {farthest})");
    Ok(store.try_get(id)?.clone())
}
