//! Proximity graph construction.
//!
//! # Pair scan
//!
//! An edge joins every unordered pair `(i, j)`, `i < j` in ascending id
//! order, whose haversine distance is `<= threshold_km`.  The weight is
//! `distance_km(nodes[i], nodes[j])`, computed exactly once and written to
//! both adjacency lists.
//!
//! Two scans produce that edge set:
//!
//! - [`PairScan::BruteForce`] evaluates all `n·(n-1)/2` pairs.
//! - [`PairScan::LatitudeBand`] bulk-loads an R-tree over `[lat, lon]` and
//!   only evaluates pairs whose latitudes differ by at most the threshold
//!   expressed in degrees.  Two points `Δ` degrees of latitude apart are at
//!   least `Δ · KM_PER_DEGREE` km apart, so no in-threshold pair is skipped;
//!   candidates are still checked with the exact distance, so the result is
//!   identical to the brute-force scan, weights included.
//!
//! A threshold `<= 0` (or NaN) yields an edgeless graph.  Duplicate
//! coordinates yield a zero-weight edge, which is legal.

use log::debug;
use rstar::{AABB, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use cg_core::{Facility, KM_PER_DEGREE};

use crate::graph::{Edge, ProximityGraph};
use crate::{GraphError, GraphResult};

/// Relative slack added to the latitude band so rounding in the degree
/// conversion can never drop a pair sitting exactly on the threshold.
const BAND_SLACK: f64 = 1e-9;

// ── R-tree entry ──────────────────────────────────────────────────────────────

/// `[lat, lon]` point tagged with its slot in the sorted node array.
struct SlotEntry {
    point: [f64; 2],
    slot:  usize,
}

impl RTreeObject for SlotEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── PairScan ──────────────────────────────────────────────────────────────────

/// How the builder enumerates candidate pairs.  Both variants yield the same
/// graph; they differ only in how many distances get evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PairScan {
    BruteForce,
    #[default]
    LatitudeBand,
}

// ── ProximityGraphBuilder ─────────────────────────────────────────────────────

/// Collect facilities, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use cg_core::{Facility, GeoPoint, NodeId, RegionCode};
/// use cg_graph::ProximityGraphBuilder;
///
/// let ca = RegionCode::new("CA").unwrap();
/// let mut b = ProximityGraphBuilder::new(5.0);
/// b.add_node(Facility::new(NodeId(0), GeoPoint::new(0.0, 0.0), ca.clone()));
/// b.add_node(Facility::new(NodeId(1), GeoPoint::new(0.0, 0.01), ca.clone()));
/// b.add_node(Facility::new(NodeId(2), GeoPoint::new(0.0, 10.0), ca));
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// ```
pub struct ProximityGraphBuilder {
    nodes:        Vec<Facility>,
    threshold_km: f64,
    scan:         PairScan,
}

impl ProximityGraphBuilder {
    pub fn new(threshold_km: f64) -> Self {
        Self { nodes: Vec::new(), threshold_km, scan: PairScan::default() }
    }

    pub fn with_capacity(threshold_km: f64, nodes: usize) -> Self {
        Self { nodes: Vec::with_capacity(nodes), threshold_km, scan: PairScan::default() }
    }

    /// Override the pair enumeration strategy.
    pub fn scan(mut self, scan: PairScan) -> Self {
        self.scan = scan;
        self
    }

    pub fn add_node(&mut self, facility: Facility) {
        self.nodes.push(facility);
    }

    pub fn extend(&mut self, facilities: impl IntoIterator<Item = Facility>) {
        self.nodes.extend(facilities);
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Consume the builder and produce a [`ProximityGraph`].
    ///
    /// Nodes are sorted by id first, so the result does not depend on
    /// insertion order.  Fails with [`GraphError::DuplicateNode`] if an id was
    /// added twice.
    pub fn build(self) -> GraphResult<ProximityGraph> {
        let threshold_km = self.threshold_km;
        let mut nodes = self.nodes;
        nodes.sort_by_key(|f| f.id);

        let mut slots = FxHashMap::with_capacity_and_hasher(nodes.len(), Default::default());
        for (slot, f) in nodes.iter().enumerate() {
            if slots.insert(f.id, slot).is_some() {
                return Err(GraphError::DuplicateNode(f.id));
            }
        }

        let mut adjacency: Vec<Vec<Edge>> = vec![Vec::new(); nodes.len()];
        let mut edge_count = 0usize;
        let mut evaluated = 0usize;

        // NaN fails this comparison too.
        if threshold_km > 0.0 {
            let mut link = |i: usize, j: usize| {
                evaluated += 1;
                let d = nodes[i].pos.distance_km(nodes[j].pos);
                if d <= threshold_km {
                    adjacency[i].push(Edge { to: j, weight_km: d });
                    adjacency[j].push(Edge { to: i, weight_km: d });
                    edge_count += 1;
                }
            };

            match self.scan {
                PairScan::BruteForce => {
                    for i in 0..nodes.len() {
                        for j in (i + 1)..nodes.len() {
                            link(i, j);
                        }
                    }
                }
                PairScan::LatitudeBand => {
                    let tree = RTree::bulk_load(
                        nodes
                            .iter()
                            .enumerate()
                            .map(|(slot, f)| SlotEntry { point: [f.pos.lat, f.pos.lon], slot })
                            .collect(),
                    );
                    let band = threshold_km / KM_PER_DEGREE * (1.0 + BAND_SLACK);
                    let mut candidates: Vec<usize> = Vec::new();
                    for i in 0..nodes.len() {
                        let lat = nodes[i].pos.lat;
                        let envelope = AABB::from_corners(
                            [lat - band, f64::MIN],
                            [lat + band, f64::MAX],
                        );
                        candidates.clear();
                        candidates.extend(
                            tree.locate_in_envelope(&envelope)
                                .map(|e| e.slot)
                                .filter(|&j| j > i),
                        );
                        candidates.sort_unstable();
                        for &j in &candidates {
                            link(i, j);
                        }
                    }
                }
            }
        }

        for adj in &mut adjacency {
            adj.sort_unstable_by_key(|e| e.to);
        }

        debug!(
            "built proximity graph: {} nodes, {} edges, threshold {} km, {} distances evaluated ({:?})",
            nodes.len(),
            edge_count,
            threshold_km,
            evaluated,
            self.scan,
        );

        Ok(ProximityGraph { nodes, slots, adjacency, threshold_km, edge_count })
    }
}

/// Build a graph over `nodes` with the default pair scan.
pub fn build(nodes: Vec<Facility>, threshold_km: f64) -> GraphResult<ProximityGraph> {
    let mut b = ProximityGraphBuilder::with_capacity(threshold_km, nodes.len());
    b.extend(nodes);
    b.build()
}
