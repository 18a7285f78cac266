//! Proximity graph representation.
//!
//! # Data layout
//!
//! Nodes are stored densely in ascending `NodeId` order; the position of a
//! node in that array is its *slot*.  Adjacency lists refer to slots, not
//! ids, so the engines index plain `Vec`s on their hot paths.  An
//! `FxHashMap<NodeId, usize>` translates public ids into slots.
//!
//! Edges are undirected and stored once per endpoint.  Both halves carry the
//! same `f64` (computed once by the builder), each adjacency list is sorted
//! by slot, and there are no self-loops or parallel edges.
//!
//! A graph is never edited in place.  When the region or the node set
//! changes the owner builds a fresh one with [`ProximityGraphBuilder`].
//!
//! [`ProximityGraphBuilder`]: crate::ProximityGraphBuilder

use rustc_hash::FxHashMap;

use cg_core::{Facility, NodeId};

// ── Edge ──────────────────────────────────────────────────────────────────────

/// One half of an undirected edge, as seen from its owning slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Edge {
    pub(crate) to:        usize,
    pub(crate) weight_km: f64,
}

// ── ProximityGraph ────────────────────────────────────────────────────────────

/// Undirected graph over one region's facilities, with an edge between every
/// pair whose haversine distance is within the build threshold.
///
/// Do not construct directly; use [`ProximityGraphBuilder`](crate::ProximityGraphBuilder)
/// or [`build`](crate::build).
#[derive(Clone, Debug)]
pub struct ProximityGraph {
    pub(crate) nodes:        Vec<Facility>,
    pub(crate) slots:        FxHashMap<NodeId, usize>,
    pub(crate) adjacency:    Vec<Vec<Edge>>,
    pub(crate) threshold_km: f64,
    pub(crate) edge_count:   usize,
}

impl ProximityGraph {
    /// A graph with no nodes.
    pub fn empty() -> Self {
        Self {
            nodes:        Vec::new(),
            slots:        FxHashMap::default(),
            adjacency:    Vec::new(),
            threshold_km: 0.0,
            edge_count:   0,
        }
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Distance threshold the graph was built with, in kilometres.
    pub fn threshold_km(&self) -> f64 {
        self.threshold_km
    }

    // ── Node access ───────────────────────────────────────────────────────

    pub fn contains(&self, id: NodeId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn facility(&self, id: NodeId) -> Option<&Facility> {
        self.slot(id).map(|s| &self.nodes[s])
    }

    /// All facilities in ascending id order.  This is the graph's node-set
    /// iteration order wherever an order matters (source selection, ties).
    pub fn facilities(&self) -> impl Iterator<Item = &Facility> + '_ {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|f| f.id)
    }

    // ── Adjacency ─────────────────────────────────────────────────────────

    /// `(neighbor, weight_km)` pairs of `id`, in ascending neighbor id.
    /// Empty for an unknown id.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.slot(id)
            .map(|s| self.adjacency[s].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|e| (self.nodes[e.to].id, e.weight_km))
    }

    pub fn degree(&self, id: NodeId) -> usize {
        self.slot(id).map_or(0, |s| self.adjacency[s].len())
    }

    /// Weight of the edge `a`–`b`, if there is one.
    pub fn edge_weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        let (sa, sb) = (self.slot(a)?, self.slot(b)?);
        self.adjacency[sa]
            .binary_search_by_key(&sb, |e| e.to)
            .ok()
            .map(|i| self.adjacency[sa][i].weight_km)
    }

    /// Every undirected edge once, as `(low id, high id, weight_km)`, ordered
    /// by low id then high id.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(move |(s, adj)| {
            adj.iter()
                .filter(move |e| e.to > s)
                .map(move |e| (self.nodes[s].id, self.nodes[e.to].id, e.weight_km))
        })
    }

    // ── Slot helpers (engine internals) ───────────────────────────────────

    #[inline]
    pub(crate) fn slot(&self, id: NodeId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    #[inline]
    pub(crate) fn out_edges(&self, slot: usize) -> &[Edge] {
        &self.adjacency[slot]
    }
}

impl Default for ProximityGraph {
    fn default() -> Self {
        Self::empty()
    }
}
