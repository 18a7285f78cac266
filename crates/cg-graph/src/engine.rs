//! Shortest-path engines and farthest-node extraction.
//!
//! # Pluggability
//!
//! Callers go through the [`ShortestPathEngine`] trait and pick an
//! implementation with [`EngineKind`].  Two engines ship:
//!
//! | Engine               | Algorithm                                        |
//! |----------------------|--------------------------------------------------|
//! | [`DijkstraEngine`]   | binary-heap relaxation, stale pops skipped       |
//! | [`BellmanFordEngine`]| `|V|-1` passes over every edge, early exit       |
//!
//! Edge weights are haversine distances and therefore never negative, which
//! is all Dijkstra needs.  Bellman–Ford is kept as a baseline to compare
//! against; it yields bit-identical distances for every node and carries no
//! negative-cycle handling.
//!
//! # Farthest node
//!
//! Both engines share [`ShortestPaths::eccentricity`]: scan slots in
//! ascending id order and keep the first strictly largest finite distance.
//! Ties therefore resolve to the lowest id, and the source (distance 0)
//! never wins.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use log::debug;
use ordered_float::OrderedFloat;

use cg_core::NodeId;

use crate::graph::ProximityGraph;
use crate::{GraphError, GraphResult};

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Single-source distances, in kilometres, indexed by graph slot.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: NodeId,
    ids:    Vec<NodeId>,
    dist:   Vec<f64>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance from the source to `id`; `None` if `id` is unreachable or
    /// not in the graph.
    pub fn distance(&self, id: NodeId) -> Option<f64> {
        let slot = self.ids.binary_search(&id).ok()?;
        Some(self.dist[slot]).filter(|d| d.is_finite())
    }

    /// `(id, distance)` for every reachable node, source included, in
    /// ascending id order.
    pub fn reachable(&self) -> impl Iterator<Item = (NodeId, f64)> + '_ {
        self.ids
            .iter()
            .zip(&self.dist)
            .filter(|(_, d)| d.is_finite())
            .map(|(&id, &d)| (id, d))
    }

    /// Number of reachable nodes, source included.
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|d| d.is_finite()).count()
    }

    /// The node with the strictly largest finite distance.
    ///
    /// Ties go to the lowest id.  `farthest` is `None` (and the distance
    /// `0.0`) when nothing but the source, or only zero-distance nodes, can
    /// be reached.
    pub fn eccentricity(&self) -> Eccentricity {
        let mut best = Eccentricity { source: self.source, farthest: None, distance_km: 0.0 };
        for (&id, &d) in self.ids.iter().zip(&self.dist) {
            if d.is_finite() && d > best.distance_km {
                best.farthest = Some(id);
                best.distance_km = d;
            }
        }
        best
    }
}

// ── Eccentricity ──────────────────────────────────────────────────────────────

/// Result of a farthest-node search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eccentricity {
    pub source:      NodeId,
    pub farthest:    Option<NodeId>,
    pub distance_km: f64,
}

// ── ShortestPathEngine trait ──────────────────────────────────────────────────

/// A single-source shortest-path algorithm over a [`ProximityGraph`].
pub trait ShortestPathEngine {
    /// Short human-readable name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Distances from `source` to every node of `graph`.
    ///
    /// Fails with [`GraphError::NodeNotFound`] if `source` is not in the graph.
    fn shortest_paths(&self, graph: &ProximityGraph, source: NodeId) -> GraphResult<ShortestPaths>;

    /// Farthest reachable node from `source`.
    fn farthest(&self, graph: &ProximityGraph, source: NodeId) -> GraphResult<Eccentricity> {
        let ecc = self.shortest_paths(graph, source)?.eccentricity();
        debug!(
            "{}: farthest from {} is {:?} at {:.3} km",
            self.name(),
            source,
            ecc.farthest,
            ecc.distance_km
        );
        Ok(ecc)
    }
}

/// Slot of `source` plus a distance vector primed with `+∞` / `0`.
fn init(graph: &ProximityGraph, source: NodeId) -> GraphResult<(usize, Vec<f64>)> {
    let src = graph.slot(source).ok_or(GraphError::NodeNotFound(source))?;
    let mut dist = vec![f64::INFINITY; graph.node_count()];
    dist[src] = 0.0;
    Ok((src, dist))
}

fn finish(graph: &ProximityGraph, source: NodeId, dist: Vec<f64>) -> ShortestPaths {
    ShortestPaths { source, ids: graph.node_ids().collect(), dist }
}

// ── DijkstraEngine ────────────────────────────────────────────────────────────

/// Priority-queue relaxation (Dijkstra).
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraEngine;

impl ShortestPathEngine for DijkstraEngine {
    fn name(&self) -> &'static str {
        "dijkstra"
    }

    fn shortest_paths(&self, graph: &ProximityGraph, source: NodeId) -> GraphResult<ShortestPaths> {
        let (src, mut dist) = init(graph, source)?;

        // Min-heap: (distance, slot).  Secondary key slot keeps pops
        // deterministic between equal distances.
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>> = BinaryHeap::new();
        heap.push(Reverse((OrderedFloat(0.0), src)));

        let mut settled = 0usize;
        while let Some(Reverse((OrderedFloat(d), u))) = heap.pop() {
            // Skip stale heap entries.
            if d > dist[u] {
                continue;
            }
            settled += 1;

            for e in graph.out_edges(u) {
                let candidate = d + e.weight_km;
                if candidate < dist[e.to] {
                    dist[e.to] = candidate;
                    heap.push(Reverse((OrderedFloat(candidate), e.to)));
                }
            }
        }

        debug!("dijkstra from {source}: {settled} pops settled");
        Ok(finish(graph, source, dist))
    }
}

// ── BellmanFordEngine ─────────────────────────────────────────────────────────

/// Iterative edge relaxation (Bellman–Ford).
#[derive(Copy, Clone, Debug, Default)]
pub struct BellmanFordEngine;

impl ShortestPathEngine for BellmanFordEngine {
    fn name(&self) -> &'static str {
        "bellman-ford"
    }

    fn shortest_paths(&self, graph: &ProximityGraph, source: NodeId) -> GraphResult<ShortestPaths> {
        let (_, mut dist) = init(graph, source)?;
        let n = graph.node_count();

        let mut passes = 0usize;
        for _ in 1..n {
            passes += 1;
            let mut changed = false;
            for u in 0..n {
                let du = dist[u];
                if !du.is_finite() {
                    continue;
                }
                for e in graph.out_edges(u) {
                    let candidate = du + e.weight_km;
                    if candidate < dist[e.to] {
                        dist[e.to] = candidate;
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }

        debug!("bellman-ford from {source}: {passes} of {} passes", n.saturating_sub(1));
        Ok(finish(graph, source, dist))
    }
}

// ── EngineKind ────────────────────────────────────────────────────────────────

/// Caller-facing engine selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EngineKind {
    #[default]
    Dijkstra,
    BellmanFord,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Dijkstra, EngineKind::BellmanFord];

    pub fn engine(self) -> &'static dyn ShortestPathEngine {
        match self {
            EngineKind::Dijkstra => &DijkstraEngine,
            EngineKind::BellmanFord => &BellmanFordEngine,
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.engine().name())
    }
}

impl FromStr for EngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "d" => Ok(EngineKind::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" | "bf" => Ok(EngineKind::BellmanFord),
            other => Err(format!(
                "unknown engine {other:?}: expected \"dijkstra\" or \"bellman-ford\""
            )),
        }
    }
}
