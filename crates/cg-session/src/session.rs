//! The `Session` controller.

use std::path::Path;

use log::{debug, info};

use cg_core::{Facility, FacilityStore, NodeId, RegionCode};
use cg_graph::{
    BellmanFordEngine, DijkstraEngine, Eccentricity, EngineKind, ProximityGraph,
    ShortestPathEngine, build, select_source,
};
use cg_ingest::{IngestReport, RecordLayout, load_facilities_csv, normalize_region};

use crate::placement::suggest_and_insert;
use crate::{SessionConfig, SessionError, SessionResult};

// ── EngineComparison ──────────────────────────────────────────────────────────

/// Both engines run from the same source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineComparison {
    pub dijkstra:     Eccentricity,
    pub bellman_ford: Eccentricity,
    /// `true` iff every node's distance matched bit for bit and both picked
    /// the same farthest node.
    pub agree:        bool,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Owns all mutable state: the full node set, the active region, the graph
/// built over that region, and the history of synthesized facilities.
///
/// The graph is rebuilt from scratch whenever the region, the threshold or
/// the node set changes; it is never edited in place.
///
/// # Example
///
/// ```rust,ignore
/// let (mut session, report) = Session::load_csv(path, &RecordLayout::default(), SessionConfig::default())?;
/// session.select_region("California")?;
/// let ecc = session.farthest(EngineKind::Dijkstra)?;
/// let placed = session.place_new_facility(EngineKind::Dijkstra)?;
/// ```
#[derive(Debug)]
pub struct Session {
    config:      SessionConfig,
    store:       FacilityStore,
    region:      Option<RegionCode>,
    graph:       ProximityGraph,
    /// Ids of synthesized facilities in creation order, across all regions.
    synthesized: Vec<NodeId>,
}

impl Session {
    /// Start a session over an existing node set.  No region is selected.
    pub fn new(store: FacilityStore, config: SessionConfig) -> SessionResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store,
            region: None,
            graph: ProximityGraph::empty(),
            synthesized: Vec::new(),
        })
    }

    /// Start a session over freshly ingested facilities (ids must be dense).
    pub fn from_facilities(facilities: Vec<Facility>, config: SessionConfig) -> SessionResult<Self> {
        Self::new(FacilityStore::from_facilities(facilities)?, config)
    }

    /// Load facilities from a CSV file and start a session over them.
    pub fn load_csv(
        path:   &Path,
        layout: &RecordLayout,
        config: SessionConfig,
    ) -> SessionResult<(Self, IngestReport)> {
        let (facilities, report) = load_facilities_csv(path, layout)?;
        info!("loaded {} from {}", report, path.display());
        Ok((Self::from_facilities(facilities, config)?, report))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &FacilityStore {
        &self.store
    }

    pub fn region(&self) -> Option<&RegionCode> {
        self.region.as_ref()
    }

    /// Graph over the active region; empty until a region is selected.
    pub fn graph(&self) -> &ProximityGraph {
        &self.graph
    }

    /// Synthesized facility ids, oldest first.
    pub fn synthesized(&self) -> &[NodeId] {
        &self.synthesized
    }

    // ── Region & threshold ────────────────────────────────────────────────

    /// Normalize `raw`, make it the active region, and rebuild the graph.
    ///
    /// Fails with [`SessionError::EmptyRegion`] (leaving the previous region
    /// and graph in place) if no facility belongs to it.
    pub fn select_region(&mut self, raw: &str) -> SessionResult<&ProximityGraph> {
        let region = normalize_region(raw).ok_or_else(|| SessionError::EmptyRegion(raw.to_owned()))?;
        let graph = self.build_for(&region)?;
        info!(
            "region {region}: {} facilities, {} links within {} km",
            graph.node_count(),
            graph.edge_count(),
            self.config.threshold_km
        );
        self.region = Some(region);
        self.graph = graph;
        Ok(&self.graph)
    }

    /// Change the proximity threshold; rebuilds the graph if a region is
    /// active.
    pub fn set_threshold(&mut self, threshold_km: f64) -> SessionResult<()> {
        let config = SessionConfig { threshold_km, ..self.config.clone() };
        config.validate()?;
        self.config = config;
        if let Some(region) = self.region.clone() {
            self.graph = self.build_for(&region)?;
        }
        Ok(())
    }

    /// Build the region node set for `region` and a graph over it.
    fn build_for(&self, region: &RegionCode) -> SessionResult<ProximityGraph> {
        let nodes = self.store.in_region(region);
        if nodes.is_empty() {
            return Err(SessionError::EmptyRegion(region.to_string()));
        }
        Ok(build(nodes, self.config.threshold_km)?)
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Source for the next search, per [`select_source`].
    pub fn source(&self) -> SessionResult<NodeId> {
        if self.region.is_none() {
            return Err(SessionError::NoRegionSelected);
        }
        Ok(select_source(&self.graph, &self.synthesized)?)
    }

    /// Farthest facility from the current source.
    pub fn farthest(&self, kind: EngineKind) -> SessionResult<Eccentricity> {
        let source = self.source()?;
        Ok(kind.engine().farthest(&self.graph, source)?)
    }

    /// Farthest search with [`SessionConfig::engine`].
    pub fn farthest_default(&self) -> SessionResult<Eccentricity> {
        self.farthest(self.config.engine)
    }

    /// Run both engines from the current source and compare them.
    pub fn compare_engines(&self) -> SessionResult<EngineComparison> {
        let source = self.source()?;
        let d = DijkstraEngine.shortest_paths(&self.graph, source)?;
        let b = BellmanFordEngine.shortest_paths(&self.graph, source)?;

        let distances_match = self.graph.node_ids().all(|id| {
            d.distance(id).map(f64::to_bits) == b.distance(id).map(f64::to_bits)
        });
        let (dijkstra, bellman_ford) = (d.eccentricity(), b.eccentricity());
        let agree = distances_match && dijkstra == bellman_ford;
        debug!("engine comparison from {source}: agree = {agree}");

        Ok(EngineComparison { dijkstra, bellman_ford, agree })
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Search for the farthest facility, place a new one halfway to it, and
    /// rebuild the graph.  The new facility becomes the source of the next
    /// search in this region.
    ///
    /// Fails with [`SessionError::NothingReachable`] if the source has no
    /// reachable facility at a positive distance; nothing is inserted then.
    pub fn place_new_facility(&mut self, kind: EngineKind) -> SessionResult<Facility> {
        let ecc = self.farthest(kind)?;
        let farthest = ecc.farthest.ok_or(SessionError::NothingReachable(ecc.source))?;
        self.place_between(ecc.source, farthest)
    }

    /// Place a facility halfway between two facilities of the active graph
    /// and rebuild.
    pub fn place_between(&mut self, source: NodeId, farthest: NodeId) -> SessionResult<Facility> {
        let region = self.region.clone().ok_or(SessionError::NoRegionSelected)?;
        let facility = suggest_and_insert(&mut self.store, &self.graph, source, farthest, &region)?;
        self.synthesized.push(facility.id);
        self.graph = self.build_for(&region)?;
        Ok(facility)
    }
}
