//! Unit tests for cg-session.

#[cfg(test)]
mod helpers {
    use cg_core::{FacilityStore, GeoPoint, RegionCode};

    use crate::{Session, SessionConfig};

    pub fn region(code: &str) -> RegionCode {
        RegionCode::new(code).unwrap()
    }

    pub fn store(points: &[(&str, f64, f64)]) -> FacilityStore {
        let mut store = FacilityStore::new();
        for (i, &(code, lat, lon)) in points.iter().enumerate() {
            store.push(GeoPoint::new(lat, lon), region(code), Some(format!("F{i}"))).unwrap();
        }
        store
    }

    pub fn session(points: &[(&str, f64, f64)], threshold_km: f64) -> Session {
        let config = SessionConfig { threshold_km, ..SessionConfig::default() };
        Session::new(store(points), config).unwrap()
    }
}

// ── Configuration ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use cg_graph::EngineKind;

    use super::helpers::session;
    use crate::{DEFAULT_THRESHOLD_KM, Session, SessionConfig, SessionError};

    #[test]
    fn defaults() {
        let c = SessionConfig::default();
        assert_eq!(c.threshold_km, DEFAULT_THRESHOLD_KM);
        assert_eq!(c.threshold_km, 2.0);
        assert_eq!(c.engine, EngineKind::Dijkstra);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_bad_thresholds() {
        for t in [-0.5, f64::NAN, f64::INFINITY] {
            let c = SessionConfig { threshold_km: t, ..SessionConfig::default() };
            assert!(matches!(c.validate(), Err(SessionError::Config(_))), "{t}");
            assert!(Session::new(Default::default(), c).is_err());
        }
        assert!(SessionConfig { threshold_km: 0.0, ..SessionConfig::default() }.validate().is_ok());
    }

    #[test]
    fn set_threshold_rebuilds_active_graph() {
        let mut s = session(&[("CA", 34.0, -118.0), ("CA", 34.0, -117.95)], 2.0);
        s.select_region("CA").unwrap();
        assert_eq!(s.graph().edge_count(), 0);

        s.set_threshold(10.0).unwrap();
        assert_eq!(s.graph().edge_count(), 1);
        assert_eq!(s.graph().threshold_km(), 10.0);

        assert!(s.set_threshold(-1.0).is_err());
        assert_eq!(s.config().threshold_km, 10.0);
    }
}

// ── Region selection ──────────────────────────────────────────────────────────

#[cfg(test)]
mod regions {
    use cg_core::NodeId;

    use super::helpers::{region, session};
    use crate::SessionError;

    fn mixed() -> crate::Session {
        session(
            &[
                ("CA", 34.0, -118.0),
                ("NV", 39.5, -119.8),
                ("CA", 34.0, -117.99),
                ("NV", 39.5, -119.79),
            ],
            2.0,
        )
    }

    #[test]
    fn select_by_full_name() {
        let mut s = mixed();
        let g = s.select_region("california").unwrap();
        let ids: Vec<_> = g.node_ids().collect();
        assert_eq!(ids, vec![NodeId(0), NodeId(2)]);
        assert_eq!(s.region(), Some(&region("CA")));
    }

    #[test]
    fn empty_region_keeps_previous_state() {
        let mut s = mixed();
        s.select_region("NV").unwrap();
        let err = s.select_region("Texas").unwrap_err();
        assert!(matches!(err, SessionError::EmptyRegion(ref r) if r == "TX"));
        assert_eq!(s.region(), Some(&region("NV")));
        assert_eq!(s.graph().node_count(), 2);

        assert!(matches!(s.select_region("   "), Err(SessionError::EmptyRegion(_))));
    }

    #[test]
    fn searches_need_a_region() {
        let s = mixed();
        assert!(s.graph().is_empty());
        assert!(matches!(s.source(), Err(SessionError::NoRegionSelected)));
        assert!(matches!(s.farthest_default(), Err(SessionError::NoRegionSelected)));
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search {
    use cg_core::NodeId;
    use cg_graph::{EngineKind, GraphError};

    use super::helpers::session;
    use crate::SessionError;

    #[test]
    fn source_is_first_connected_node() {
        // 0 is isolated; 1–2–3 form a chain.
        let mut s = session(
            &[
                ("WA", 47.0, -120.0),
                ("WA", 47.6, -122.30),
                ("WA", 47.6, -122.31),
                ("WA", 47.6, -122.32),
            ],
            1.0,
        );
        s.select_region("WA").unwrap();
        assert_eq!(s.source().unwrap(), NodeId(1));

        for kind in EngineKind::ALL {
            let ecc = s.farthest(kind).unwrap();
            assert_eq!(ecc.source, NodeId(1));
            assert_eq!(ecc.farthest, Some(NodeId(3)), "{kind}");
            assert!(ecc.distance_km > 1.0);
        }
    }

    #[test]
    fn no_suitable_source_when_nothing_linked() {
        let mut s = session(&[("OR", 45.0, -122.0), ("OR", 45.0, -122.5)], 0.0);
        s.select_region("OR").unwrap();
        assert!(matches!(
            s.farthest(EngineKind::BellmanFord),
            Err(SessionError::Graph(GraphError::NoSuitableSource))
        ));
    }

    #[test]
    fn engines_agree_on_session_graph() {
        let mut s = session(
            &[
                ("CO", 39.70, -105.00),
                ("CO", 39.71, -105.00),
                ("CO", 39.72, -105.01),
                ("CO", 39.70, -105.02),
                ("CO", 39.73, -105.00),
                ("CO", 40.50, -104.00),
            ],
            2.0,
        );
        s.select_region("CO").unwrap();
        let cmp = s.compare_engines().unwrap();
        assert!(cmp.agree);
        assert_eq!(cmp.dijkstra, cmp.bellman_ford);
        assert!(cmp.dijkstra.farthest.is_some());
    }
}

// ── Placement ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod placement {
    use cg_core::{GeoPoint, NodeId};
    use cg_graph::{EngineKind, GraphError};

    use super::helpers::{region, session};
    use crate::SessionError;

    #[test]
    fn midpoint_inserted_with_fresh_id_and_rebuilt() {
        let mut s = session(
            &[("CA", 34.0, -118.0), ("NV", 39.5, -119.8), ("CA", 34.0, -117.0)],
            200.0,
        );
        s.select_region("CA").unwrap();
        assert_eq!(s.farthest(EngineKind::Dijkstra).unwrap().farthest, Some(NodeId(2)));

        let placed = s.place_new_facility(EngineKind::Dijkstra).unwrap();
        assert_eq!(placed.id, NodeId(3));
        assert_eq!(placed.pos, GeoPoint::new(34.0, -117.5));
        assert_eq!(placed.region, region("CA"));
        assert!(placed.is_synthesized());

        assert_eq!(s.store().len(), 4);
        assert!(s.graph().contains(NodeId(3)));
        assert_eq!(s.graph().node_count(), 3);
        assert_eq!(s.graph().degree(NodeId(3)), 2);
        assert_eq!(s.synthesized(), &[NodeId(3)]);
    }

    #[test]
    fn latest_placement_becomes_next_source() {
        let mut s = session(&[("CA", 34.0, -118.0), ("CA", 34.0, -117.0)], 200.0);
        s.select_region("CA").unwrap();

        let first = s.place_new_facility(EngineKind::Dijkstra).unwrap();
        assert_eq!(s.source().unwrap(), first.id);

        // From the midpoint both originals are exactly equidistant, so the
        // tie goes to the lower id (0) and the next facility lands between
        // the midpoint and node 0.
        let second = s.place_new_facility(EngineKind::BellmanFord).unwrap();
        assert_eq!(second.id, NodeId(3));
        assert_eq!(second.pos, GeoPoint::new(34.0, -117.75));
        assert_eq!(s.source().unwrap(), NodeId(3));
        assert_eq!(s.synthesized(), &[NodeId(2), NodeId(3)]);
    }

    #[test]
    fn placements_in_other_regions_do_not_steer_source() {
        let mut s = session(
            &[
                ("CA", 34.0, -118.0),
                ("CA", 34.0, -117.0),
                ("AZ", 33.4, -112.00),
                ("AZ", 33.4, -112.01),
            ],
            200.0,
        );
        s.select_region("CA").unwrap();
        s.place_new_facility(EngineKind::Dijkstra).unwrap();

        s.select_region("AZ").unwrap();
        assert_eq!(s.source().unwrap(), NodeId(2));
    }

    #[test]
    fn unknown_ids_are_refused_without_mutation() {
        let mut s = session(&[("CA", 34.0, -118.0), ("NV", 39.5, -119.8)], 5.0);
        s.select_region("CA").unwrap();

        // NodeId(1) exists, but in another region's graph.
        let err = s.place_between(NodeId(0), NodeId(1)).unwrap_err();
        assert!(matches!(err, SessionError::Graph(GraphError::NodeNotFound(NodeId(1)))));
        let err = s.place_between(NodeId(42), NodeId(0)).unwrap_err();
        assert!(matches!(err, SessionError::Graph(GraphError::NodeNotFound(NodeId(42)))));

        assert_eq!(s.store().len(), 2);
        assert!(s.synthesized().is_empty());
    }

    #[test]
    fn isolated_placement_reaches_nothing() {
        // 0 and 1 are linked; 2 is far away.  Placing between 0 and 2 puts a
        // facility ~46 km from everything, and it becomes the next source.
        let mut s = session(
            &[("CA", 34.0, -118.0), ("CA", 34.0, -117.95), ("CA", 34.0, -117.0)],
            10.0,
        );
        s.select_region("CA").unwrap();
        let placed = s.place_between(NodeId(0), NodeId(2)).unwrap();
        assert_eq!(s.graph().degree(placed.id), 0);

        let ecc = s.farthest(EngineKind::Dijkstra).unwrap();
        assert_eq!((ecc.source, ecc.farthest, ecc.distance_km), (placed.id, None, 0.0));

        let err = s.place_new_facility(EngineKind::Dijkstra).unwrap_err();
        assert!(matches!(err, SessionError::NothingReachable(id) if id == placed.id));
        assert_eq!(s.store().len(), 4);
    }

    #[test]
    fn placed_source_ignored_once_graph_is_edgeless() {
        let mut s = session(&[("CA", 34.0, -118.0), ("CA", 34.0, -117.0)], 200.0);
        s.select_region("CA").unwrap();
        s.place_new_facility(EngineKind::Dijkstra).unwrap();

        s.set_threshold(0.0).unwrap();
        assert_eq!(s.graph().edge_count(), 0);
        for kind in EngineKind::ALL {
            assert!(matches!(
                s.farthest(kind),
                Err(SessionError::Graph(GraphError::NoSuitableSource))
            ));
        }
        assert!(matches!(
            s.place_new_facility(EngineKind::Dijkstra),
            Err(SessionError::Graph(GraphError::NoSuitableSource))
        ));
        assert_eq!(s.store().len(), 3);
    }

    #[test]
    fn placement_needs_a_region() {
        let mut s = session(&[("CA", 34.0, -118.0)], 5.0);
        assert!(matches!(
            s.place_between(NodeId(0), NodeId(0)),
            Err(SessionError::NoRegionSelected)
        ));
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use std::io::Write;

    use cg_ingest::RecordLayout;

    use crate::{Session, SessionConfig};

    #[test]
    fn load_csv_then_search() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "ID,Title,Addr,Town,State,Zip,Country,Op,Usage,Latitude,Longitude\n\
             1,A,x,Austin,Texas,1,US,Op,Public,30.2672,-97.7431\n\
             2,B,x,Austin,TX,1,US,Op,Public,30.2700,-97.7431\n\
             3,broken\n"
        )
        .unwrap();

        let (mut s, report) =
            Session::load_csv(file.path(), &RecordLayout::default(), SessionConfig::default()).unwrap();
        assert_eq!(report.accepted, 2);
        assert_eq!(report.skipped, 1);

        s.select_region("tx").unwrap();
        assert_eq!(s.graph().edge_count(), 1);
        assert!(s.farthest_default().unwrap().farthest.is_some());
    }
}
