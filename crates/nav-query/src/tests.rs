//! Unit tests for nav-query.

#[cfg(test)]
mod helpers {
    use nav_core::{GeoPoint, NodeId};
    use nav_spatial::{Building, PathGraph};

    use crate::Campus;

    pub fn building(id: i64, lat: f64, lon: f64, name: &str, abbr: &str) -> Building {
        Building::new(NodeId(id), GeoPoint::new(lat, lon), name, abbr)
    }

    pub fn ids(raw: &[i64]) -> Vec<NodeId> {
        raw.iter().copied().map(NodeId).collect()
    }

    /// Hand-weighted campus.
    ///
    /// ```text
    ///  ALH(1) ─ 10 ──────── 11 ─ CL(3) ─ 21 ──── 20 ─ BC(2)
    ///           └─ DA(4) ──────────┘
    ///  IH(5)  (no edges)
    /// ```
    ///
    /// The route through Delta Annex is shorter but crosses a building.
    pub fn campus() -> Campus {
        let buildings = vec![
            building(1, 41.870, -87.650, "Alpha Hall", "ALH"),
            building(2, 41.870, -87.640, "Beta Center", "BC"),
            building(3, 41.8702, -87.645, "Central Library", "CL"),
            building(4, 41.875, -87.6475, "Delta Annex", "DA"),
            building(5, 41.880, -87.650, "Isolated Hall", "IH"),
        ];

        let mut g = PathGraph::new();
        for id in [1, 2, 3, 4, 5, 10, 11, 20, 21] {
            g.add_vertex(NodeId(id));
        }
        let links = [
            (1, 10, 0.01), (10, 11, 0.1), (11, 3, 0.01),
            (10, 4, 0.01), (4, 3, 0.01),
            (2, 20, 0.01), (20, 21, 0.05), (21, 3, 0.01),
        ];
        for (a, b, w) in links {
            g.add_edge(NodeId(a), NodeId(b), w);
            g.add_edge(NodeId(b), NodeId(a), w);
        }

        Campus::new(g, buildings)
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use nav_core::GeoPoint;

    use super::helpers::building;
    use crate::{closest_building, find_building};

    #[test]
    fn abbreviation_or_substring() {
        let buildings = vec![
            building(1, 0.0, 0.0, "Science and Engineering Offices", "SEO"),
            building(2, 0.0, 0.0, "Science and Engineering Labs", "SEL"),
        ];
        assert_eq!(find_building(&buildings, "SEL").unwrap().id.0, 2);
        assert_eq!(find_building(&buildings, "Labs").unwrap().id.0, 2);
        assert_eq!(find_building(&buildings, "Science").unwrap().id.0, 1, "first match by order");
        assert!(find_building(&buildings, "science").is_none(), "case-sensitive");
        assert!(find_building(&buildings, "Library").is_none());
    }

    #[test]
    fn earlier_name_match_beats_later_abbreviation() {
        let buildings = vec![
            building(1, 0.0, 0.0, "Student Center East", "SCE"),
            building(2, 0.0, 0.0, "Recreation", "Center"),
        ];
        assert_eq!(find_building(&buildings, "Center").unwrap().id.0, 1);
    }

    #[test]
    fn abbreviation_must_match_exactly() {
        let buildings = vec![building(1, 0.0, 0.0, "Lecture Center B", "LCB")];
        assert!(find_building(&buildings, "LC").is_some(), "substring of the name");
        assert!(find_building(&buildings, "CB ").is_none());
    }

    #[test]
    fn closest_first_wins_ties() {
        let east = building(1, 0.0, 1.0, "East", "E");
        let west = building(2, 0.0, -1.0, "West", "W");
        let origin = GeoPoint::new(0.0, 0.0);

        let ordered = vec![east.clone(), west.clone()];
        assert_eq!(closest_building(&ordered, origin), Some(&east));

        let reversed = vec![west.clone(), east];
        assert_eq!(closest_building(&reversed, origin), Some(&west));
    }

    #[test]
    fn closest_picks_minimum() {
        let buildings = vec![
            building(1, 41.880, -87.650, "Far", "F"),
            building(2, 41.8702, -87.645, "Near", "N"),
            building(3, 41.860, -87.640, "Also Far", "AF"),
        ];
        let pick = closest_building(&buildings, GeoPoint::new(41.870, -87.645)).unwrap();
        assert_eq!(pick.abbr, "N");
        assert!(closest_building(&[], GeoPoint::new(0.0, 0.0)).is_none());
    }
}

// ── Meeting plans ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod meeting {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::hash::BuildHasher;

    use nav_core::NodeId;
    use nav_spatial::{DijkstraRouter, Graph, PathGraph, Router};

    use super::helpers::{building, campus, ids};
    use crate::{Campus, Leg, QueryError};

    #[test]
    fn routes_both_people_to_midpoint_building() {
        let campus = campus();
        let plan = campus.plan_meeting("ALH", "Beta").unwrap();

        assert_eq!(plan.origins[0].abbr, "ALH");
        assert_eq!(plan.origins[1].abbr, "BC");
        assert_eq!(plan.destination.abbr, "CL");
        assert!((plan.midpoint.lon - -87.645).abs() < 1e-9);

        let [first, second] = plan.routes().expect("both reachable");
        assert_eq!(first.path, ids(&[1, 10, 11, 3]), "must not cut through Delta Annex");
        assert!((first.miles - 0.12).abs() < 1e-12);
        assert_eq!(second.path, ids(&[2, 20, 21, 3]));
        assert!((second.miles - 0.07).abs() < 1e-12);
    }

    #[test]
    fn destination_building_may_be_entered() {
        // Midpoint of IH and ALH is nearest Delta Annex, which becomes the
        // target and is therefore exempt.
        let campus = campus();
        let plan = campus.plan_meeting("Isolated", "Alpha").unwrap();
        assert_eq!(plan.destination.abbr, "DA");
        assert_eq!(plan.legs[0], Leg::Unreachable);
        assert_eq!(plan.legs[1].route().unwrap().path, ids(&[1, 10, 4]));
        assert!(plan.routes().is_none());
    }

    #[test]
    fn same_building_for_both() {
        let campus = campus();
        let plan = campus.plan_meeting("CL", "Central").unwrap();
        assert_eq!(plan.destination.abbr, "CL");
        for leg in &plan.legs {
            let route = leg.route().unwrap();
            assert_eq!(route.path, ids(&[3]));
            assert_eq!(route.miles, 0.0);
        }
    }

    #[test]
    fn unknown_buildings_reported() {
        let campus = campus();
        assert!(matches!(
            campus.plan_meeting("Nowhere", "ALH"),
            Err(QueryError::PersonNotFound { person: 1, .. })
        ));
        assert!(matches!(
            campus.plan_meeting("ALH", "Nowhere"),
            Err(QueryError::PersonNotFound { person: 2, .. })
        ));
        match campus.plan_meeting("Nowhere", "Neither") {
            Err(QueryError::PersonNotFound { person, query }) => {
                assert_eq!(person, 1);
                assert_eq!(query, "Nowhere");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn queries_are_independent() {
        let campus = campus();
        let a = campus.plan_meeting("ALH", "BC").unwrap();
        let _ = campus.plan_meeting("IH", "ALH").unwrap();
        let b = campus.plan_meeting("ALH", "BC").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn destination_falls_back_to_first_building() {
        // Unknown coordinates give no finite distance to the midpoint.
        let buildings = vec![
            building(1, f64::NAN, f64::NAN, "Annex", "A"),
            building(2, f64::NAN, f64::NAN, "Bungalow", "B"),
        ];
        let campus = Campus::new(PathGraph::new(), buildings);

        let plan = campus.plan_meeting("B", "Bungalow").unwrap();
        assert_eq!(plan.destination.abbr, "A");
        assert_eq!(plan.legs, [Leg::Unreachable, Leg::Unreachable]);
    }

    /// Records the forbidden-set size of every call, then delegates.
    struct RecordingRouter {
        forbidden_sizes: RefCell<Vec<usize>>,
    }

    impl Router<NodeId, f64> for RecordingRouter {
        fn route<S: BuildHasher>(
            &self,
            graph: &Graph<NodeId, f64>,
            start: NodeId,
            target: NodeId,
            forbidden: &HashSet<NodeId, S>,
        ) -> Vec<NodeId> {
            self.forbidden_sizes.borrow_mut().push(forbidden.len());
            DijkstraRouter.route(graph, start, target, forbidden)
        }
    }

    #[test]
    fn every_building_is_forbidden() {
        let base = campus();
        let router = RecordingRouter { forbidden_sizes: RefCell::new(Vec::new()) };
        let campus = Campus::with_router(base.graph().clone(), base.buildings().to_vec(), router);

        let plan = campus.plan_meeting("ALH", "BC").unwrap();
        assert!(plan.routes().is_some());
        assert_eq!(*campus.router().forbidden_sizes.borrow(), vec![5, 5]);
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod render {
    use super::helpers::ids;
    use crate::{format_path, Route};

    #[test]
    fn arrow_separated() {
        assert_eq!(format_path(&ids(&[151960667, 1647971930, 151676521])), "151960667->1647971930->151676521");
        assert_eq!(format_path(&ids(&[7])), "7");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn route_display() {
        let route = Route { path: ids(&[1, 2]), miles: 0.5 };
        assert_eq!(route.to_string(), "1->2");
    }
}
