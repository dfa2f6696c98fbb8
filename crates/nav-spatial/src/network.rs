//! Map entities and pathway-graph construction.
//!
//! # Construction
//!
//! 1. One vertex per building and per waypoint.
//! 2. Every consecutive waypoint pair of a footway becomes an undirected link
//!    (two directed edges) weighted by great-circle distance in miles.
//! 3. Every building is linked, in both directions, to each waypoint within
//!    [`NetworkConfig::link_radius_miles`].
//!
//! # Spatial index
//!
//! Step 3 is a proximity join of buildings against waypoints.  An R-tree
//! (via `rstar`) over waypoint `[lat, lon]` prunes candidates with a bounding
//! box padded well beyond the link radius; [`GeoPoint::distance_miles`]
//! decides every actual link.  The set of linked pairs is therefore the same
//! as a full building × waypoint scan.  Near the poles or the antimeridian the
//! box degenerates and the builder falls back to that full scan.

use rstar::{RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use nav_core::{GeoPoint, NetworkConfig, NodeId, EARTH_RADIUS_MILES};

use crate::graph::Graph;

/// The campus pathway graph: vertex ids to distances in miles.
pub type PathGraph = Graph<NodeId, f64>;

// ── Entities ──────────────────────────────────────────────────────────────────

/// A named destination on the map.  Equality covers all four fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Building {
    pub id:       NodeId,
    pub location: GeoPoint,
    pub name:     String,
    pub abbr:     String,
}

impl Building {
    pub fn new(id: NodeId, location: GeoPoint, name: impl Into<String>, abbr: impl Into<String>) -> Self {
        Self { id, location, name: name.into(), abbr: abbr.into() }
    }
}

/// A footway node.  Only its id survives construction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Waypoint {
    pub id:       NodeId,
    pub location: GeoPoint,
}

impl Waypoint {
    pub fn new(id: NodeId, location: GeoPoint) -> Self {
        Self { id, location }
    }
}

/// Ordered chain of waypoint ids forming a walkable segment.
pub type Footway = Vec<NodeId>;

// ── R-tree waypoint entry ─────────────────────────────────────────────────────

#[derive(Clone)]
struct WaypointEntry {
    point: [f64; 2], // [lat, lon]
    id:    NodeId,
}

impl RTreeObject for WaypointEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

/// Envelope padding relative to the exact angular radius.
const ENVELOPE_PAD: f64 = 2.0;

/// Smallest search half-width, in radians (about 6 m).
///
/// Near zero, `acos` in [`GeoPoint::distance_miles`] only resolves angles in
/// steps of roughly 2e-8 rad, so pairs that far apart can measure as 0 mi.
/// The box must still contain them when the link radius is tiny.
const MIN_SEARCH_ANGLE: f64 = 1e-6;

/// Latitude beyond which longitude bounds are not trusted.
const POLAR_CUTOFF_DEG: f64 = 89.0;

/// `[lat, lon]` search box that contains every point within `radius_miles`
/// of `center`, or `None` when no simple box does.
fn search_envelope(center: GeoPoint, radius_miles: f64) -> Option<AABB<[f64; 2]>> {
    let angle = (radius_miles / EARTH_RADIUS_MILES * ENVELOPE_PAD).max(MIN_SEARCH_ANGLE);
    let d_lat = angle.to_degrees();

    if center.lat.abs() + d_lat >= POLAR_CUTOFF_DEG {
        return None;
    }

    let max_lat = (center.lat.abs() + d_lat).to_radians();
    let sin_ratio = angle.sin() / max_lat.cos();
    if sin_ratio >= 1.0 {
        return None;
    }
    let d_lon = sin_ratio.asin().to_degrees();

    if center.lon - d_lon < -180.0 || center.lon + d_lon > 180.0 {
        return None;
    }

    Some(AABB::from_corners(
        [center.lat - d_lat, center.lon - d_lon],
        [center.lat + d_lat, center.lon + d_lon],
    ))
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Collect map entities, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use nav_core::{GeoPoint, NetworkConfig, NodeId};
/// use nav_spatial::{Building, NetworkBuilder, Waypoint};
///
/// let mut b = NetworkBuilder::new();
/// b.add_building(Building::new(NodeId(1), GeoPoint::new(41.8720, -87.6492), "North Side of Quad", "NSQ"));
/// b.add_waypoint(Waypoint::new(NodeId(3), GeoPoint::new(41.8718, -87.6495)));
/// b.add_waypoint(Waypoint::new(NodeId(4), GeoPoint::new(41.8725, -87.6495)));
/// b.add_footway(vec![NodeId(3), NodeId(4)]);
/// let graph = b.build(&NetworkConfig::default());
/// assert_eq!(graph.vertex_count(), 3);
/// assert!(graph.weight(&NodeId(3), &NodeId(4)).is_some());
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    buildings: Vec<Building>,
    waypoints: Vec<Waypoint>,
    footways:  Vec<Footway>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_building(&mut self, building: Building) {
        self.buildings.push(building);
    }

    pub fn add_waypoint(&mut self, waypoint: Waypoint) {
        self.waypoints.push(waypoint);
    }

    pub fn add_footway(&mut self, footway: Footway) {
        self.footways.push(footway);
    }

    /// Buildings added so far, in insertion order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Build the graph and hand back the buildings in their input order.
    ///
    /// Waypoint coordinates are dropped here; only their vertices and edges
    /// remain.
    pub fn finish(self, config: &NetworkConfig) -> (PathGraph, Vec<Building>) {
        let graph = build_network(&self.buildings, &self.waypoints, &self.footways, config);
        (graph, self.buildings)
    }

    /// Build the graph, discarding the building list.
    pub fn build(self, config: &NetworkConfig) -> PathGraph {
        self.finish(config).0
    }
}

/// Build the pathway graph from map entities.
pub fn build_network(
    buildings: &[Building],
    waypoints: &[Waypoint],
    footways:  &[Footway],
    config:    &NetworkConfig,
) -> PathGraph {
    let mut graph = PathGraph::with_capacity(buildings.len() + waypoints.len());

    // ── Vertices ──────────────────────────────────────────────────────────
    for b in buildings {
        graph.add_vertex(b.id);
    }

    // A repeated waypoint id keeps its last coordinate.
    let mut positions: FxHashMap<NodeId, GeoPoint> = FxHashMap::default();
    positions.reserve(waypoints.len());
    for w in waypoints {
        graph.add_vertex(w.id);
        positions.insert(w.id, w.location);
    }

    // ── Footway chains ────────────────────────────────────────────────────
    let mut dangling = 0usize;
    for footway in footways {
        for pair in footway.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let (Some(&pa), Some(&pb)) = (positions.get(&a), positions.get(&b)) else {
                dangling += 1;
                continue;
            };
            let miles = pa.distance_miles(pb);
            graph.add_edge(a, b, miles);
            graph.add_edge(b, a, miles);
        }
    }
    if dangling > 0 {
        warn!(dangling, "footway segments reference unknown waypoints and were skipped");
    }

    // ── Building links ────────────────────────────────────────────────────
    let entries: Vec<WaypointEntry> = positions
        .iter()
        .map(|(&id, pos)| WaypointEntry { point: [pos.lat, pos.lon], id })
        .collect();
    let index = RTree::bulk_load(entries);
    let radius = config.link_radius_miles;

    for building in buildings {
        let candidates: Vec<&WaypointEntry> = match search_envelope(building.location, radius) {
            Some(envelope) => index.locate_in_envelope(&envelope).collect(),
            None => index.iter().collect(),
        };

        let mut linked = 0usize;
        for entry in candidates {
            let miles = building.location.distance_miles(GeoPoint::new(entry.point[0], entry.point[1]));
            if miles <= radius {
                graph.add_edge(building.id, entry.id, miles);
                graph.add_edge(entry.id, building.id, miles);
                linked += 1;
            }
        }

        if linked == 0 {
            warn!(building = %building.id, abbr = %building.abbr, "building has no waypoint within link radius");
        }
    }

    debug!(
        buildings = buildings.len(),
        waypoints = positions.len(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "pathway network built"
    );

    graph
}
