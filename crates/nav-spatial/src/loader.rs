//! JSON map loader.
//!
//! # Document format
//!
//! ```json
//! {
//!   "buildings": [{"id": 151676521, "lat": 41.87, "lon": -87.65, "name": "Science and Engineering Offices", "abbr": "SEO"}],
//!   "waypoints": [{"id": 462010750, "lat": 41.87, "lon": -87.65}],
//!   "footways":  [[462010750, 462010751, 9862302685]]
//! }
//! ```
//!
//! Each top-level array is optional; a missing array loads as empty.  Within
//! an entry every field is required.
//!
//! Buildings keep their document order, which is the order
//! `nav-query` scans when resolving user queries.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use nav_core::{GeoPoint, NetworkConfig, NodeId};

use crate::network::{build_network, Building, Footway, PathGraph, Waypoint};
use crate::SpatialResult;

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct MapDocument {
    #[serde(default)]
    buildings: Vec<BuildingRecord>,
    #[serde(default)]
    waypoints: Vec<WaypointRecord>,
    #[serde(default)]
    footways:  Vec<Vec<i64>>,
}

#[derive(Deserialize)]
struct BuildingRecord {
    id:   i64,
    lat:  f64,
    lon:  f64,
    name: String,
    abbr: String,
}

#[derive(Deserialize)]
struct WaypointRecord {
    id:  i64,
    lat: f64,
    lon: f64,
}

// ── MapData ───────────────────────────────────────────────────────────────────

/// Parsed map entities, ready for [`build_network`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapData {
    pub buildings: Vec<Building>,
    pub waypoints: Vec<Waypoint>,
    pub footways:  Vec<Footway>,
}

impl MapData {
    /// Build the pathway graph, consuming the waypoints.
    ///
    /// Returns the graph and the buildings in document order.
    pub fn into_network(self, config: &NetworkConfig) -> SpatialResult<(PathGraph, Vec<Building>)> {
        config.validate()?;
        let graph = build_network(&self.buildings, &self.waypoints, &self.footways, config);
        Ok((graph, self.buildings))
    }

    fn from_document(doc: MapDocument) -> Self {
        let buildings = doc
            .buildings
            .into_iter()
            .map(|r| Building::new(NodeId(r.id), GeoPoint::new(r.lat, r.lon), r.name, r.abbr))
            .collect();
        let waypoints = doc
            .waypoints
            .into_iter()
            .map(|r| Waypoint::new(NodeId(r.id), GeoPoint::new(r.lat, r.lon)))
            .collect();
        let footways = doc
            .footways
            .into_iter()
            .map(|chain| chain.into_iter().map(NodeId).collect())
            .collect();
        MapData { buildings, waypoints, footways }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a map document from a JSON file.
pub fn load_map_path(path: &Path) -> SpatialResult<MapData> {
    let file = File::open(path)?;
    load_map(BufReader::new(file))
}

/// Like [`load_map_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_map<R: Read>(reader: R) -> SpatialResult<MapData> {
    let doc: MapDocument = serde_json::from_reader(reader)?;
    let data = MapData::from_document(doc);
    debug!(
        buildings = data.buildings.len(),
        waypoints = data.waypoints.len(),
        footways = data.footways.len(),
        "map document parsed"
    );
    Ok(data)
}
