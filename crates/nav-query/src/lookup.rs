//! Building lookup by free-text query and by proximity.
//!
//! Both scans walk the building list in order and return the first match;
//! neither ranks candidates.

use nav_core::GeoPoint;
use nav_spatial::Building;

/// First building whose abbreviation equals `query` or whose name contains
/// `query`.
///
/// Each building is tested with both rules before moving on, so an earlier
/// name match wins over a later exact abbreviation.  Matching is
/// case-sensitive.
pub fn find_building<'a>(buildings: &'a [Building], query: &str) -> Option<&'a Building> {
    buildings
        .iter()
        .find(|b| b.abbr == query || b.name.contains(query))
}

/// Building closest to `point` by great-circle distance.
///
/// Uses a strict `<`, so the earliest building wins ties.  If no distance is
/// finite the first building is returned.  `None` only for an empty list.
pub fn closest_building(buildings: &[Building], point: GeoPoint) -> Option<&Building> {
    let mut best = None;
    let mut min_miles = f64::INFINITY;
    for b in buildings {
        let miles = b.location.distance_miles(point);
        if miles < min_miles {
            min_miles = miles;
            best = Some(b);
        }
    }
    best.or_else(|| buildings.first())
}
