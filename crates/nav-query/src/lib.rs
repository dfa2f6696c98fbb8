//! `nav-query`: building lookup and meeting-point planning.
//!
//! Given two free-text building queries, [`Campus::plan_meeting`] resolves
//! both buildings, picks the building nearest their great-circle midpoint as
//! the meeting place, and routes each person there without cutting through
//! any other building.
//!
//! ```
//! use nav_core::{GeoPoint, NetworkConfig, NodeId};
//! use nav_query::Campus;
//! use nav_spatial::{Building, MapData, Waypoint};
//!
//! let data = MapData {
//!     buildings: vec![Building::new(NodeId(1), GeoPoint::new(41.8720, -87.6492), "North Side of Quad", "NSQ")],
//!     waypoints: vec![Waypoint::new(NodeId(2), GeoPoint::new(41.8719, -87.6493))],
//!     footways:  vec![],
//! };
//! let campus = Campus::from_map(data, &NetworkConfig::default()).unwrap();
//! let plan = campus.plan_meeting("NSQ", "North").unwrap();
//! assert_eq!(plan.destination.abbr, "NSQ");
//! ```

pub mod campus;
pub mod error;
pub mod lookup;
pub mod meeting;

#[cfg(test)]
mod tests;

pub use campus::Campus;
pub use error::{QueryError, QueryResult};
pub use lookup::{closest_building, find_building};
pub use meeting::{format_path, Leg, MeetingPlan, Route, PATH_SEPARATOR};
