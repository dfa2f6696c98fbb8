//! Meeting-plan result types.

use std::fmt;

use nav_core::{GeoPoint, NodeId};
use nav_spatial::Building;

/// Separator between vertex ids in a rendered path.
pub const PATH_SEPARATOR: &str = "->";

/// A walkable path and its length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Vertices from origin building to destination building.
    pub path:  Vec<NodeId>,
    /// Sum of edge weights along `path`.
    pub miles: f64,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_path(&self.path))
    }
}

/// One person's half of a meeting plan.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Leg {
    Found(Route),
    /// No path avoids the interiors of other buildings.
    Unreachable,
}

impl Leg {
    pub fn route(&self) -> Option<&Route> {
        match self {
            Leg::Found(route) => Some(route),
            Leg::Unreachable => None,
        }
    }
}

/// Result of [`Campus::plan_meeting`](crate::Campus::plan_meeting).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeetingPlan {
    /// Resolved starting buildings for person 1 and person 2.
    pub origins:     [Building; 2],
    /// Great-circle midpoint of the two origins.
    pub midpoint:    GeoPoint,
    /// Building closest to `midpoint`.
    pub destination: Building,
    /// Person 1's and person 2's routes to `destination`.
    pub legs:        [Leg; 2],
}

impl MeetingPlan {
    /// Both routes, or `None` if either person cannot reach the destination.
    pub fn routes(&self) -> Option<[&Route; 2]> {
        Some([self.legs[0].route()?, self.legs[1].route()?])
    }
}

/// Render `path` as `a->b->c`.
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(NodeId::to_string)
        .collect::<Vec<_>>()
        .join(PATH_SEPARATOR)
}
