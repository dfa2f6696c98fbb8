//! Vertex identifier for the campus pathway graph.
//!
//! Ids come straight from the map document (OpenStreetMap node and way ids),
//! which routinely exceed `u32::MAX`, so the inner integer is an `i64`.
//! Buildings and waypoints share one id space.

use std::fmt;

/// Identity of a graph vertex: a building or a footway waypoint.
///
/// `Copy + Ord + Hash` so it can key hash maps and serve as the secondary
/// heap key in Dijkstra's tie-break.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub i64);

impl NodeId {
    #[inline(always)]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for NodeId {
    #[inline(always)]
    fn from(raw: i64) -> Self {
        NodeId(raw)
    }
}

impl fmt::Display for NodeId {
    /// Bare integer, so rendered paths read `151960667->1647971930`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
