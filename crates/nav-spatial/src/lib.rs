//! `nav-spatial`: pathway graph, network construction, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`graph`]   | `Graph<V, W>` directed adjacency-list store                 |
//! | [`network`] | `Building`, `Waypoint`, `NetworkBuilder`, `build_network`   |
//! | [`search`]  | `shortest_path`, `path_length`, `Router`, `DijkstraRouter`  |
//! | [`loader`]  | `load_map`, `load_map_path`, `MapData`                      |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Building`.             |

pub mod error;
pub mod graph;
pub mod loader;
pub mod network;
pub mod search;


pub use error::{SpatialError, SpatialResult};
pub use graph::Graph;
pub use loader::{load_map, load_map_path, MapData};
pub use network::{build_network, Building, Footway, NetworkBuilder, PathGraph, Waypoint};
pub use search::{path_length, shortest_path, DijkstraRouter, Router, Weight};
