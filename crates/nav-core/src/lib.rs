//! `nav-core`: foundational types for the `campus_nav` workspace.
//!
//! This crate is a dependency of every other `nav-*` crate.  It has no
//! `nav-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                                |
//! |------------|---------------------------------------------------------|
//! | [`ids`]    | `NodeId`                                                |
//! | [`geo`]    | `GeoPoint`, great-circle distance and midpoint          |
//! | [`config`] | `NetworkConfig`, default building link radius           |
//! | [`error`]  | `NavError`, `NavResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{NetworkConfig, DEFAULT_LINK_RADIUS_MILES};
pub use error::{NavError, NavResult};
pub use geo::{GeoPoint, EARTH_RADIUS_MILES};
pub use ids::NodeId;
