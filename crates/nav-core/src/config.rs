//! Network construction parameters.

use crate::{NavError, NavResult};

/// Default radius, in statute miles, within which a building is linked to a
/// footway waypoint (roughly 58 m).
pub const DEFAULT_LINK_RADIUS_MILES: f64 = 0.036;

/// Parameters for building the pathway graph from map entities.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NetworkConfig {
    /// A building gets an undirected edge to every waypoint whose
    /// great-circle distance is `<=` this value.
    pub link_radius_miles: f64,
}

impl NetworkConfig {
    /// Construct a config, rejecting radii that are negative or not finite.
    pub fn new(link_radius_miles: f64) -> NavResult<Self> {
        let config = Self { link_radius_miles };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> NavResult<()> {
        if !self.link_radius_miles.is_finite() || self.link_radius_miles < 0.0 {
            return Err(NavError::Config(format!(
                "link radius must be a non-negative number of miles, got {}",
                self.link_radius_miles
            )));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { link_radius_miles: DEFAULT_LINK_RADIUS_MILES }
    }
}
