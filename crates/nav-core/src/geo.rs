//! Geographic coordinate type and great-circle helpers.
//!
//! `GeoPoint` uses `f64` latitude/longitude.  Building-to-waypoint links are
//! decided at a radius of a few tens of metres, so the extra precision over
//! `f32` matters here.

/// Mean Earth radius in statute miles used by [`GeoPoint::distance_miles`].
pub const EARTH_RADIUS_MILES: f64 = 3963.1;

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance in statute miles via the spherical law of
    /// cosines, written out in Cartesian form:
    ///
    /// ```text
    /// R · acos( cos φ1 cos λ1 cos φ2 cos λ2
    ///         + cos φ1 sin λ1 cos φ2 sin λ2
    ///         + sin φ1 sin φ2 )
    /// ```
    ///
    /// Link thresholds and stored edge weights are pinned to this exact
    /// expression, so it must not be swapped for haversine.  The result may
    /// differ in the last bits depending on argument order.
    ///
    /// The `acos` argument is clamped to `[-1, 1]`: for identical (or nearly
    /// identical) points rounding can push the sum just above 1.
    pub fn distance_miles(self, other: GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let lat2 = other.lat.to_radians();
        let lon2 = other.lon.to_radians();

        let cos_angle = (lat1.cos() * lon1.cos() * lat2.cos() * lon2.cos())
            + (lat1.cos() * lon1.sin() * lat2.cos() * lon2.sin())
            + (lat1.sin() * lat2.sin());

        EARTH_RADIUS_MILES * cos_angle.clamp(-1.0, 1.0).acos()
    }

    /// Great-circle midpoint between `self` and `other`.
    ///
    /// Reference: <http://www.movable-type.co.uk/scripts/latlong.html>
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        let lat1 = self.lat.to_radians();
        let lon1 = self.lon.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = other.lon.to_radians() - lon1;

        let bx = lat2.cos() * d_lon.cos();
        let by = lat2.cos() * d_lon.sin();

        let lat_m = (lat1.sin() + lat2.sin())
            .atan2(((lat1.cos() + bx).powi(2) + by * by).sqrt());
        let lon_m = lon1 + by.atan2(lat1.cos() + bx);

        GeoPoint::new(lat_m.to_degrees(), lon_m.to_degrees())
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}
