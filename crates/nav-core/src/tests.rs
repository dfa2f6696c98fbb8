//! Unit tests for nav-core primitives.

#[cfg(test)]
mod ids {
    use crate::NodeId;

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(NodeId(11_139_567_106) > NodeId(11_139_567_102));
    }

    #[test]
    fn display_is_bare_integer() {
        assert_eq!(NodeId(664_275_388).to_string(), "664275388");
        assert_eq!(NodeId::from(-1).to_string(), "-1");
    }

    #[test]
    fn get_returns_raw_id() {
        let id = NodeId::from(11_139_567_106);
        assert_eq!(id.get(), 11_139_567_106);
        assert_eq!(id.to_string(), id.get().to_string());
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(41.8720714, -87.6492469);
        assert_eq!(p.distance_miles(p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        // R · π / 180 for R = 3963.1 mi
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_miles(b);
        assert!((d - 69.169_143_6).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn chicago_to_new_york() {
        let chicago = GeoPoint::new(41.88, -87.63);
        let new_york = GeoPoint::new(40.71, -74.01);
        let d = chicago.distance_miles(new_york);
        assert!((d - 711.655_721_4).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn quad_sides_distance() {
        let north = GeoPoint::new(41.8720714, -87.6492469);
        let south = GeoPoint::new(41.871696, -87.649267);
        let d = north.distance_miles(south);
        assert!((d - 0.025_986_658).abs() < 1e-6, "got {d}");
        assert!((south.distance_miles(north) - d).abs() < 1e-6);
    }

    #[test]
    fn midpoint_on_equator() {
        let m = GeoPoint::new(0.0, 0.0).midpoint(GeoPoint::new(0.0, 90.0));
        assert!(m.lat.abs() < 1e-9);
        assert!((m.lon - 45.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_of_same_point() {
        let p = GeoPoint::new(10.0, 20.0);
        let m = p.midpoint(p);
        assert!((m.lat - 10.0).abs() < 1e-9);
        assert!((m.lon - 20.0).abs() < 1e-9);
    }

    #[test]
    fn midpoint_of_quad_sides() {
        let north = GeoPoint::new(41.8720714, -87.6492469);
        let south = GeoPoint::new(41.871696, -87.649267);
        let m = north.midpoint(south);
        assert!((m.lat - 41.871_883_7).abs() < 1e-6, "got {m}");
        assert!((m.lon - -87.649_256_95).abs() < 1e-6, "got {m}");
    }
}

#[cfg(test)]
mod config {
    use crate::{NavError, NetworkConfig, DEFAULT_LINK_RADIUS_MILES};

    #[test]
    fn default_radius() {
        assert_eq!(NetworkConfig::default().link_radius_miles, DEFAULT_LINK_RADIUS_MILES);
        assert_eq!(DEFAULT_LINK_RADIUS_MILES, 0.036);
    }

    #[test]
    fn rejects_bad_radius() {
        assert!(matches!(NetworkConfig::new(-0.1), Err(NavError::Config(_))));
        assert!(matches!(NetworkConfig::new(f64::NAN), Err(NavError::Config(_))));
        assert!(NetworkConfig::new(0.0).is_ok());
    }
}
