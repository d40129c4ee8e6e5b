use serde::{Deserialize, Serialize};

/// Radius of the spherical Earth model, in meters.
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Represents a (longitude, latitude) pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }

    /// Great-circle distance to another point in meters, using the haversine
    /// formula on a spherical Earth.
    pub fn gps_dist(self, other: LonLat) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS * a.sqrt().asin()
    }

    /// Initial compass bearing to another point, in degrees [0, 360) with 0 =
    /// north. atan2 handles the wrap-around at the antimeridian.
    pub fn bearing_to(self, other: LonLat) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let x = delta_lon.sin() * lat2.cos();
        let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
        x.atan2(y).to_degrees().rem_euclid(360.0)
    }
}
