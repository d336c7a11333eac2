use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Mean radius of the Earth in miles, used by the great-circle distance.
const EARTH_RADIUS_MILES: f64 = 3_958.8;

/// A latitude/longitude pair identifying a road map vertex.
///
/// Identity is by value: equality, hashing, and ordering all derive from the
/// raw coordinate bit patterns, so the adjacency table can be keyed by point
/// and the same record parsed twice always compares equal to itself. There is
/// no tolerance; two vertices a hair apart are distinct vertices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    /// Construct a point from a latitude and longitude in decimal degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another point, in miles.
    ///
    /// Haversine formula over the Earth's mean radius. Zero for identical
    /// coordinates, symmetric, and the single metric used for both edge
    /// weights and nearest-vertex search.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lon = (other.lon - self.lon).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
        // Rounding can push the intermediate a hair above 1.0; clamp before asin.
        let c = 2.0 * a.sqrt().min(1.0).asin();

        EARTH_RADIUS_MILES * c
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.lat.to_bits() == other.lat.to_bits() && self.lon.to_bits() == other.lon.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.lat.to_bits().hash(state);
        self.lon.to_bits().hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        // total_cmp agrees with the bit-pattern equality above.
        self.lat
            .total_cmp(&other.lat)
            .then_with(|| self.lon.total_cmp(&other.lon))
    }
}
