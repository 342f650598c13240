use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// A geographical coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinate> for LatLng {
    fn from(coordinate: Coordinate) -> Self {
        LatLng::new(coordinate.latitude, coordinate.longitude)
    }
}

impl From<LatLng> for Coordinate {
    fn from(lat_lng: LatLng) -> Self {
        Coordinate::new(lat_lng.lat, lat_lng.lng)
    }
}
