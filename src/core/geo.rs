use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator latitude limit
const MAX_LATITUDE: f64 = 85.0511287798;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Clamps latitude to the range Web Mercator can project
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Degenerate bounds covering exactly one point
    pub fn from_point(point: LatLng) -> Self {
        Self::new(point, point)
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Returns the union of this bounds with another bounds
    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        let mut merged = *self;
        merged.extend(&other.south_west);
        merged.extend(&other.north_east);
        merged
    }

    pub fn north_west(&self) -> LatLng {
        LatLng::new(self.north_east.lat, self.south_west.lng)
    }

    pub fn south_east(&self) -> LatLng {
        LatLng::new(self.south_west.lat, self.north_east.lng)
    }
}

/// Represents a tile coordinate in the slippy map tile system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Creates a tile coordinate from a LatLng and zoom level
    pub fn from_lat_lng(lat_lng: &LatLng, zoom: u8) -> Self {
        let lat_rad = LatLng::clamp_lat(lat_lng.lat).to_radians();
        let n = 2_f64.powi(zoom as i32);

        let x = ((lat_lng.lng + 180.0) / 360.0 * n).floor().clamp(0.0, n - 1.0) as u32;
        let y = ((1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n)
            .floor()
            .clamp(0.0, n - 1.0) as u32;

        Self::new(x, y, zoom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(49.6116, 6.1319);
        assert_eq!(coord.lat, 49.6116);
        assert_eq!(coord.lng, 6.1319);
        assert!(coord.is_valid());
        assert!(!LatLng::new(91.0, 0.0).is_valid());
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(40.0, -75.0, 41.0, -73.0);
        let point_inside = LatLng::new(40.5, -74.0);
        let point_outside = LatLng::new(42.0, -74.0);

        assert!(bounds.contains(&point_inside));
        assert!(!bounds.contains(&point_outside));
    }

    #[test]
    fn test_point_bounds_are_degenerate() {
        let point = LatLng::new(49.6, 6.1);
        let bounds = LatLngBounds::from_point(point);
        assert_eq!(bounds.south_west, bounds.north_east);
        assert_eq!(bounds.center(), point);
    }

    #[test]
    fn test_union_spans_both() {
        let a = LatLngBounds::from_coords(49.0, 5.9, 49.5, 6.2);
        let b = LatLngBounds::from_coords(49.4, 6.0, 50.1, 6.5);
        let union = a.union(&b);
        assert_eq!(union, LatLngBounds::from_coords(49.0, 5.9, 50.1, 6.5));
        assert_eq!(union, b.union(&a));
    }

    #[test]
    fn test_extend() {
        let mut bounds = LatLngBounds::from_point(LatLng::new(0.0, 0.0));
        bounds.extend(&LatLng::new(-1.0, 2.0));
        assert_eq!(bounds, LatLngBounds::from_coords(-1.0, 0.0, 0.0, 2.0));
    }

    #[test]
    fn test_tile_coord_at_zoom_zero() {
        let tile = TileCoord::from_lat_lng(&LatLng::new(49.6, 6.1), 0);
        assert_eq!(tile, TileCoord::new(0, 0, 0));

        let tile = TileCoord::from_lat_lng(&LatLng::new(49.6, 6.1), 1);
        assert_eq!(tile, TileCoord::new(1, 0, 1));
    }
}
