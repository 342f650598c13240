use crate::core::constants::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, TILE_SIZE};
use crate::core::geo::{LatLng, LatLngBounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Manages the current view of a map surface: center, zoom, and container dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the container in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center: Self::clamp_center(center),
            zoom: zoom.clamp(DEFAULT_MIN_ZOOM, DEFAULT_MAX_ZOOM),
            size,
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }

    /// Sets the center of the viewport, clamped to the projectable world
    pub fn set_center(&mut self, center: LatLng) {
        self.center = Self::clamp_center(center);
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets center and zoom in one step
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.set_center(center);
        self.set_zoom(zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let scale = Self::world_size(zoom.unwrap_or(self.zoom));
        let sin_lat = LatLng::clamp_lat(lat_lng.lat).to_radians().sin();

        let x = (lat_lng.lng + 180.0) / 360.0 * scale;
        let y = (0.5 - ((1.0 + sin_lat) / (1.0 - sin_lat)).ln() / (4.0 * PI)) * scale;

        Point::new(x, y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let scale = Self::world_size(zoom.unwrap_or(self.zoom));

        let lng = pixel.x / scale * 360.0 - 180.0;
        let n = PI - 2.0 * PI * pixel.y / scale;
        let lat = n.sinh().atan().to_degrees();

        LatLng::new(lat, lng)
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let center = self.project(&self.center, None);
        let half = self.size.multiply(0.5);

        let nw = self.unproject(&center.subtract(&half), None);
        let se = self.unproject(&center.add(&half), None);

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Largest integer zoom at which `bounds` fits inside the container minus `padding`
    pub fn bounds_zoom(&self, bounds: &LatLngBounds, padding: Point) -> f64 {
        let available = self.size.subtract(&padding);
        let mut best_zoom = self.min_zoom;

        for test_zoom in (self.min_zoom.ceil() as i32)..=(self.max_zoom.floor() as i32) {
            let zoom = test_zoom as f64;
            let nw = self.project(&bounds.north_west(), Some(zoom));
            let se = self.project(&bounds.south_east(), Some(zoom));

            let bounds_width = (se.x - nw.x).abs();
            let bounds_height = (se.y - nw.y).abs();

            if bounds_width <= available.x && bounds_height <= available.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        best_zoom
    }

    /// Fits the viewport to contain the given bounds.
    ///
    /// `padding_top_left` and `padding_bottom_right` shrink the usable container
    /// area; the resulting center is shifted so the bounds sit in the middle of
    /// what remains.
    pub fn fit_bounds(
        &mut self,
        bounds: &LatLngBounds,
        padding_top_left: Point,
        padding_bottom_right: Point,
    ) {
        let zoom = self.bounds_zoom(bounds, padding_top_left.add(&padding_bottom_right));
        let padding_offset = padding_bottom_right
            .subtract(&padding_top_left)
            .multiply(0.5);

        let sw = self.project(&bounds.south_west, Some(zoom));
        let ne = self.project(&bounds.north_east, Some(zoom));
        let middle = sw.add(&ne).multiply(0.5).add(&padding_offset);
        let center = self.unproject(&middle, Some(zoom));

        self.set_view(center, zoom);
    }

    fn world_size(zoom: f64) -> f64 {
        TILE_SIZE as f64 * 2_f64.powf(zoom)
    }

    fn clamp_center(center: LatLng) -> LatLng {
        LatLng::new(LatLng::clamp_lat(center.lat), center.lng.clamp(-180.0, 180.0))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}
