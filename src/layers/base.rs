use crate::{
    core::geo::{LatLng, LatLngBounds},
    models::{CircleMarker, Marker, Polyline, Tooltip},
};
use geo::BoundingRect;
use geo_types::LineString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Marker,
    CircleMarker,
    Polyline,
}

impl LayerKind {
    /// Point layers have exactly one coordinate; path layers have a vertex list
    pub fn is_point(&self) -> bool {
        matches!(self, LayerKind::Marker | LayerKind::CircleMarker)
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Marker => write!(f, "marker"),
            LayerKind::CircleMarker => write!(f, "circle marker"),
            LayerKind::Polyline => write!(f, "polyline"),
        }
    }
}

/// Application-level description of one layer
#[derive(Debug, Clone, PartialEq)]
pub enum LayerDescriptor {
    Marker(Marker),
    CircleMarker(CircleMarker),
    Polyline(Polyline),
}

impl LayerDescriptor {
    pub fn id(&self) -> &str {
        match self {
            LayerDescriptor::Marker(marker) => &marker.id,
            LayerDescriptor::CircleMarker(circle) => &circle.id,
            LayerDescriptor::Polyline(polyline) => &polyline.id,
        }
    }

    pub fn kind(&self) -> LayerKind {
        match self {
            LayerDescriptor::Marker(_) => LayerKind::Marker,
            LayerDescriptor::CircleMarker(_) => LayerKind::CircleMarker,
            LayerDescriptor::Polyline(_) => LayerKind::Polyline,
        }
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        match self {
            LayerDescriptor::Marker(marker) => marker.tooltip.as_ref(),
            LayerDescriptor::CircleMarker(circle) => circle.tooltip.as_ref(),
            LayerDescriptor::Polyline(polyline) => polyline.tooltip.as_ref(),
        }
    }

    /// Bounding box of the layer's geometry.
    ///
    /// Point layers give a degenerate box at their coordinate. A polyline gives
    /// the box around all vertices, or `None` when it has no vertices.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        match self {
            LayerDescriptor::Marker(marker) => {
                Some(LatLngBounds::from_point(marker.coordinate.into()))
            }
            LayerDescriptor::CircleMarker(circle) => {
                Some(LatLngBounds::from_point(circle.coordinate.into()))
            }
            LayerDescriptor::Polyline(polyline) => {
                let line: LineString<f64> = polyline
                    .coordinates
                    .iter()
                    .map(|c| (c.longitude, c.latitude))
                    .collect();
                line.bounding_rect().map(|rect| {
                    LatLngBounds::new(
                        LatLng::new(rect.min().y, rect.min().x),
                        LatLng::new(rect.max().y, rect.max().x),
                    )
                })
            }
        }
    }
}

impl From<Marker> for LayerDescriptor {
    fn from(marker: Marker) -> Self {
        LayerDescriptor::Marker(marker)
    }
}

impl From<CircleMarker> for LayerDescriptor {
    fn from(circle: CircleMarker) -> Self {
        LayerDescriptor::CircleMarker(circle)
    }
}

impl From<Polyline> for LayerDescriptor {
    fn from(polyline: Polyline) -> Self {
        LayerDescriptor::Polyline(polyline)
    }
}
