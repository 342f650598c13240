//! Converters from host option records to engine option objects.
//!
//! These are pure functions; nothing here touches a surface.

use crate::{
    core::geo::{LatLng, Point},
    layers::base::{LayerDescriptor, LayerKind},
    models::{CircleMarker, Marker, PathStyle, Polyline, Tooltip, TooltipDirection},
};

/// Stroke and fill options understood by the engine's path layers
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PathOptions {
    pub stroke: bool,
    pub color: Option<String>,
    pub weight: Option<f64>,
    pub opacity: Option<f64>,
    pub fill: bool,
    pub fill_color: Option<String>,
    pub fill_opacity: Option<f64>,
}

impl From<&PathStyle> for PathOptions {
    fn from(style: &PathStyle) -> Self {
        Self {
            stroke: style.stroke,
            color: style.stroke_color.clone(),
            weight: style.stroke_weight.map(f64::from),
            opacity: style.stroke_opacity,
            fill: style.fill,
            fill_color: style.fill_color.clone(),
            fill_opacity: style.fill_opacity,
        }
    }
}

/// Construction options for one engine layer
#[derive(Debug, Clone, PartialEq)]
pub enum LayerSpec {
    Marker {
        position: LatLng,
        title: Option<String>,
        icon: Option<String>,
    },
    CircleMarker {
        center: LatLng,
        radius: f64,
        path: PathOptions,
    },
    Polyline {
        points: Vec<LatLng>,
        smooth_factor: Option<f64>,
        no_clip: bool,
        path: PathOptions,
    },
}

impl LayerSpec {
    pub fn kind(&self) -> LayerKind {
        match self {
            LayerSpec::Marker { .. } => LayerKind::Marker,
            LayerSpec::CircleMarker { .. } => LayerKind::CircleMarker,
            LayerSpec::Polyline { .. } => LayerKind::Polyline,
        }
    }
}

impl From<&Marker> for LayerSpec {
    fn from(marker: &Marker) -> Self {
        LayerSpec::Marker {
            position: marker.coordinate.into(),
            title: marker.title.clone(),
            icon: marker.icon.clone(),
        }
    }
}

impl From<&CircleMarker> for LayerSpec {
    fn from(circle: &CircleMarker) -> Self {
        LayerSpec::CircleMarker {
            center: circle.coordinate.into(),
            radius: circle.radius,
            path: PathOptions::from(&circle.style),
        }
    }
}

impl From<&Polyline> for LayerSpec {
    fn from(polyline: &Polyline) -> Self {
        LayerSpec::Polyline {
            points: polyline.coordinates.iter().map(|c| (*c).into()).collect(),
            smooth_factor: polyline.smooth_factor,
            no_clip: polyline.no_clip,
            path: PathOptions::from(&polyline.style),
        }
    }
}

impl From<&LayerDescriptor> for LayerSpec {
    fn from(descriptor: &LayerDescriptor) -> Self {
        match descriptor {
            LayerDescriptor::Marker(marker) => marker.into(),
            LayerDescriptor::CircleMarker(circle) => circle.into(),
            LayerDescriptor::Polyline(polyline) => polyline.into(),
        }
    }
}

/// Tooltip options understood by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipSpec {
    pub content: String,
    /// Always present; `(0, 0)` when the host gave none
    pub offset: Point,
    pub direction: Option<TooltipDirection>,
    pub permanent: bool,
    pub sticky: bool,
    pub interactive: bool,
    pub opacity: Option<f64>,
    pub class_name: Option<String>,
}

impl From<&Tooltip> for TooltipSpec {
    fn from(tooltip: &Tooltip) -> Self {
        let offset = tooltip
            .offset
            .map(|o| Point::new(f64::from(o.x), f64::from(o.y)))
            .unwrap_or_default();

        Self {
            content: tooltip.content.clone(),
            offset,
            direction: tooltip.direction,
            permanent: tooltip.permanent,
            sticky: tooltip.sticky,
            interactive: tooltip.interactive,
            opacity: tooltip.opacity,
            class_name: tooltip.class_name.clone(),
        }
    }
}
