use crate::core::constants::DEFAULT_CIRCLE_MARKER_RADIUS;
use crate::models::{Coordinate, Tooltip};
use serde::{Deserialize, Serialize};

/// Stroke and fill styling shared by every layer kind.
///
/// Colors are hexadecimal strings such as `#ff0000`; opacities are in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStyle {
    #[serde(default)]
    pub stroke: bool,
    #[serde(default)]
    pub stroke_color: Option<String>,
    #[serde(default)]
    pub stroke_weight: Option<u32>,
    #[serde(default)]
    pub stroke_opacity: Option<f64>,
    #[serde(default)]
    pub fill: bool,
    #[serde(default)]
    pub fill_color: Option<String>,
    #[serde(default)]
    pub fill_opacity: Option<f64>,
}

impl PathStyle {
    pub fn stroked(color: impl Into<String>, weight: u32) -> Self {
        Self {
            stroke: true,
            stroke_color: Some(color.into()),
            stroke_weight: Some(weight),
            ..Self::default()
        }
    }

    pub fn with_fill(mut self, color: impl Into<String>, opacity: f64) -> Self {
        self.fill = true;
        self.fill_color = Some(color.into());
        self.fill_opacity = Some(opacity);
        self
    }
}

/// An icon placed at a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    pub id: String,
    pub coordinate: Coordinate,
    /// Shown by the browser on hover
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub tooltip: Option<Tooltip>,
}

impl Marker {
    pub fn new(id: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            coordinate,
            title: None,
            icon: None,
            tooltip: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

/// A fixed-pixel-radius circle at a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircleMarker {
    pub id: String,
    pub coordinate: Coordinate,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(flatten)]
    pub style: PathStyle,
    #[serde(default)]
    pub tooltip: Option<Tooltip>,
}

fn default_radius() -> f64 {
    DEFAULT_CIRCLE_MARKER_RADIUS
}

impl CircleMarker {
    pub fn new(id: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            coordinate,
            radius: DEFAULT_CIRCLE_MARKER_RADIUS,
            style: PathStyle::default(),
            tooltip: None,
        }
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}

/// A series of connected line segments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polyline {
    pub id: String,
    pub coordinates: Vec<Coordinate>,
    /// How much to simplify the line on each zoom level
    #[serde(default)]
    pub smooth_factor: Option<f64>,
    #[serde(default)]
    pub no_clip: bool,
    #[serde(flatten)]
    pub style: PathStyle,
    #[serde(default)]
    pub tooltip: Option<Tooltip>,
}

impl Polyline {
    pub fn new(id: impl Into<String>, coordinates: Vec<Coordinate>) -> Self {
        Self {
            id: id.into(),
            coordinates,
            smooth_factor: None,
            no_clip: false,
            style: PathStyle::default(),
            tooltip: None,
        }
    }

    pub fn with_style(mut self, style: PathStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_tooltip(mut self, tooltip: Tooltip) -> Self {
        self.tooltip = Some(tooltip);
        self
    }
}
