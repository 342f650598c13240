use crate::core::constants::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::models::{Coordinate, FitBoundsOptions};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner of the map a control is docked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl fmt::Display for ControlPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlPosition::TopLeft => write!(f, "topleft"),
            ControlPosition::TopRight => write!(f, "topright"),
            ControlPosition::BottomLeft => write!(f, "bottomleft"),
            ControlPosition::BottomRight => write!(f, "bottomright"),
        }
    }
}

/// Zoom in/out buttons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoomControlOptions {
    pub enable: bool,
    pub position: ControlPosition,
    #[serde(default = "enabled")]
    pub show_zoom_in_button: bool,
    #[serde(default = "enabled")]
    pub show_zoom_out_button: bool,
}

impl Default for ZoomControlOptions {
    fn default() -> Self {
        Self {
            enable: true,
            position: ControlPosition::TopRight,
            show_zoom_in_button: true,
            show_zoom_out_button: true,
        }
    }
}

/// Scale bar in metric and/or imperial units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleControlOptions {
    pub enable: bool,
    pub position: ControlPosition,
    #[serde(default)]
    pub show_metric: Option<bool>,
    #[serde(default)]
    pub show_imperial: Option<bool>,
}

impl Default for ScaleControlOptions {
    fn default() -> Self {
        Self {
            enable: false,
            position: ControlPosition::BottomLeft,
            show_metric: Some(true),
            show_imperial: Some(false),
        }
    }
}

/// Button that re-centers the map.
///
/// When `fit_bounds_options` is set, `center` and `zoom` are ignored and the
/// map is fitted to the named layers instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CenterControlOptions {
    pub enable: bool,
    pub position: ControlPosition,
    pub center: Coordinate,
    pub zoom: f64,
    #[serde(default)]
    pub fit_bounds_options: Option<FitBoundsOptions>,
}

impl Default for CenterControlOptions {
    fn default() -> Self {
        Self {
            enable: true,
            position: ControlPosition::TopRight,
            center: Coordinate::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            fit_bounds_options: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapControlOptions {
    pub zoom_control_options: ZoomControlOptions,
    pub scale_control_options: ScaleControlOptions,
    pub center_control_options: CenterControlOptions,
}

impl MapControlOptions {
    /// Every control disabled
    pub fn none() -> Self {
        Self {
            zoom_control_options: ZoomControlOptions {
                enable: false,
                ..Default::default()
            },
            scale_control_options: ScaleControlOptions {
                enable: false,
                ..Default::default()
            },
            center_control_options: CenterControlOptions {
                enable: false,
                ..Default::default()
            },
        }
    }

    /// Number of control kinds switched on
    pub fn enabled_count(&self) -> usize {
        [
            self.zoom_control_options.enable,
            self.scale_control_options.enable,
            self.center_control_options.enable,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }
}

fn enabled() -> bool {
    true
}
