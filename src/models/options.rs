use crate::core::constants::{DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::core::geo::Point;
use crate::models::Coordinate;
use serde::{Deserialize, Serialize};

/// Color scheme of the map container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapTheme {
    #[default]
    Default,
    /// Dark backgrounds with light icons
    Dark,
}

/// Fit the map to the union of a set of layers.
///
/// The three paddings are forwarded to the engine untouched; the engine
/// decides how they combine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FitBoundsOptions {
    pub layer_ids: Vec<String>,
    #[serde(default)]
    pub top_left_padding: Option<Point>,
    #[serde(default)]
    pub bottom_right_padding: Option<Point>,
    #[serde(default)]
    pub padding: Option<Point>,
}

impl FitBoundsOptions {
    pub fn new<I, S>(layer_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            layer_ids: layer_ids.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, padding: Point) -> Self {
        self.padding = Some(padding);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapOptions {
    pub center: Coordinate,
    pub zoom: f64,
    /// Show the engine's own prefix in the attribution control
    #[serde(rename = "showLeafletPrefix")]
    pub show_attribution_prefix: bool,
    /// Initial fit applied once the first layers are on the map
    #[serde(default)]
    pub fit_bounds_options: Option<FitBoundsOptions>,
    #[serde(default)]
    pub theme: MapTheme,
}

impl MapOptions {
    pub fn new(center: Coordinate, zoom: f64) -> Self {
        Self {
            center,
            zoom,
            ..Self::default()
        }
    }

    pub fn with_theme(mut self, theme: MapTheme) -> Self {
        self.theme = theme;
        self
    }
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: Coordinate::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            show_attribution_prefix: true,
            fit_bounds_options: None,
            theme: MapTheme::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_options_wire_shape() {
        let options = MapOptions::new(Coordinate::new(49.6, 6.1), 13.0).with_theme(MapTheme::Dark);
        let value = serde_json::to_value(&options).unwrap();

        assert_eq!(value["theme"], "dark");
        assert_eq!(value["showLeafletPrefix"], true);
        assert_eq!(value["center"]["latitude"], 49.6);
        assert!(value["fitBoundsOptions"].is_null());
    }

    #[test]
    fn test_fit_bounds_options_from_json() {
        let options: FitBoundsOptions = serde_json::from_value(json!({
            "layerIds": ["m1", "p1"],
            "padding": { "x": 10.0, "y": 20.0 }
        }))
        .unwrap();

        assert_eq!(options.layer_ids, vec!["m1", "p1"]);
        assert_eq!(options.padding, Some(Point::new(10.0, 20.0)));
        assert_eq!(options.top_left_padding, None);
    }
}
