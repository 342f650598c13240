//! Option records exchanged with the host.
//!
//! All records are JSON objects with camelCase field names; enums travel as
//! lowercase strings.

pub mod controls;
pub mod coordinate;
pub mod layers;
pub mod options;
pub mod tile_layer;
pub mod tooltip;

pub use controls::{
    CenterControlOptions, ControlPosition, MapControlOptions, ScaleControlOptions,
    ZoomControlOptions,
};
pub use coordinate::Coordinate;
pub use layers::{CircleMarker, Marker, PathStyle, Polyline};
pub use options::{FitBoundsOptions, MapOptions, MapTheme};
pub use tile_layer::TileLayer;
pub use tooltip::{Tooltip, TooltipDirection, TooltipOffset};
