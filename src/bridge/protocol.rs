//! Wire form of the facade operations.
//!
//! A call travels as `{"method": "<name>", "params": {...}}` with camelCase
//! names throughout.

use crate::{
    core::handle::MapHandle,
    models::{
        CircleMarker, FitBoundsOptions, MapControlOptions, MapOptions, Marker, Polyline, TileLayer,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "camelCase")]
pub enum MapCall {
    /// Builds a map; the host is notified through `completion_method` once it is usable
    #[serde(rename_all = "camelCase")]
    CreateMap {
        completion_method: String,
        container: MapHandle,
        map_options: MapOptions,
        control_options: MapControlOptions,
        #[serde(default)]
        tile_layers: Vec<TileLayer>,
        #[serde(default)]
        markers: Vec<Marker>,
        #[serde(default)]
        circle_markers: Vec<CircleMarker>,
        #[serde(default)]
        polylines: Vec<Polyline>,
    },
    #[serde(rename_all = "camelCase")]
    SetLayers {
        container: MapHandle,
        #[serde(default)]
        markers: Vec<Marker>,
        #[serde(default)]
        circle_markers: Vec<CircleMarker>,
        #[serde(default)]
        polylines: Vec<Polyline>,
    },
    #[serde(rename_all = "camelCase")]
    SetTileLayers {
        container: MapHandle,
        tile_layers: Vec<TileLayer>,
    },
    #[serde(rename_all = "camelCase")]
    SetMapControls {
        container: MapHandle,
        control_options: MapControlOptions,
    },
    #[serde(rename_all = "camelCase")]
    SetMapOptions {
        container: MapHandle,
        map_options: MapOptions,
    },
    InvalidateSize {
        container: MapHandle,
    },
    #[serde(rename_all = "camelCase")]
    FitBounds {
        container: MapHandle,
        fit_bounds_options: FitBoundsOptions,
    },
    DisposeMap {
        container: MapHandle,
    },
}

impl MapCall {
    pub fn method_name(&self) -> &'static str {
        match self {
            MapCall::CreateMap { .. } => "createMap",
            MapCall::SetLayers { .. } => "setLayers",
            MapCall::SetTileLayers { .. } => "setTileLayers",
            MapCall::SetMapControls { .. } => "setMapControls",
            MapCall::SetMapOptions { .. } => "setMapOptions",
            MapCall::InvalidateSize { .. } => "invalidateSize",
            MapCall::FitBounds { .. } => "fitBounds",
            MapCall::DisposeMap { .. } => "disposeMap",
        }
    }

    pub fn container(&self) -> &MapHandle {
        match self {
            MapCall::CreateMap { container, .. }
            | MapCall::SetLayers { container, .. }
            | MapCall::SetTileLayers { container, .. }
            | MapCall::SetMapControls { container, .. }
            | MapCall::SetMapOptions { container, .. }
            | MapCall::InvalidateSize { container }
            | MapCall::FitBounds { container, .. }
            | MapCall::DisposeMap { container } => container,
        }
    }
}
