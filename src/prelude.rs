//! Prelude module for common mapbridge types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapbridge::prelude::*;`

pub use crate::core::{
    config::{BridgeConfig, BridgeProfile, EngineConfig},
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    handle::MapHandle,
    viewport::Viewport,
};

pub use crate::models::{
    CenterControlOptions, CircleMarker, ControlPosition, Coordinate, FitBoundsOptions,
    MapControlOptions, MapOptions, MapTheme, Marker, PathStyle, Polyline, ScaleControlOptions,
    TileLayer, Tooltip, TooltipDirection, TooltipOffset, ZoomControlOptions,
};

pub use crate::layers::{
    base::{LayerDescriptor, LayerKind},
    registry::{LayerEntry, LayerRegistry},
};

pub use crate::bridge::{facade::MapFacade, protocol::MapCall, registry::MapRegistry};

pub use crate::engine::{EngineEvent, NativeBackend};

pub use crate::host::{
    channel::{safe_invoke, HostHelper, InteropChannel, InteropError, LocalChannel},
    component::{MapComponent, MapParameters},
};

pub use crate::traits::{FitPadding, MapBackend, SurfaceOptions};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet, FxHasher};
