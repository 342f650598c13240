//! # mapbridge
//!
//! State synchronization between a host UI framework and an interactive map
//! engine.
//!
//! The host describes maps declaratively (options, controls, tile layers,
//! markers, circle markers, polylines). The bridge keeps a registry of live
//! maps keyed by container, realizes the descriptions through a
//! [`MapBackend`], and exposes a flat set of operations that the host calls
//! across an interop channel.

pub mod bridge;
pub mod core;
pub mod engine;
pub mod host;
pub mod layers;
pub mod models;
pub mod prelude;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{BridgeConfig, BridgeProfile, EngineConfig},
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    handle::MapHandle,
    viewport::Viewport,
};

pub use bridge::{facade::MapFacade, protocol::MapCall, registry::MapRegistry};

pub use engine::{EngineEvent, NativeBackend};

pub use host::{
    channel::{safe_invoke, HostHelper, InteropChannel, InteropError, LocalChannel},
    component::{MapComponent, MapParameters},
};

pub use layers::{base::LayerDescriptor, registry::LayerRegistry};

pub use traits::{FitPadding, MapBackend, SurfaceOptions};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Map already initialized for container '{0}'")]
    AlreadyInitialized(MapHandle),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the `log` backend, honoring `RUST_LOG`.
///
/// Calling it again is harmless.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
