//! Headless, in-process map engine.
//!
//! [`NativeBackend`] keeps every surface's viewport, layers, tile layers and
//! controls in memory and records each change in a journal. It is the default
//! backend for hosts without a rendering engine of their own.

mod events;
mod native;

pub use events::{ControlId, EngineEvent, LayerId, SurfaceId, TileLayerId};
pub use native::NativeBackend;
