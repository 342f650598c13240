//! Host side of the interop boundary

pub mod channel;
pub mod component;

pub use channel::{safe_invoke, HostHelper, InteropChannel, InteropError, LocalChannel};
pub use component::{MapComponent, MapParameters};
