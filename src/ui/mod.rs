//! Auxiliary map controls

pub mod controls;

pub use controls::{ControlKind, ControlManager, ControlSpec};
