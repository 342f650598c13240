//! The registry of live maps and the operations exposed to the host

pub mod facade;
pub mod protocol;
pub mod registry;

pub use facade::MapFacade;
pub use protocol::MapCall;
pub use registry::{MapInstance, MapRegistry};
