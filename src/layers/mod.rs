pub mod base;
pub mod convert;
pub mod fit;
pub mod registry;
pub mod tile;

pub use base::{LayerDescriptor, LayerKind};
pub use convert::{LayerSpec, PathOptions, TooltipSpec};
pub use registry::{LayerEntry, LayerRegistry};
pub use tile::{TileLayerSet, TileLayerSpec};
