use crate::{
    core::{
        geo::{LatLng, LatLngBounds},
        handle::MapHandle,
    },
    layers::base::LayerKind,
    traits::FitPadding,
    ui::controls::ControlKind,
};

macro_rules! engine_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u64);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}#{}", stringify!($name), self.0)
            }
        }
    };
}

engine_id!(
    /// A live map surface
    SurfaceId
);
engine_id!(LayerId);
engine_id!(TileLayerId);
engine_id!(ControlId);

/// Every state change the engine performs, in order
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SurfaceCreated {
        surface: SurfaceId,
        container: MapHandle,
    },
    SurfaceRemoved {
        surface: SurfaceId,
    },
    LayerCreated {
        layer: LayerId,
        kind: LayerKind,
    },
    TooltipBound {
        layer: LayerId,
    },
    LayerAttached {
        surface: SurfaceId,
        layer: LayerId,
    },
    LayerDetached {
        surface: SurfaceId,
        layer: LayerId,
    },
    TileLayerAdded {
        surface: SurfaceId,
        tile_layer: TileLayerId,
    },
    TileLayerRemoved {
        surface: SurfaceId,
        tile_layer: TileLayerId,
    },
    ControlAdded {
        surface: SurfaceId,
        control: ControlId,
        kind: ControlKind,
    },
    ControlRemoved {
        surface: SurfaceId,
        control: ControlId,
    },
    ViewSet {
        surface: SurfaceId,
        center: LatLng,
        zoom: f64,
    },
    BoundsFitted {
        surface: SurfaceId,
        bounds: LatLngBounds,
        padding: FitPadding,
    },
    SizeInvalidated {
        surface: SurfaceId,
    },
    AttributionPrefixSet {
        surface: SurfaceId,
        visible: bool,
    },
    ContainerClassSet {
        container: MapHandle,
        class: String,
        enabled: bool,
    },
}
