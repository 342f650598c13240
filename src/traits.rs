//! The seam between the bridge and the map engine
//!
//! Everything the bridge asks of a concrete mapping library goes through
//! [`MapBackend`]. The bridge never inspects realized objects; it only keeps
//! them as opaque, hashable tokens and hands them back for removal.

use crate::{
    core::{
        constants::{DEFAULT_CENTER, DEFAULT_ZOOM},
        geo::{LatLng, LatLngBounds, Point},
        handle::MapHandle,
    },
    layers::{
        convert::{LayerSpec, TooltipSpec},
        tile::TileLayerSpec,
    },
    ui::controls::ControlSpec,
    Result,
};
use std::fmt::Debug;
use std::hash::Hash;

/// Initial view of a new surface
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    pub center: LatLng,
    pub zoom: f64,
    /// Tile layers attached while the surface is built
    pub tile_layers: Vec<TileLayerSpec>,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
            tile_layers: Vec::new(),
        }
    }
}

/// Padding forwarded to the engine's fit-bounds primitive, in screen pixels.
///
/// The bridge passes the three values through as given. How they combine is
/// the engine's business.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitPadding {
    pub top_left: Option<Point>,
    pub bottom_right: Option<Point>,
    pub padding: Option<Point>,
}

/// A concrete mapping library driven by the bridge
pub trait MapBackend {
    /// A live map bound to one container
    type Surface: Clone + Debug;
    /// A realized marker, circle marker or polyline
    type Layer: Clone + Eq + Hash + Debug;
    type TileLayer: Clone + Debug;
    type Control: Clone + Debug;

    /// Builds a surface inside `container`, with `options.tile_layers` already
    /// attached. Returns the surface and the realized tile layers in input order.
    fn create_surface(
        &mut self,
        container: &MapHandle,
        options: SurfaceOptions,
    ) -> Result<(Self::Surface, Vec<Self::TileLayer>)>;

    /// Tears the surface down and releases the container
    fn remove_surface(&mut self, surface: &Self::Surface);

    /// Constructs a layer without attaching it anywhere
    fn create_layer(&mut self, spec: LayerSpec) -> Self::Layer;
    fn bind_tooltip(&mut self, layer: &Self::Layer, tooltip: TooltipSpec);
    fn attach_layer(&mut self, surface: &Self::Surface, layer: &Self::Layer);
    fn detach_layer(&mut self, surface: &Self::Surface, layer: &Self::Layer);

    fn add_tile_layer(&mut self, surface: &Self::Surface, spec: TileLayerSpec) -> Self::TileLayer;
    fn remove_tile_layer(&mut self, surface: &Self::Surface, tile_layer: &Self::TileLayer);

    fn add_control(&mut self, surface: &Self::Surface, spec: ControlSpec) -> Self::Control;
    fn remove_control(&mut self, surface: &Self::Surface, control: &Self::Control);

    fn set_view(&mut self, surface: &Self::Surface, center: LatLng, zoom: f64);
    fn fit_bounds(&mut self, surface: &Self::Surface, bounds: &LatLngBounds, padding: FitPadding);

    /// Re-reads the container size and recomputes layout
    fn invalidate_size(&mut self, surface: &Self::Surface);

    /// Shows or hides the engine's own prefix in the attribution line
    fn set_attribution_prefix(&mut self, surface: &Self::Surface, visible: bool);

    /// Adds or removes a CSS class on the container element
    fn set_container_class(&mut self, container: &MapHandle, class: &str, enabled: bool);
}
