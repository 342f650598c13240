use crate::{
    core::handle::MapHandle,
    layers::{registry::LayerRegistry, tile::TileLayerSet},
    prelude::HashMap,
    traits::MapBackend,
    ui::controls::ControlManager,
};

/// Everything the bridge tracks for one live map
pub struct MapInstance<B: MapBackend> {
    pub(crate) surface: B::Surface,
    pub(crate) layers: LayerRegistry<B::Layer>,
    pub(crate) tile_layers: TileLayerSet<B::TileLayer>,
    pub(crate) controls: ControlManager<B::Control>,
}

impl<B: MapBackend> MapInstance<B> {
    pub(crate) fn new(surface: B::Surface, tile_layers: Vec<B::TileLayer>) -> Self {
        Self {
            surface,
            layers: LayerRegistry::new(),
            tile_layers: TileLayerSet::from_realized(tile_layers),
            controls: ControlManager::new(),
        }
    }

    pub fn surface(&self) -> &B::Surface {
        &self.surface
    }

    pub fn layers(&self) -> &LayerRegistry<B::Layer> {
        &self.layers
    }

    pub fn tile_layers(&self) -> &TileLayerSet<B::TileLayer> {
        &self.tile_layers
    }

    pub fn controls(&self) -> &ControlManager<B::Control> {
        &self.controls
    }

    /// Detaches layers, tile layers and controls, then removes the surface
    pub(crate) fn tear_down(mut self, backend: &mut B) {
        self.layers.remove_all(backend, &self.surface);
        self.tile_layers.remove_all(backend, &self.surface);
        self.controls.detach_all(backend, &self.surface);
        backend.remove_surface(&self.surface);
    }
}

impl<B: MapBackend> std::fmt::Debug for MapInstance<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapInstance")
            .field("surface", &self.surface)
            .field("layers", &self.layers.len())
            .field("tile_layers", &self.tile_layers.len())
            .field("controls", &self.controls.len())
            .finish()
    }
}

/// Table of live maps keyed by container.
///
/// One registry is created per bridge and injected into the facade; there is
/// no process-wide instance.
pub struct MapRegistry<B: MapBackend> {
    instances: HashMap<MapHandle, MapInstance<B>>,
}

impl<B: MapBackend> Default for MapRegistry<B> {
    fn default() -> Self {
        Self {
            instances: HashMap::default(),
        }
    }
}

impl<B: MapBackend> MapRegistry<B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, container: &MapHandle) -> bool {
        self.instances.contains_key(container)
    }

    pub fn get(&self, container: &MapHandle) -> Option<&MapInstance<B>> {
        self.instances.get(container)
    }

    pub(crate) fn get_mut(&mut self, container: &MapHandle) -> Option<&mut MapInstance<B>> {
        self.instances.get_mut(container)
    }

    pub(crate) fn insert(&mut self, container: MapHandle, instance: MapInstance<B>) {
        self.instances.insert(container, instance);
    }

    pub(crate) fn remove(&mut self, container: &MapHandle) -> Option<MapInstance<B>> {
        self.instances.remove(container)
    }

    pub fn handles(&self) -> impl Iterator<Item = &MapHandle> {
        self.instances.keys()
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
