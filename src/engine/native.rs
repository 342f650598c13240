use super::events::{ControlId, EngineEvent, LayerId, SurfaceId, TileLayerId};
use crate::{
    core::{
        config::EngineConfig,
        geo::{LatLng, LatLngBounds, Point},
        handle::MapHandle,
        viewport::Viewport,
    },
    layers::{
        convert::{LayerSpec, TooltipSpec},
        tile::TileLayerSpec,
    },
    prelude::{HashMap, HashSet},
    traits::{FitPadding, MapBackend, SurfaceOptions},
    ui::controls::ControlSpec,
    MapError, Result,
};

#[derive(Debug)]
struct SurfaceState {
    container: MapHandle,
    viewport: Viewport,
    layers: Vec<LayerId>,
    tile_layers: Vec<(TileLayerId, TileLayerSpec)>,
    controls: Vec<(ControlId, ControlSpec)>,
    attribution_prefix: bool,
}

#[derive(Debug, Default)]
struct ContainerState {
    classes: HashSet<String>,
    /// Size reported by the host, if any
    size: Option<Point>,
    surface: Option<SurfaceId>,
}

#[derive(Debug)]
struct LayerState {
    spec: LayerSpec,
    tooltip: Option<TooltipSpec>,
}

/// In-memory implementation of [`MapBackend`]
#[derive(Debug)]
pub struct NativeBackend {
    config: EngineConfig,
    next_id: u64,
    surfaces: HashMap<SurfaceId, SurfaceState>,
    containers: HashMap<MapHandle, ContainerState>,
    layers: HashMap<LayerId, LayerState>,
    journal: Vec<EngineEvent>,
}

impl Default for NativeBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeBackend {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            next_id: 1,
            surfaces: HashMap::default(),
            containers: HashMap::default(),
            layers: HashMap::default(),
            journal: Vec::new(),
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn record(&mut self, event: EngineEvent) {
        log::trace!("engine: {:?}", event);
        self.journal.push(event);
    }

    fn surface_mut(&mut self, surface: &SurfaceId) -> Option<&mut SurfaceState> {
        let state = self.surfaces.get_mut(surface);
        if state.is_none() {
            log::warn!("{} has been removed, ignoring call", surface);
        }
        state
    }

    fn container_size(&self, container: &MapHandle) -> Point {
        self.containers
            .get(container)
            .and_then(|state| state.size)
            .unwrap_or_else(|| self.config.container_size())
    }

    /// Reports the current pixel size of a container.
    ///
    /// Surfaces pick the new size up on their next size invalidation.
    pub fn set_container_size(&mut self, container: &MapHandle, size: Point) {
        self.containers.entry(container.clone()).or_default().size = Some(size);
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn surface_for(&self, container: &MapHandle) -> Option<SurfaceId> {
        self.containers.get(container).and_then(|state| state.surface)
    }

    pub fn viewport(&self, surface: &SurfaceId) -> Option<&Viewport> {
        self.surfaces.get(surface).map(|state| &state.viewport)
    }

    /// Attached layers in paint order, bottom first
    pub fn layers_on(&self, surface: &SurfaceId) -> Vec<LayerId> {
        self.surfaces
            .get(surface)
            .map(|state| state.layers.clone())
            .unwrap_or_default()
    }

    pub fn layer_spec(&self, layer: &LayerId) -> Option<&LayerSpec> {
        self.layers.get(layer).map(|state| &state.spec)
    }

    pub fn tooltip_of(&self, layer: &LayerId) -> Option<&TooltipSpec> {
        self.layers.get(layer).and_then(|state| state.tooltip.as_ref())
    }

    pub fn tile_layers_on(&self, surface: &SurfaceId) -> Vec<&TileLayerSpec> {
        self.surfaces
            .get(surface)
            .map(|state| state.tile_layers.iter().map(|(_, spec)| spec).collect())
            .unwrap_or_default()
    }

    pub fn controls_on(&self, surface: &SurfaceId) -> usize {
        self.surfaces
            .get(surface)
            .map_or(0, |state| state.controls.len())
    }

    pub fn control_specs_on(&self, surface: &SurfaceId) -> Vec<&ControlSpec> {
        self.surfaces
            .get(surface)
            .map(|state| state.controls.iter().map(|(_, spec)| spec).collect())
            .unwrap_or_default()
    }

    pub fn attribution_prefix(&self, surface: &SurfaceId) -> Option<bool> {
        self.surfaces
            .get(surface)
            .map(|state| state.attribution_prefix)
    }

    pub fn container_has_class(&self, container: &MapHandle, class: &str) -> bool {
        self.containers
            .get(container)
            .map_or(false, |state| state.classes.contains(class))
    }

    pub fn journal(&self) -> &[EngineEvent] {
        &self.journal
    }

    /// Number of journal entries matching `predicate`
    pub fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&EngineEvent) -> bool,
    {
        self.journal.iter().filter(|event| predicate(event)).count()
    }

    pub fn clear_journal(&mut self) {
        self.journal.clear();
    }
}

impl MapBackend for NativeBackend {
    type Surface = SurfaceId;
    type Layer = LayerId;
    type TileLayer = TileLayerId;
    type Control = ControlId;

    fn create_surface(
        &mut self,
        container: &MapHandle,
        options: SurfaceOptions,
    ) -> Result<(SurfaceId, Vec<TileLayerId>)> {
        if let Some(existing) = self.surface_for(container) {
            return Err(MapError::Backend(format!(
                "container '{}' already hosts {}",
                container, existing
            )));
        }

        let mut viewport = Viewport::new(options.center, options.zoom, self.container_size(container));
        viewport.set_zoom_limits(self.config.min_zoom, self.config.max_zoom);

        let surface = SurfaceId(self.next_id());
        self.surfaces.insert(
            surface,
            SurfaceState {
                container: container.clone(),
                viewport,
                layers: Vec::new(),
                tile_layers: Vec::new(),
                controls: Vec::new(),
                attribution_prefix: true,
            },
        );
        self.containers.entry(container.clone()).or_default().surface = Some(surface);
        self.record(EngineEvent::SurfaceCreated {
            surface,
            container: container.clone(),
        });

        let tile_layers = options
            .tile_layers
            .into_iter()
            .map(|spec| self.add_tile_layer(&surface, spec))
            .collect();

        Ok((surface, tile_layers))
    }

    fn remove_surface(&mut self, surface: &SurfaceId) {
        let Some(state) = self.surfaces.remove(surface) else {
            log::warn!("{} already removed", surface);
            return;
        };

        // Removing a map releases whatever is still attached to it
        for layer in &state.layers {
            self.layers.remove(layer);
        }
        if let Some(container) = self.containers.get_mut(&state.container) {
            container.surface = None;
        }
        self.record(EngineEvent::SurfaceRemoved { surface: *surface });
    }

    fn create_layer(&mut self, spec: LayerSpec) -> LayerId {
        let layer = LayerId(self.next_id());
        let kind = spec.kind();
        self.layers.insert(layer, LayerState { spec, tooltip: None });
        self.record(EngineEvent::LayerCreated { layer, kind });
        layer
    }

    fn bind_tooltip(&mut self, layer: &LayerId, tooltip: TooltipSpec) {
        match self.layers.get_mut(layer) {
            Some(state) => state.tooltip = Some(tooltip),
            None => {
                log::warn!("cannot bind tooltip to unknown {}", layer);
                return;
            }
        }
        self.record(EngineEvent::TooltipBound { layer: *layer });
    }

    fn attach_layer(&mut self, surface: &SurfaceId, layer: &LayerId) {
        let Some(state) = self.surface_mut(surface) else {
            return;
        };
        if state.layers.contains(layer) {
            return;
        }
        state.layers.push(*layer);
        self.record(EngineEvent::LayerAttached {
            surface: *surface,
            layer: *layer,
        });
    }

    fn detach_layer(&mut self, surface: &SurfaceId, layer: &LayerId) {
        let Some(state) = self.surface_mut(surface) else {
            return;
        };
        let before = state.layers.len();
        state.layers.retain(|attached| attached != layer);
        if state.layers.len() == before {
            return;
        }
        // Detached layers are released
        self.layers.remove(layer);
        self.record(EngineEvent::LayerDetached {
            surface: *surface,
            layer: *layer,
        });
    }

    fn add_tile_layer(&mut self, surface: &SurfaceId, spec: TileLayerSpec) -> TileLayerId {
        let tile_layer = TileLayerId(self.next_id());
        if let Some(state) = self.surface_mut(surface) {
            state.tile_layers.push((tile_layer, spec));
            self.record(EngineEvent::TileLayerAdded {
                surface: *surface,
                tile_layer,
            });
        }
        tile_layer
    }

    fn remove_tile_layer(&mut self, surface: &SurfaceId, tile_layer: &TileLayerId) {
        let Some(state) = self.surface_mut(surface) else {
            return;
        };
        state.tile_layers.retain(|(id, _)| id != tile_layer);
        self.record(EngineEvent::TileLayerRemoved {
            surface: *surface,
            tile_layer: *tile_layer,
        });
    }

    fn add_control(&mut self, surface: &SurfaceId, spec: ControlSpec) -> ControlId {
        let control = ControlId(self.next_id());
        let kind = spec.kind();
        if let Some(state) = self.surface_mut(surface) {
            state.controls.push((control, spec));
            self.record(EngineEvent::ControlAdded {
                surface: *surface,
                control,
                kind,
            });
        }
        control
    }

    fn remove_control(&mut self, surface: &SurfaceId, control: &ControlId) {
        let Some(state) = self.surface_mut(surface) else {
            return;
        };
        state.controls.retain(|(id, _)| id != control);
        self.record(EngineEvent::ControlRemoved {
            surface: *surface,
            control: *control,
        });
    }

    fn set_view(&mut self, surface: &SurfaceId, center: LatLng, zoom: f64) {
        let Some(state) = self.surface_mut(surface) else {
            return;
        };
        state.viewport.set_view(center, zoom);
        let (center, zoom) = (state.viewport.center, state.viewport.zoom);
        self.record(EngineEvent::ViewSet {
            surface: *surface,
            center,
            zoom,
        });
    }

    fn fit_bounds(&mut self, surface: &SurfaceId, bounds: &LatLngBounds, padding: FitPadding) {
        let Some(state) = self.surface_mut(surface) else {
            return;
        };

        // Corner paddings win over the uniform one
        let top_left = padding.top_left.or(padding.padding).unwrap_or_default();
        let bottom_right = padding.bottom_right.or(padding.padding).unwrap_or_default();
        state.viewport.fit_bounds(bounds, top_left, bottom_right);

        self.record(EngineEvent::BoundsFitted {
            surface: *surface,
            bounds: *bounds,
            padding,
        });
    }

    fn invalidate_size(&mut self, surface: &SurfaceId) {
        let Some(container) = self.surfaces.get(surface).map(|state| state.container.clone())
        else {
            log::warn!("{} has been removed, ignoring call", surface);
            return;
        };
        let size = self.container_size(&container);
        if let Some(state) = self.surfaces.get_mut(surface) {
            state.viewport.set_size(size);
        }
        self.record(EngineEvent::SizeInvalidated { surface: *surface });
    }

    fn set_attribution_prefix(&mut self, surface: &SurfaceId, visible: bool) {
        let Some(state) = self.surface_mut(surface) else {
            return;
        };
        state.attribution_prefix = visible;
        self.record(EngineEvent::AttributionPrefixSet {
            surface: *surface,
            visible,
        });
    }

    fn set_container_class(&mut self, container: &MapHandle, class: &str, enabled: bool) {
        let state = self.containers.entry(container.clone()).or_default();
        if enabled {
            state.classes.insert(class.to_string());
        } else {
            state.classes.remove(class);
        }
        self.record(EngineEvent::ContainerClassSet {
            container: container.clone(),
            class: class.to_string(),
            enabled,
        });
    }
}
