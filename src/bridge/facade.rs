use crate::{
    bridge::{
        protocol::MapCall,
        registry::{MapInstance, MapRegistry},
    },
    core::{config::BridgeConfig, geo::LatLng, handle::MapHandle},
    layers::{base::LayerDescriptor, fit, registry::LayerEntry, tile::TileLayerSpec},
    models::{
        CircleMarker, FitBoundsOptions, MapControlOptions, MapOptions, MapTheme, Marker, Polyline,
        TileLayer,
    },
    traits::{MapBackend, SurfaceOptions},
    MapError, Result,
};

/// Flat set of map operations keyed by container.
///
/// Operations on a container without a live map do nothing. Only
/// [`MapFacade::create_map`] and the JSON entry point report errors.
pub struct MapFacade<B: MapBackend> {
    backend: B,
    maps: MapRegistry<B>,
    config: BridgeConfig,
}

impl<B: MapBackend> MapFacade<B> {
    pub fn new(backend: B) -> Self {
        Self::with_config(backend, BridgeConfig::default())
    }

    pub fn with_config(backend: B, config: BridgeConfig) -> Self {
        Self {
            backend,
            maps: MapRegistry::new(),
            config,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn maps(&self) -> &MapRegistry<B> {
        &self.maps
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Builds a map inside `container` and applies the initial tile layers,
    /// controls and layers.
    ///
    /// Fails without touching anything when the container already hosts a map.
    #[allow(clippy::too_many_arguments)]
    pub fn create_map(
        &mut self,
        container: &MapHandle,
        options: &MapOptions,
        controls: &MapControlOptions,
        tile_layers: &[TileLayer],
        markers: &[Marker],
        circle_markers: &[CircleMarker],
        polylines: &[Polyline],
    ) -> Result<()> {
        if self.maps.contains(container) {
            log::warn!("map for '{}' is already initialized", container);
            return Err(MapError::AlreadyInitialized(container.clone()));
        }

        let center = LatLng::from(options.center);
        if !center.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "center ({}, {}) of '{}'",
                center.lat, center.lng, container
            )));
        }

        let (surface, realized_tiles) = self.backend.create_surface(
            container,
            SurfaceOptions {
                center,
                zoom: options.zoom,
                tile_layers: tile_layers.iter().map(TileLayerSpec::from).collect(),
            },
        )?;
        let mut instance = MapInstance::new(surface, realized_tiles);

        self.backend
            .set_attribution_prefix(&instance.surface, options.show_attribution_prefix);
        if options.theme == MapTheme::Dark {
            self.backend
                .set_container_class(container, &self.config.dark_theme_class, true);
        }

        instance
            .controls
            .apply(&mut self.backend, &instance.surface, controls);
        instance.layers.replace_all(
            &mut self.backend,
            &instance.surface,
            markers,
            circle_markers,
            polylines,
        );

        if let Some(fit_options) = &options.fit_bounds_options {
            fit::fit_bounds(&mut self.backend, &instance.surface, &instance.layers, fit_options);
        }

        log::info!(
            "created map '{}' with {} tile layers, {} controls and {} layers",
            container,
            instance.tile_layers.len(),
            instance.controls.len(),
            instance.layers.len()
        );
        self.maps.insert(container.clone(), instance);
        Ok(())
    }

    /// Replaces every layer of the map with the given descriptors
    pub fn set_layers(
        &mut self,
        container: &MapHandle,
        markers: &[Marker],
        circle_markers: &[CircleMarker],
        polylines: &[Polyline],
    ) {
        let Some(instance) = self.maps.get_mut(container) else {
            log::trace!("set_layers: no map for '{}'", container);
            return;
        };
        instance.layers.replace_all(
            &mut self.backend,
            &instance.surface,
            markers,
            circle_markers,
            polylines,
        );
    }

    pub fn set_tile_layers(&mut self, container: &MapHandle, tile_layers: &[TileLayer]) {
        let Some(instance) = self.maps.get_mut(container) else {
            log::trace!("set_tile_layers: no map for '{}'", container);
            return;
        };
        instance
            .tile_layers
            .replace_all(&mut self.backend, &instance.surface, tile_layers);
    }

    pub fn set_map_controls(&mut self, container: &MapHandle, controls: &MapControlOptions) {
        let Some(instance) = self.maps.get_mut(container) else {
            log::trace!("set_map_controls: no map for '{}'", container);
            return;
        };
        instance
            .controls
            .apply(&mut self.backend, &instance.surface, controls);
    }

    /// Applies the theme of `options`.
    ///
    /// The theme class lives on the container, so it is toggled even when no
    /// map has been built in it. Center and zoom are not touched.
    pub fn set_map_options(&mut self, container: &MapHandle, options: &MapOptions) {
        self.backend.set_container_class(
            container,
            &self.config.dark_theme_class,
            options.theme == MapTheme::Dark,
        );
    }

    pub fn invalidate_size(&mut self, container: &MapHandle) {
        let Some(instance) = self.maps.get(container) else {
            log::trace!("invalidate_size: no map for '{}'", container);
            return;
        };
        self.backend.invalidate_size(&instance.surface);
    }

    /// Fits the map to the named layers. Returns whether the view was changed.
    pub fn fit_bounds(&mut self, container: &MapHandle, options: &FitBoundsOptions) -> bool {
        let Some(instance) = self.maps.get(container) else {
            log::trace!("fit_bounds: no map for '{}'", container);
            return false;
        };
        fit::fit_bounds(&mut self.backend, &instance.surface, &instance.layers, options)
    }

    pub fn fit_to_layer(&mut self, container: &MapHandle, id: &str) -> bool {
        let Some(instance) = self.maps.get(container) else {
            log::trace!("fit_to_layer: no map for '{}'", container);
            return false;
        };
        fit::fit_to_layer(&mut self.backend, &instance.surface, &instance.layers, id)
    }

    /// Routes a click on the map's center control
    pub fn click_center_control(&mut self, container: &MapHandle) -> bool {
        let Some(instance) = self.maps.get(container) else {
            return false;
        };
        instance
            .controls
            .on_center_click(&mut self.backend, &instance.surface, &instance.layers)
    }

    pub fn layer(&self, container: &MapHandle, id: &str) -> Option<&LayerEntry<B::Layer>> {
        self.maps.get(container)?.layers.get(id)
    }

    /// Resolves an engine layer (for example the target of a click) to its descriptor
    pub fn descriptor_for(&self, container: &MapHandle, layer: &B::Layer) -> Option<&LayerDescriptor> {
        self.maps.get(container)?.layers.descriptor_for(layer)
    }

    /// Tears the map down and forgets the container. Returns `false` when
    /// there was nothing to dispose.
    pub fn dispose_map(&mut self, container: &MapHandle) -> bool {
        let Some(instance) = self.maps.remove(container) else {
            log::trace!("dispose_map: no map for '{}'", container);
            return false;
        };
        instance.tear_down(&mut self.backend);
        log::info!("disposed map '{}'", container);
        true
    }

    /// Executes a decoded call
    pub fn dispatch(&mut self, call: MapCall) -> Result<()> {
        log::debug!("dispatching {} for '{}'", call.method_name(), call.container());

        match call {
            MapCall::CreateMap {
                container,
                map_options,
                control_options,
                tile_layers,
                markers,
                circle_markers,
                polylines,
                ..
            } => self.create_map(
                &container,
                &map_options,
                &control_options,
                &tile_layers,
                &markers,
                &circle_markers,
                &polylines,
            )?,
            MapCall::SetLayers {
                container,
                markers,
                circle_markers,
                polylines,
            } => self.set_layers(&container, &markers, &circle_markers, &polylines),
            MapCall::SetTileLayers {
                container,
                tile_layers,
            } => self.set_tile_layers(&container, &tile_layers),
            MapCall::SetMapControls {
                container,
                control_options,
            } => self.set_map_controls(&container, &control_options),
            MapCall::SetMapOptions {
                container,
                map_options,
            } => self.set_map_options(&container, &map_options),
            MapCall::InvalidateSize { container } => self.invalidate_size(&container),
            MapCall::FitBounds {
                container,
                fit_bounds_options,
            } => {
                self.fit_bounds(&container, &fit_bounds_options);
            }
            MapCall::DisposeMap { container } => {
                self.dispose_map(&container);
            }
        }

        Ok(())
    }

    /// Decodes and executes a JSON call
    pub fn dispatch_json(&mut self, payload: &str) -> Result<()> {
        let call: MapCall = serde_json::from_str(payload)?;
        self.dispatch(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{EngineEvent, NativeBackend};
    use crate::models::Coordinate;

    fn facade_with_map() -> (MapFacade<NativeBackend>, MapHandle) {
        let mut facade = MapFacade::new(NativeBackend::new());
        let container = MapHandle::new("facade-test");
        facade
            .create_map(
                &container,
                &MapOptions::default(),
                &MapControlOptions::default(),
                &[TileLayer::open_street_map()],
                &[],
                &[],
                &[],
            )
            .unwrap();
        (facade, container)
    }

    #[test]
    fn test_double_create_is_rejected() {
        let (mut facade, container) = facade_with_map();
        let events = facade.backend().journal().len();

        let result = facade.create_map(
            &container,
            &MapOptions::default(),
            &MapControlOptions::default(),
            &[],
            &[],
            &[],
            &[],
        );

        assert!(matches!(result, Err(MapError::AlreadyInitialized(_))));
        assert_eq!(facade.backend().journal().len(), events);
        assert_eq!(facade.maps().len(), 1);
    }

    #[test]
    fn test_invalid_center_is_rejected() {
        let mut facade = MapFacade::new(NativeBackend::new());
        let options = MapOptions::new(Coordinate::new(120.0, 6.1), 9.0);

        let result = facade.create_map(
            &MapHandle::new("bad"),
            &options,
            &MapControlOptions::default(),
            &[],
            &[],
            &[],
            &[],
        );

        assert!(matches!(result, Err(MapError::InvalidCoordinates(_))));
        assert!(facade.maps().is_empty());
        assert_eq!(facade.backend().surface_count(), 0);
    }

    #[test]
    fn test_create_with_initial_fit() {
        let mut facade = MapFacade::new(NativeBackend::new());
        let container = MapHandle::new("fit-on-create");
        let options = MapOptions {
            fit_bounds_options: Some(FitBoundsOptions::new(["m1"])),
            ..MapOptions::default()
        };

        facade
            .create_map(
                &container,
                &options,
                &MapControlOptions::none(),
                &[],
                &[Marker::new("m1", Coordinate::new(49.6, 6.1))],
                &[],
                &[],
            )
            .unwrap();

        let backend = facade.backend();
        assert_eq!(backend.count(|e| matches!(e, EngineEvent::BoundsFitted { .. })), 1);
    }

    #[test]
    fn test_hidden_attribution_prefix() {
        let mut facade = MapFacade::new(NativeBackend::new());
        let container = MapHandle::new("no-prefix");
        let options = MapOptions {
            show_attribution_prefix: false,
            ..MapOptions::default()
        };

        facade
            .create_map(&container, &options, &MapControlOptions::none(), &[], &[], &[], &[])
            .unwrap();

        let surface = *facade.maps().get(&container).unwrap().surface();
        assert_eq!(facade.backend().attribution_prefix(&surface), Some(false));
    }

    #[test]
    fn test_unknown_container_is_a_no_op() {
        let mut facade = MapFacade::new(NativeBackend::new());
        let ghost = MapHandle::new("ghost");

        facade.set_layers(&ghost, &[Marker::new("m1", Coordinate::new(1.0, 1.0))], &[], &[]);
        facade.set_tile_layers(&ghost, &[TileLayer::open_street_map()]);
        facade.set_map_controls(&ghost, &MapControlOptions::default());
        facade.invalidate_size(&ghost);
        assert!(!facade.fit_bounds(&ghost, &FitBoundsOptions::new(["m1"])));
        assert!(!facade.click_center_control(&ghost));
        assert!(!facade.dispose_map(&ghost));

        assert!(facade.backend().journal().is_empty());
    }

    #[test]
    fn test_dispose_purges_everything() {
        let (mut facade, container) = facade_with_map();
        facade.set_layers(&container, &[Marker::new("m1", Coordinate::new(1.0, 1.0))], &[], &[]);
        let surface = *facade.maps().get(&container).unwrap().surface();

        assert!(facade.dispose_map(&container));

        let backend = facade.backend();
        assert!(facade.maps().is_empty());
        assert_eq!(backend.surface_count(), 0);
        assert_eq!(backend.count(|e| matches!(e, EngineEvent::LayerDetached { .. })), 1);
        assert_eq!(backend.count(|e| matches!(e, EngineEvent::TileLayerRemoved { .. })), 1);
        assert_eq!(backend.count(|e| matches!(e, EngineEvent::ControlRemoved { .. })), 2);
        assert_eq!(
            backend.journal().last(),
            Some(&EngineEvent::SurfaceRemoved { surface })
        );
    }

    #[test]
    fn test_descriptor_lookup_by_engine_layer() {
        let (mut facade, container) = facade_with_map();
        facade.set_layers(
            &container,
            &[],
            &[CircleMarker::new("c1", Coordinate::new(1.0, 1.0))],
            &[],
        );

        let layer = facade.layer(&container, "c1").unwrap().layer;
        let descriptor = facade.descriptor_for(&container, &layer).unwrap();
        assert_eq!(descriptor.id(), "c1");
    }

    #[test]
    fn test_dispatch_json_reports_bad_payload() {
        let mut facade = MapFacade::new(NativeBackend::new());
        let result = facade.dispatch_json(r#"{"method": "disposeMap"}"#);
        assert!(matches!(result, Err(MapError::Serialization(_))));
    }
}
