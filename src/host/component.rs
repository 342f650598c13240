//! Host-side lifecycle of one mounted map.
//!
//! Mounting sends `createMap`; the bridge answers through the ready callback.
//! That callback waits for the settle delay, forces a size recalculation and
//! only then opens the completion gate. Disposal waits on the same gate so a
//! map is never torn down while it is still being built.

use crate::{
    bridge::protocol::MapCall,
    core::{config::BridgeConfig, constants::MAP_READY_METHOD, handle::MapHandle},
    host::channel::{absorb, safe_invoke, HostHelper, InteropChannel, InteropError},
    models::{CircleMarker, MapControlOptions, MapOptions, Marker, Polyline, TileLayer},
};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tokio::sync::watch;

/// Everything the host can change on a mounted map
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MapParameters {
    pub map_options: MapOptions,
    pub control_options: MapControlOptions,
    pub tile_layers: Vec<TileLayer>,
    pub markers: Vec<Marker>,
    pub circle_markers: Vec<CircleMarker>,
    pub polylines: Vec<Polyline>,
}

impl MapParameters {
    fn layers_differ(&self, other: &Self) -> bool {
        self.markers != other.markers
            || self.circle_markers != other.circle_markers
            || self.polylines != other.polylines
    }
}

struct ComponentState<C> {
    channel: Rc<C>,
    container: MapHandle,
    config: BridgeConfig,
    /// Parameters last sent to the bridge
    params: RefCell<MapParameters>,
    /// Flips to `true` once construction has finished, successfully or not
    gate: watch::Sender<bool>,
    ready: Cell<bool>,
    mounted: Cell<bool>,
    disposing: Cell<bool>,
}

#[async_trait(?Send)]
impl<C: InteropChannel> HostHelper for ComponentState<C> {
    async fn invoke_method(&self, method: &str) -> Result<(), InteropError> {
        if method != MAP_READY_METHOD {
            return Err(InteropError::Failed(format!("unknown method {}", method)));
        }
        if self.ready.get() {
            return Ok(());
        }

        tokio::time::sleep(self.config.settle_delay()).await;
        safe_invoke(
            self.channel.as_ref(),
            MapCall::InvalidateSize {
                container: self.container.clone(),
            },
        )
        .await;

        self.ready.set(true);
        self.gate.send_replace(true);
        log::debug!("map '{}' is ready", self.container);
        Ok(())
    }
}

/// A map mounted by the host.
///
/// Every failure on the channel is absorbed and logged; none of the
/// lifecycle methods return errors.
pub struct MapComponent<C: InteropChannel + 'static> {
    state: Rc<ComponentState<C>>,
}

impl<C: InteropChannel + 'static> MapComponent<C> {
    /// Component in a freshly generated container
    pub fn new(channel: Rc<C>, params: MapParameters, config: BridgeConfig) -> Self {
        Self::with_container(channel, MapHandle::generate(), params, config)
    }

    pub fn with_container(
        channel: Rc<C>,
        container: MapHandle,
        params: MapParameters,
        config: BridgeConfig,
    ) -> Self {
        let (gate, _) = watch::channel(false);
        Self {
            state: Rc::new(ComponentState {
                channel,
                container,
                config,
                params: RefCell::new(params),
                gate,
                ready: Cell::new(false),
                mounted: Cell::new(false),
                disposing: Cell::new(false),
            }),
        }
    }

    pub fn container(&self) -> &MapHandle {
        &self.state.container
    }

    pub fn is_ready(&self) -> bool {
        self.state.ready.get()
    }

    pub fn parameters(&self) -> MapParameters {
        self.state.params.borrow().clone()
    }

    /// Requests the map. Only the first call has an effect, and none after
    /// [`dispose`](Self::dispose).
    pub async fn mount(&self) {
        let state = &self.state;
        if state.disposing.get() || state.mounted.replace(true) {
            return;
        }

        let call = {
            let params = state.params.borrow();
            MapCall::CreateMap {
                completion_method: MAP_READY_METHOD.to_string(),
                container: state.container.clone(),
                map_options: params.map_options.clone(),
                control_options: params.control_options.clone(),
                tile_layers: params.tile_layers.clone(),
                markers: params.markers.clone(),
                circle_markers: params.circle_markers.clone(),
                polylines: params.polylines.clone(),
            }
        };

        let helper: Rc<dyn HostHelper> = Rc::clone(state) as Rc<dyn HostHelper>;
        let created = absorb("createMap", state.channel.create_map(helper, call).await);
        if !created {
            // Nothing will ever signal readiness; let disposal proceed
            state.gate.send_replace(true);
        }
    }

    /// Pushes changed parameters to the map.
    ///
    /// Ignored until the map is ready. Each group (options, controls, tile
    /// layers, layers) is only re-sent when it differs from what was last sent.
    pub async fn set_parameters(&self, next: MapParameters) {
        let state = &self.state;
        if !state.ready.get() || state.disposing.get() {
            log::debug!("map '{}' not ready, ignoring parameter update", state.container);
            return;
        }

        let previous = state.params.replace(next.clone());
        let container = &state.container;
        let channel = state.channel.as_ref();

        if previous.map_options != next.map_options {
            safe_invoke(
                channel,
                MapCall::SetMapOptions {
                    container: container.clone(),
                    map_options: next.map_options.clone(),
                },
            )
            .await;
        }
        if previous.control_options != next.control_options {
            safe_invoke(
                channel,
                MapCall::SetMapControls {
                    container: container.clone(),
                    control_options: next.control_options.clone(),
                },
            )
            .await;
        }
        if previous.tile_layers != next.tile_layers {
            safe_invoke(
                channel,
                MapCall::SetTileLayers {
                    container: container.clone(),
                    tile_layers: next.tile_layers.clone(),
                },
            )
            .await;
        }
        if previous.layers_differ(&next) {
            safe_invoke(
                channel,
                MapCall::SetLayers {
                    container: container.clone(),
                    markers: next.markers,
                    circle_markers: next.circle_markers,
                    polylines: next.polylines,
                },
            )
            .await;
        }
    }

    /// Tears the map down once construction has finished. Safe to call more
    /// than once; later calls return immediately.
    pub async fn dispose(&self) {
        let state = &self.state;
        if state.disposing.replace(true) {
            return;
        }
        if !state.mounted.get() {
            return;
        }

        let mut settled = state.gate.subscribe();
        if settled.wait_for(|done| *done).await.is_err() {
            return;
        }

        safe_invoke(
            state.channel.as_ref(),
            MapCall::DisposeMap {
                container: state.container.clone(),
            },
        )
        .await;
        state.ready.set(false);
    }
}
