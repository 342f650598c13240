use async_trait::async_trait;
use mapbridge::constants::MAP_READY_METHOD;
use mapbridge::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

type Channel = LocalChannel<NativeBackend>;

fn scenario_parameters() -> MapParameters {
    MapParameters {
        map_options: MapOptions::new(Coordinate::new(49.6, 6.1), 13.0),
        tile_layers: vec![TileLayer::open_street_map()],
        ..MapParameters::default()
    }
}

fn mounted_parts() -> (Rc<Channel>, MapComponent<Channel>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let channel = Rc::new(LocalChannel::new(MapFacade::new(NativeBackend::new())));
    let component = MapComponent::with_container(
        Rc::clone(&channel),
        MapHandle::new("lifecycle"),
        scenario_parameters(),
        BridgeConfig::default(),
    );
    (channel, component)
}

fn count<F>(channel: &Channel, predicate: F) -> usize
where
    F: Fn(&EngineEvent) -> bool,
{
    channel.facade().borrow().backend().count(predicate)
}

#[tokio::test(start_paused = true)]
async fn test_create_scenario_after_completion() {
    let (channel, component) = mounted_parts();

    component.mount().await;
    assert!(component.is_ready());

    let facade = channel.facade();
    let facade = facade.borrow();
    assert_eq!(facade.maps().len(), 1);
    let instance = facade.maps().get(component.container()).unwrap();
    assert_eq!(instance.tile_layers().len(), 1);
    assert!(instance.layers().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_ready_after_settle_delay_and_invalidation() {
    let (channel, component) = mounted_parts();
    let started = tokio::time::Instant::now();

    let probe = async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        let maps = channel.facade().borrow().maps().len();
        (maps, component.is_ready())
    };
    let ((), (maps_during_settle, ready_during_settle)) = futures::join!(component.mount(), probe);

    // Built, but not yet signalled
    assert_eq!(maps_during_settle, 1);
    assert!(!ready_during_settle);

    assert!(component.is_ready());
    assert!(started.elapsed() >= BridgeConfig::default().settle_delay());

    let facade = channel.facade();
    let facade = facade.borrow();
    assert!(matches!(
        facade.backend().journal().last(),
        Some(EngineEvent::SizeInvalidated { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_dispose_waits_for_construction() {
    let (channel, component) = mounted_parts();

    futures::join!(component.mount(), component.dispose());

    let facade = channel.facade();
    let facade = facade.borrow();
    assert!(facade.maps().is_empty());

    let journal = facade.backend().journal();
    let last_invalidate = journal
        .iter()
        .rposition(|e| matches!(e, EngineEvent::SizeInvalidated { .. }))
        .unwrap();
    let removed = journal
        .iter()
        .position(|e| matches!(e, EngineEvent::SurfaceRemoved { .. }))
        .unwrap();
    assert!(last_invalidate < removed);
}

#[tokio::test(start_paused = true)]
async fn test_dispose_is_idempotent() {
    let (channel, component) = mounted_parts();
    component.mount().await;

    component.dispose().await;
    component.dispose().await;

    assert!(channel.facade().borrow().maps().is_empty());
    assert_eq!(
        count(&channel, |e| matches!(e, EngineEvent::SurfaceRemoved { .. })),
        1
    );
}

#[tokio::test(start_paused = true)]
async fn test_mount_after_dispose_builds_nothing() {
    let (channel, component) = mounted_parts();

    component.dispose().await;
    component.mount().await;

    assert!(!component.is_ready());
    assert!(channel.facade().borrow().maps().is_empty());
    assert_eq!(channel.facade().borrow().backend().surface_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_disconnected_channel_is_absorbed() {
    let (channel, component) = mounted_parts();
    channel.disconnect();

    component.mount().await;
    assert!(!component.is_ready());

    let disposed = tokio::time::timeout(Duration::from_secs(1), component.dispose()).await;
    assert!(disposed.is_ok());
    assert!(channel.facade().borrow().maps().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_disconnect_after_mount() {
    let (channel, component) = mounted_parts();
    component.mount().await;
    channel.disconnect();

    component
        .set_parameters(MapParameters {
            markers: vec![Marker::new("m1", Coordinate::new(49.6, 6.1))],
            ..scenario_parameters()
        })
        .await;
    component.dispose().await;

    // Nothing reached the bridge once the host went away
    let facade = channel.facade();
    let facade = facade.borrow();
    assert_eq!(facade.maps().len(), 1);
    assert!(facade.layer(component.container(), "m1").is_none());
}

struct CancelingChannel {
    invoked: Cell<usize>,
}

#[async_trait(?Send)]
impl InteropChannel for CancelingChannel {
    async fn create_map(
        &self,
        _helper: Rc<dyn HostHelper>,
        _call: MapCall,
    ) -> std::result::Result<(), InteropError> {
        Err(InteropError::Canceled)
    }

    async fn invoke(&self, _call: MapCall) -> std::result::Result<(), InteropError> {
        self.invoked.set(self.invoked.get() + 1);
        Ok(())
    }
}

#[tokio::test(start_paused = true)]
async fn test_canceled_create_does_not_block_dispose() {
    let channel = Rc::new(CancelingChannel {
        invoked: Cell::new(0),
    });
    let component = MapComponent::new(
        Rc::clone(&channel),
        MapParameters::default(),
        BridgeConfig::default(),
    );

    component.mount().await;
    assert!(!component.is_ready());

    let disposed = tokio::time::timeout(Duration::from_secs(1), component.dispose()).await;
    assert!(disposed.is_ok());
    assert_eq!(channel.invoked.get(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_parameters_ignored_until_ready() {
    let (channel, component) = mounted_parts();

    component
        .set_parameters(MapParameters {
            markers: vec![Marker::new("early", Coordinate::new(1.0, 1.0))],
            ..scenario_parameters()
        })
        .await;

    assert_eq!(component.parameters(), scenario_parameters());
    assert!(channel.facade().borrow().maps().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_only_changed_groups_are_resent() {
    let (channel, component) = mounted_parts();
    component.mount().await;
    channel.facade().borrow_mut().backend_mut().clear_journal();

    let with_marker = MapParameters {
        markers: vec![Marker::new("m1", Coordinate::new(49.6, 6.1))],
        ..scenario_parameters()
    };
    component.set_parameters(with_marker.clone()).await;

    assert_eq!(count(&channel, |e| matches!(e, EngineEvent::LayerAttached { .. })), 1);
    assert_eq!(count(&channel, |e| matches!(e, EngineEvent::ControlAdded { .. })), 0);
    assert_eq!(count(&channel, |e| matches!(e, EngineEvent::TileLayerAdded { .. })), 0);
    assert_eq!(count(&channel, |e| matches!(e, EngineEvent::ContainerClassSet { .. })), 0);

    // Same parameters again: nothing to send
    channel.facade().borrow_mut().backend_mut().clear_journal();
    component.set_parameters(with_marker.clone()).await;
    assert!(channel.facade().borrow().backend().journal().is_empty());

    component
        .set_parameters(MapParameters {
            map_options: with_marker.map_options.clone().with_theme(MapTheme::Dark),
            ..with_marker
        })
        .await;
    let facade = channel.facade();
    let facade = facade.borrow();
    assert!(facade
        .backend()
        .container_has_class(component.container(), &facade.config().dark_theme_class));
    assert_eq!(
        facade
            .backend()
            .count(|e| matches!(e, EngineEvent::LayerAttached { .. })),
        0
    );
}

struct RecordingHelper {
    facade: Rc<RefCell<MapFacade<NativeBackend>>>,
    calls: RefCell<Vec<(String, usize)>>,
}

#[async_trait(?Send)]
impl HostHelper for RecordingHelper {
    async fn invoke_method(&self, method: &str) -> std::result::Result<(), InteropError> {
        // The facade must already be released and hold the new map
        let maps = self.facade.try_borrow().map(|f| f.maps().len()).unwrap_or(usize::MAX);
        self.calls.borrow_mut().push((method.to_string(), maps));
        Ok(())
    }
}

#[tokio::test]
async fn test_completion_callback_after_construction() {
    let channel = LocalChannel::new(MapFacade::new(NativeBackend::new()));
    let helper = Rc::new(RecordingHelper {
        facade: channel.facade(),
        calls: RefCell::new(Vec::new()),
    });

    let call = MapCall::CreateMap {
        completion_method: MAP_READY_METHOD.to_string(),
        container: MapHandle::generate(),
        map_options: MapOptions::default(),
        control_options: MapControlOptions::default(),
        tile_layers: vec![TileLayer::open_street_map()],
        markers: Vec::new(),
        circle_markers: Vec::new(),
        polylines: Vec::new(),
    };
    channel
        .create_map(Rc::clone(&helper) as Rc<dyn HostHelper>, call.clone())
        .await
        .unwrap();

    assert_eq!(
        *helper.calls.borrow(),
        vec![(MAP_READY_METHOD.to_string(), 1)]
    );

    // A second create for the same container fails before any callback
    let result = channel
        .create_map(Rc::clone(&helper) as Rc<dyn HostHelper>, call)
        .await;
    assert!(matches!(result, Err(InteropError::Failed(_))));
    assert_eq!(helper.calls.borrow().len(), 1);
}
