use anyhow::Context;
use mapbridge::{
    models::{
        tile_layer::OPEN_DATA_BASE_MAP, CircleMarker, Coordinate, FitBoundsOptions, MapOptions,
        MapTheme, Marker, PathStyle, Polyline, Tooltip,
    },
    BridgeConfig, LocalChannel, MapComponent, MapFacade, MapParameters, NativeBackend, Point,
};
use std::rc::Rc;

/// Headless walkthrough: mount a map, push layers, fit, switch theme, dispose
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    mapbridge::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => BridgeConfig::load(&path)
            .with_context(|| format!("failed to load bridge config from {}", path))?,
        None => BridgeConfig::default(),
    };
    log::info!("settle delay {:?}", config.settle_delay());

    let facade = MapFacade::with_config(NativeBackend::with_config(config.engine.clone()), config.clone());
    let channel = Rc::new(LocalChannel::new(facade));

    let mut params = MapParameters {
        map_options: MapOptions::new(Coordinate::new(49.6116, 6.1319), 13.0),
        tile_layers: vec![(*OPEN_DATA_BASE_MAP).clone()],
        ..MapParameters::default()
    };
    let component = MapComponent::new(Rc::clone(&channel), params.clone(), config);

    component.mount().await;
    println!("mounted {} (ready: {})", component.container(), component.is_ready());

    params.markers = vec![Marker::new("gare", Coordinate::new(49.5999, 6.1342))
        .with_title("Gare Centrale")
        .with_tooltip(Tooltip::new("Luxembourg station"))];
    params.circle_markers = vec![CircleMarker::new("kirchberg", Coordinate::new(49.6283, 6.1625))
        .with_radius(10.0)
        .with_style(PathStyle::stroked("#d7191c", 2).with_fill("#fdae61", 0.6))];
    params.polylines = vec![Polyline::new(
        "tram",
        vec![
            Coordinate::new(49.5999, 6.1342),
            Coordinate::new(49.6110, 6.1300),
            Coordinate::new(49.6283, 6.1625),
        ],
    )
    .with_style(PathStyle::stroked("#2b83ba", 4))];
    component.set_parameters(params.clone()).await;

    let fitted = channel.facade().borrow_mut().fit_bounds(
        component.container(),
        &FitBoundsOptions::new(["gare", "kirchberg", "tram"]).with_padding(Point::new(20.0, 20.0)),
    );
    println!("fitted to layers: {}", fitted);

    params.map_options = params.map_options.clone().with_theme(MapTheme::Dark);
    component.set_parameters(params).await;

    {
        let facade = channel.facade();
        let facade = facade.borrow();
        if let Some(instance) = facade.maps().get(component.container()) {
            if let Some(viewport) = facade.backend().viewport(instance.surface()) {
                println!(
                    "view: center ({:.4}, {:.4}) zoom {}",
                    viewport.center.lat, viewport.center.lng, viewport.zoom
                );
            }
        }
    }

    component.dispose().await;

    let facade = channel.facade();
    let facade = facade.borrow();
    println!("engine journal:");
    for (i, event) in facade.backend().journal().iter().enumerate() {
        println!("  {:>3} {:?}", i, event);
    }
    println!("live maps after dispose: {}", facade.maps().len());

    Ok(())
}
