use crate::{
    layers::{fit, registry::LayerRegistry},
    models::{CenterControlOptions, ControlPosition, MapControlOptions},
    traits::MapBackend,
};
use std::fmt;

const CENTER_CONTROL_TITLE: &str = "Center map";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Zoom,
    Scale,
    Center,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlKind::Zoom => write!(f, "zoom"),
            ControlKind::Scale => write!(f, "scale"),
            ControlKind::Center => write!(f, "center"),
        }
    }
}

/// Construction options for one engine control
#[derive(Debug, Clone, PartialEq)]
pub enum ControlSpec {
    Zoom {
        position: ControlPosition,
        zoom_in: bool,
        zoom_out: bool,
    },
    Scale {
        position: ControlPosition,
        metric: bool,
        imperial: bool,
    },
    /// A button whose clicks are routed back through [`ControlManager::on_center_click`]
    Center {
        position: ControlPosition,
        title: String,
    },
}

impl ControlSpec {
    pub fn kind(&self) -> ControlKind {
        match self {
            ControlSpec::Zoom { .. } => ControlKind::Zoom,
            ControlSpec::Scale { .. } => ControlKind::Scale,
            ControlSpec::Center { .. } => ControlKind::Center,
        }
    }

    pub fn position(&self) -> ControlPosition {
        match self {
            ControlSpec::Zoom { position, .. }
            | ControlSpec::Scale { position, .. }
            | ControlSpec::Center { position, .. } => *position,
        }
    }
}

/// Builds the specs for every enabled control kind, in zoom, scale, center order
pub fn control_specs(options: &MapControlOptions) -> Vec<ControlSpec> {
    let mut specs = Vec::with_capacity(3);

    let zoom = &options.zoom_control_options;
    if zoom.enable {
        specs.push(ControlSpec::Zoom {
            position: zoom.position,
            zoom_in: zoom.show_zoom_in_button,
            zoom_out: zoom.show_zoom_out_button,
        });
    }

    let scale = &options.scale_control_options;
    if scale.enable {
        specs.push(ControlSpec::Scale {
            position: scale.position,
            metric: scale.show_metric.unwrap_or(true),
            imperial: scale.show_imperial.unwrap_or(false),
        });
    }

    let center = &options.center_control_options;
    if center.enable {
        specs.push(ControlSpec::Center {
            position: center.position,
            title: CENTER_CONTROL_TITLE.to_string(),
        });
    }

    specs
}

/// The controls attached to one map
#[derive(Debug)]
pub struct ControlManager<C> {
    active: Vec<(ControlKind, C)>,
    center: Option<CenterControlOptions>,
}

impl<C> Default for ControlManager<C> {
    fn default() -> Self {
        Self {
            active: Vec::new(),
            center: None,
        }
    }
}

impl<C> ControlManager<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Detaches the current controls and attaches a fresh set for `options`
    pub fn apply<B>(&mut self, backend: &mut B, surface: &B::Surface, options: &MapControlOptions)
    where
        B: MapBackend<Control = C>,
    {
        self.detach_all(backend, surface);

        for spec in control_specs(options) {
            let kind = spec.kind();
            log::trace!("adding {} control at {}", kind, spec.position());
            let control = backend.add_control(surface, spec);
            self.active.push((kind, control));
        }

        let center = &options.center_control_options;
        self.center = center.enable.then(|| center.clone());
    }

    pub fn detach_all<B>(&mut self, backend: &mut B, surface: &B::Surface)
    where
        B: MapBackend<Control = C>,
    {
        for (_, control) in self.active.drain(..) {
            backend.remove_control(surface, &control);
        }
        self.center = None;
    }

    /// Handles a click on the center control.
    ///
    /// With fit-bounds options configured the map is fitted to those layers,
    /// otherwise it is reset to the configured center and zoom. Returns whether
    /// the view was changed.
    pub fn on_center_click<B>(
        &self,
        backend: &mut B,
        surface: &B::Surface,
        layers: &LayerRegistry<B::Layer>,
    ) -> bool
    where
        B: MapBackend<Control = C>,
    {
        let Some(center) = &self.center else {
            return false;
        };

        match &center.fit_bounds_options {
            Some(options) => fit::fit_bounds(backend, surface, layers, options),
            None => {
                backend.set_view(surface, center.center.into(), center.zoom);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = ControlKind> + '_ {
        self.active.iter().map(|(kind, _)| *kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{geo::LatLng, handle::MapHandle},
        engine::{EngineEvent, NativeBackend},
        models::{Coordinate, FitBoundsOptions, Marker, ScaleControlOptions},
        traits::SurfaceOptions,
    };

    fn setup() -> (NativeBackend, <NativeBackend as MapBackend>::Surface) {
        let mut backend = NativeBackend::new();
        let (surface, _) = backend
            .create_surface(&MapHandle::new("controls-test"), SurfaceOptions::default())
            .unwrap();
        (backend, surface)
    }

    #[test]
    fn test_default_options_attach_zoom_and_center() {
        let (mut backend, surface) = setup();
        let mut controls = ControlManager::new();

        controls.apply(&mut backend, &surface, &MapControlOptions::default());

        assert_eq!(
            controls.kinds().collect::<Vec<_>>(),
            vec![ControlKind::Zoom, ControlKind::Center]
        );
        assert_eq!(backend.controls_on(&surface), 2);
    }

    #[test]
    fn test_reapply_leaves_no_duplicates() {
        let (mut backend, surface) = setup();
        let mut controls = ControlManager::new();
        let options = MapControlOptions {
            scale_control_options: ScaleControlOptions {
                enable: true,
                ..Default::default()
            },
            ..Default::default()
        };

        controls.apply(&mut backend, &surface, &options);
        backend.clear_journal();
        controls.apply(&mut backend, &surface, &options);

        assert_eq!(backend.count(|e| matches!(e, EngineEvent::ControlRemoved { .. })), 3);
        assert_eq!(backend.count(|e| matches!(e, EngineEvent::ControlAdded { .. })), 3);
        assert_eq!(backend.controls_on(&surface), options.enabled_count());
    }

    #[test]
    fn test_scale_units_default_to_metric_only() {
        let mut options = MapControlOptions::none();
        options.scale_control_options = ScaleControlOptions {
            enable: true,
            position: ControlPosition::BottomRight,
            show_metric: None,
            show_imperial: None,
        };

        assert_eq!(
            control_specs(&options),
            vec![ControlSpec::Scale {
                position: ControlPosition::BottomRight,
                metric: true,
                imperial: false,
            }]
        );
    }

    #[test]
    fn test_center_click_sets_view() {
        let (mut backend, surface) = setup();
        let mut controls = ControlManager::new();
        let mut options = MapControlOptions::default();
        options.center_control_options.center = Coordinate::new(48.0, 7.0);
        options.center_control_options.zoom = 11.0;

        controls.apply(&mut backend, &surface, &options);
        assert!(controls.on_center_click(&mut backend, &surface, &LayerRegistry::new()));

        let viewport = backend.viewport(&surface).unwrap();
        assert_eq!(viewport.center, LatLng::new(48.0, 7.0));
        assert_eq!(viewport.zoom, 11.0);
    }

    #[test]
    fn test_center_click_fits_layers() {
        let (mut backend, surface) = setup();
        let mut layers = LayerRegistry::new();
        layers.replace_all(
            &mut backend,
            &surface,
            &[Marker::new("m1", Coordinate::new(49.6, 6.1))],
            &[],
            &[],
        );

        let mut controls = ControlManager::new();
        let mut options = MapControlOptions::default();
        options.center_control_options.fit_bounds_options = Some(FitBoundsOptions::new(["m1"]));
        controls.apply(&mut backend, &surface, &options);
        backend.clear_journal();

        assert!(controls.on_center_click(&mut backend, &surface, &layers));
        assert_eq!(backend.count(|e| matches!(e, EngineEvent::BoundsFitted { .. })), 1);
        assert_eq!(backend.count(|e| matches!(e, EngineEvent::ViewSet { .. })), 0);
    }

    #[test]
    fn test_disabled_center_ignores_clicks() {
        let (mut backend, surface) = setup();
        let mut controls = ControlManager::new();

        controls.apply(&mut backend, &surface, &MapControlOptions::none());
        assert!(controls.is_empty());
        assert!(!controls.on_center_click(&mut backend, &surface, &LayerRegistry::new()));
    }
}
