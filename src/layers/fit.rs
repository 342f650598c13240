//! Bounds fitting across point and path layers

use crate::{
    core::geo::LatLngBounds,
    layers::registry::LayerRegistry,
    models::FitBoundsOptions,
    traits::{FitPadding, MapBackend},
};

/// Union of all boxes, or `None` for an empty input
pub fn union_all<I>(boxes: I) -> Option<LatLngBounds>
where
    I: IntoIterator<Item = LatLngBounds>,
{
    boxes
        .into_iter()
        .reduce(|acc, bounds| acc.union(&bounds))
}

/// Box spanning the named layers. Ids with no registered layer are skipped.
pub fn layer_bounds<L, S>(registry: &LayerRegistry<L>, ids: &[S]) -> Option<LatLngBounds>
where
    L: Clone + Eq + std::hash::Hash,
    S: AsRef<str>,
{
    union_all(
        ids.iter()
            .filter_map(|id| registry.get(id.as_ref()))
            .filter_map(|entry| entry.descriptor.bounds()),
    )
}

/// Fits the surface to the layers named in `options`.
///
/// Returns `false` and leaves the view untouched when none of the ids
/// resolve to a layer with geometry.
pub fn fit_bounds<B: MapBackend>(
    backend: &mut B,
    surface: &B::Surface,
    registry: &LayerRegistry<B::Layer>,
    options: &FitBoundsOptions,
) -> bool {
    let Some(bounds) = layer_bounds(registry, &options.layer_ids) else {
        log::debug!("no bounds for layers {:?}, view unchanged", options.layer_ids);
        return false;
    };

    let padding = FitPadding {
        top_left: options.top_left_padding,
        bottom_right: options.bottom_right_padding,
        padding: options.padding,
    };
    backend.fit_bounds(surface, &bounds, padding);
    true
}

/// Fits the surface to a single layer, without padding
pub fn fit_to_layer<B: MapBackend>(
    backend: &mut B,
    surface: &B::Surface,
    registry: &LayerRegistry<B::Layer>,
    id: &str,
) -> bool {
    fit_bounds(backend, surface, registry, &FitBoundsOptions::new([id]))
}
