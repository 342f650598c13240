use crate::{
    layers::{base::LayerDescriptor, convert::LayerSpec, convert::TooltipSpec},
    models::{CircleMarker, Marker, Polyline},
    prelude::HashMap,
    traits::MapBackend,
};
use std::hash::Hash;
use std::sync::Arc;

/// A descriptor together with the engine layer realized from it
#[derive(Debug)]
pub struct LayerEntry<L> {
    pub descriptor: LayerDescriptor,
    pub layer: L,
}

/// Layers of one map, indexed both by descriptor id and by realized layer.
///
/// Both indices share the same entries and are only ever changed together.
#[derive(Debug)]
pub struct LayerRegistry<L: Clone + Eq + Hash> {
    by_id: HashMap<String, Arc<LayerEntry<L>>>,
    by_layer: HashMap<L, Arc<LayerEntry<L>>>,
    /// Ids in attach order
    order: Vec<String>,
}

impl<L: Clone + Eq + Hash> Default for LayerRegistry<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Clone + Eq + Hash> LayerRegistry<L> {
    pub fn new() -> Self {
        Self {
            by_id: HashMap::default(),
            by_layer: HashMap::default(),
            order: Vec::new(),
        }
    }

    /// Replaces every layer on `surface` with the given descriptors.
    ///
    /// Polylines are attached first, then markers, then circle markers, so
    /// that point layers paint above paths. The surface size is invalidated
    /// once everything is attached.
    pub fn replace_all<B>(
        &mut self,
        backend: &mut B,
        surface: &B::Surface,
        markers: &[Marker],
        circle_markers: &[CircleMarker],
        polylines: &[Polyline],
    ) where
        B: MapBackend<Layer = L>,
    {
        self.remove_all(backend, surface);

        let descriptors = polylines
            .iter()
            .cloned()
            .map(LayerDescriptor::from)
            .chain(markers.iter().cloned().map(LayerDescriptor::from))
            .chain(circle_markers.iter().cloned().map(LayerDescriptor::from));

        for descriptor in descriptors {
            self.insert(backend, surface, descriptor);
        }

        log::debug!(
            "attached {} layers ({} polylines, {} markers, {} circle markers)",
            self.len(),
            polylines.len(),
            markers.len(),
            circle_markers.len()
        );

        backend.invalidate_size(surface);
    }

    fn insert<B>(&mut self, backend: &mut B, surface: &B::Surface, descriptor: LayerDescriptor)
    where
        B: MapBackend<Layer = L>,
    {
        let id = descriptor.id().to_string();

        // Last descriptor with a given id wins
        if let Some(previous) = self.by_id.remove(&id) {
            log::warn!("duplicate layer id '{}', replacing earlier {}", id, previous.descriptor.kind());
            self.by_layer.remove(&previous.layer);
            self.order.retain(|existing| existing != &id);
            backend.detach_layer(surface, &previous.layer);
        }

        let layer = backend.create_layer(LayerSpec::from(&descriptor));
        if let Some(tooltip) = descriptor.tooltip() {
            backend.bind_tooltip(&layer, TooltipSpec::from(tooltip));
        }

        let entry = Arc::new(LayerEntry {
            descriptor,
            layer: layer.clone(),
        });
        self.by_id.insert(id.clone(), Arc::clone(&entry));
        self.by_layer.insert(layer.clone(), entry);
        self.order.push(id);

        backend.attach_layer(surface, &layer);
    }

    /// Detaches every layer from `surface` and clears both indices
    pub fn remove_all<B>(&mut self, backend: &mut B, surface: &B::Surface)
    where
        B: MapBackend<Layer = L>,
    {
        for id in self.order.drain(..) {
            if let Some(entry) = self.by_id.get(&id) {
                backend.detach_layer(surface, &entry.layer);
            }
        }
        self.by_id.clear();
        self.by_layer.clear();
    }

    pub fn get(&self, id: &str) -> Option<&LayerEntry<L>> {
        self.by_id.get(id).map(|entry| entry.as_ref())
    }

    /// Resolves a realized layer back to the descriptor it was built from
    pub fn descriptor_for(&self, layer: &L) -> Option<&LayerDescriptor> {
        self.by_layer.get(layer).map(|entry| &entry.descriptor)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Layer ids in attach order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
