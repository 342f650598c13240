use crate::{core::geo::TileCoord, models::TileLayer, traits::MapBackend};
use crate::core::constants::TILE_SIZE;

const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// Tile layer options understood by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayerSpec {
    pub url_template: String,
    pub attribution: String,
    pub detect_retina: bool,
    pub tile_size: u32,
}

impl TileLayerSpec {
    /// Expands the URL template for one tile.
    ///
    /// `{r}` becomes `@2x` only when `retina` is set and the layer asked for
    /// retina detection.
    pub fn url(&self, coord: TileCoord, retina: bool) -> String {
        let idx = ((coord.x + coord.y) % SUBDOMAINS.len() as u32) as usize;
        let suffix = if retina && self.detect_retina { "@2x" } else { "" };

        self.url_template
            .replace("{s}", SUBDOMAINS[idx])
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
            .replace("{r}", suffix)
    }
}

impl From<&TileLayer> for TileLayerSpec {
    fn from(layer: &TileLayer) -> Self {
        Self {
            url_template: layer.url_template.clone(),
            attribution: layer.attribution.clone(),
            detect_retina: layer.detect_retina.unwrap_or(false),
            tile_size: layer.tile_size.unwrap_or(TILE_SIZE),
        }
    }
}

/// The base-map tile layers active on one map
#[derive(Debug)]
pub struct TileLayerSet<T> {
    layers: Vec<T>,
}

impl<T> Default for TileLayerSet<T> {
    fn default() -> Self {
        Self { layers: Vec::new() }
    }
}

impl<T> TileLayerSet<T> {
    /// Wraps tile layers that were attached while the surface was built
    pub fn from_realized(layers: Vec<T>) -> Self {
        Self { layers }
    }

    pub fn replace_all<B>(&mut self, backend: &mut B, surface: &B::Surface, configs: &[TileLayer])
    where
        B: MapBackend<TileLayer = T>,
    {
        self.remove_all(backend, surface);
        self.layers = configs
            .iter()
            .map(|config| backend.add_tile_layer(surface, TileLayerSpec::from(config)))
            .collect();
    }

    pub fn remove_all<B>(&mut self, backend: &mut B, surface: &B::Surface)
    where
        B: MapBackend<TileLayer = T>,
    {
        for layer in self.layers.drain(..) {
            backend.remove_tile_layer(surface, &layer);
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.layers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::tile_layer::OPEN_STREET_MAP;

    #[test]
    fn test_spec_defaults() {
        let spec = TileLayerSpec::from(&*OPEN_STREET_MAP);
        assert!(!spec.detect_retina);
        assert_eq!(spec.tile_size, 256);
    }

    #[test]
    fn test_url_expansion() {
        let spec = TileLayerSpec::from(&*OPEN_STREET_MAP);
        let url = spec.url(TileCoord::new(1, 2, 3), false);
        assert_eq!(url, "https://a.tile.openstreetmap.org/3/1/2.png");
    }

    #[test]
    fn test_retina_suffix_needs_detection() {
        let mut layer = TileLayer::new("https://t/{z}/{x}/{y}{r}.png", "t");
        let coord = TileCoord::new(0, 0, 0);

        assert_eq!(TileLayerSpec::from(&layer).url(coord, true), "https://t/0/0/0.png");

        layer.detect_retina = Some(true);
        let spec = TileLayerSpec::from(&layer);
        assert_eq!(spec.url(coord, true), "https://t/0/0/0@2x.png");
        assert_eq!(spec.url(coord, false), "https://t/0/0/0.png");
    }
}
