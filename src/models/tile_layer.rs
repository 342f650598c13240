use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A base-map tile layer
///
/// `url_template` follows the usual slippy-map placeholders: `{s}` subdomain,
/// `{z}`/`{x}`/`{y}` tile coordinate and `{r}` retina suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    /// Request high-DPI tiles on high-DPI screens
    #[serde(default)]
    pub detect_retina: Option<bool>,
    /// Tile edge in pixels; the engine default (256) when absent
    #[serde(default)]
    pub tile_size: Option<u32>,
}

impl TileLayer {
    pub fn new(url_template: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            url_template: url_template.into(),
            attribution: attribution.into(),
            detect_retina: None,
            tile_size: None,
        }
    }

    /// OpenStreetMap, free to use with attribution
    pub fn open_street_map() -> Self {
        OPEN_STREET_MAP.clone()
    }
}

pub static OPEN_STREET_MAP: Lazy<TileLayer> = Lazy::new(|| {
    TileLayer::new(
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
        "&copy; <a href='https://www.openstreetmap.org/copyright'>OpenStreetMap</a> contributors",
    )
});

pub static OPEN_STREET_MAP_FRANCE: Lazy<TileLayer> = Lazy::new(|| {
    TileLayer::new(
        "https://{s}.tile.openstreetmap.fr/osmfr/{z}/{x}/{y}.png",
        "&copy; OpenStreetMap France | &copy; <a href='https://www.openstreetmap.org/copyright'>OpenStreetMap</a> contributors",
    )
});

/// Public transport map
pub static OPNV_KARTE: Lazy<TileLayer> = Lazy::new(|| {
    TileLayer::new(
        "https://tileserver.memomaps.de/tilegen/{z}/{x}/{y}.png",
        "&copy; <a href='memomaps.de'>memomaps.de</a> <a href='https://creativecommons.org/licenses/by-sa/2.0/'>CC-BY-SA</a> | &copy; <a href='https://www.openstreetmap.org/copyright'>OpenStreetMap</a> contributors",
    )
});

/// Luxembourg open data base map
pub static OPEN_DATA_BASE_MAP: Lazy<TileLayer> = Lazy::new(|| {
    TileLayer::new(
        "https://wmts1.geoportail.lu/opendata/wmts/basemap/GLOBAL_WEBMERCATOR/{z}/{x}/{y}.png",
        "&copy; <a href='https://data.public.lu/en/datasets/carte-de-base-webservices-wms-et-wmts'>OpenData</a> <a href='https://creativecommons.org/publicdomain/zero/1.0/'>CC0</a>/<a href='https://creativecommons.org/licenses/by/4.0/deed.en'>CC-BY</a> | &copy; <a href='https://www.openstreetmap.org/copyright'>OpenStreetMap</a> contributors",
    )
});
