//! Engine-wide defaults, most of them taken from Leaflet conventions.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Zoom range of a freshly created surface.
pub const DEFAULT_MIN_ZOOM: f64 = 0.0;
pub const DEFAULT_MAX_ZOOM: f64 = 18.0;

/// Center of Luxembourg, used by the default map and center-control options.
pub const DEFAULT_CENTER: (f64, f64) = (49.751667, 6.101667);

/// Zoom used by the default map and center-control options.
pub const DEFAULT_ZOOM: f64 = 9.0;

/// Radius of a circle marker when none is given, in pixels.
pub const DEFAULT_CIRCLE_MARKER_RADIUS: f64 = 6.0;

/// How long the host waits after the ready callback before forcing a layout
/// pass. Chosen empirically: the first layout of the container has usually
/// settled by then.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 50;

/// CSS class toggled on the container for the dark theme.
pub const DARK_THEME_CLASS: &str = "mapbridge-dark";

/// Name of the host method invoked once a map surface is interactive.
pub const MAP_READY_METHOD: &str = "OnMapInitializedAsync";

/// Prefix of generated container ids.
pub const CONTAINER_ID_PREFIX: &str = "map-container-";

/// Container size assumed by the native engine until the host reports one.
pub const DEFAULT_CONTAINER_SIZE: (f64, f64) = (800.0, 600.0);
