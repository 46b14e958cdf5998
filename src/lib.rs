//! # LandMapper
//!
//! Draw a land boundary on a map and measure it:
//! - Rectangle and polygon drawing with vertex editing
//! - Geodesic area in square meters, acres and hectares
//! - Coordinate search that flies the map to a location
//! - Configurable base layers, draw controls and path style
//!
//! ## Architecture
//!
//! LandMapper is organized as a workspace with multiple crates:
//!
//! 1. **landmapper-core** - Coordinates, errors, area units, event bus
//! 2. **landmapper-designer** - Shapes, geodesic area, the area tool, coordinate search
//! 3. **landmapper-settings** - Map configuration files
//! 4. **landmapper** - Command-line front end that integrates all crates

pub mod cli;

pub use landmapper_core::{
    format_area_display, AppEvent, AreaDisplay, AreaEvent, AreaUnit, CoordinateError, EventBus,
    EventFilter, GeoError, LatLng, ShapeEvent, ShapeKind, ViewportEvent, ViewportTarget,
};

pub use landmapper_designer::{
    geodesic_area, AreaTool, CoordinateSearch, DrawControls, MapContext, MapEvent, PathStyle,
    Preset, Shape, ToolError, ToolPhase,
};

pub use landmapper_settings::{BaseLayer, Config, MapConfig, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Environment variable selecting the log format (`json` or `pretty`)
pub const LOG_FORMAT_ENV: &str = "LANDMAPPER_LOG_FORMAT";

/// Initialize logging with the default configuration
///
/// Sets up structured logging on stderr with:
/// - RUST_LOG environment variable support (default `warn`)
/// - Human-readable output, or JSON lines when `LANDMAPPER_LOG_FORMAT=json`
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
