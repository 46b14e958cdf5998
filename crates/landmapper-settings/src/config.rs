//! Map configuration for LandMapper
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats; the default file lives in the platform config
//! directory.
//!
//! Configuration is organized into sections:
//! - Map view (initial center and zoom, base layers)
//! - Fly-to parameters for coordinate search
//! - Draw controls offered on the map
//! - Path style of the drawn boundary
//! - Preset locations

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use landmapper_core::{EventBus, LatLng};
use landmapper_designer::{
    CoordinateSearch, DrawControls, FlyToOptions, MapContext, PathStyle, Preset,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

/// Highest zoom level any tile provider here serves
pub const MAX_ZOOM: u8 = 22;

const CONFIG_DIR_NAME: &str = "landmapper";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Tile layer the map can show underneath the drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseLayer {
    /// Name shown in the layer switcher
    pub name: String,
    /// Tile URL with `{z}`, `{x}`, `{y}` and optionally `{s}` placeholders
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
    /// Shown when the map opens
    #[serde(default)]
    pub default: bool,
}

impl BaseLayer {
    pub fn new(
        name: impl Into<String>,
        url_template: impl Into<String>,
        attribution: impl Into<String>,
        max_zoom: u8,
    ) -> Self {
        Self {
            name: name.into(),
            url_template: url_template.into(),
            attribution: attribution.into(),
            max_zoom,
            default: false,
        }
    }

    /// Esri World Imagery
    pub fn satellite() -> Self {
        Self::new(
            "Satellite",
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}",
            "&copy; Esri",
            19,
        )
    }

    /// Google satellite imagery with labels and buildings
    pub fn hybrid() -> Self {
        Self::new(
            "Hybrid (Buildings Visible)",
            "https://mt1.google.com/vt/lyrs=y&x={x}&y={y}&z={z}",
            "&copy; Google",
            20,
        )
    }

    /// OpenStreetMap standard tiles
    pub fn street_map() -> Self {
        Self::new(
            "Street Map",
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            "&copy; OpenStreetMap",
            19,
        )
    }

    /// URL of one tile; the `{s}` subdomain is always `a`.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{s}", "a")
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}

/// Initial view and available base layers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Zoom level when the map opens
    pub zoom: u8,
    /// Whether the mouse wheel zooms the map
    pub scroll_wheel_zoom: bool,
    /// Center when the map opens
    pub center: LatLng,
    pub base_layers: Vec<BaseLayer>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            zoom: 5,
            scroll_wheel_zoom: true,
            center: LatLng::new(20.5937, 78.9629),
            base_layers: vec![
                BaseLayer::satellite(),
                BaseLayer {
                    default: true,
                    ..BaseLayer::hybrid()
                },
                BaseLayer::street_map(),
            ],
        }
    }
}

impl MapConfig {
    /// The layer shown when the map opens
    pub fn default_layer(&self) -> Option<&BaseLayer> {
        self.base_layers.iter().find(|layer| layer.default)
    }

    pub fn layer(&self, name: &str) -> Option<&BaseLayer> {
        self.base_layers
            .iter()
            .find(|layer| layer.name.eq_ignore_ascii_case(name))
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Map view and layers
    #[serde(default)]
    pub map: MapConfig,
    /// Coordinate search fly-to
    #[serde(default)]
    pub fly_to: FlyToOptions,
    /// Drawing toolbar
    #[serde(default)]
    pub draw: DrawControls,
    /// Boundary style
    #[serde(default)]
    pub style: PathStyle,
    /// One-click locations
    #[serde(default)]
    pub presets: Vec<Preset>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            fly_to: FlyToOptions::default(),
            draw: DrawControls::default(),
            style: PathStyle::default(),
            presets: vec![Preset::delhi()],
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/landmapper/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML, chosen by extension)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = FileFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            FileFormat::Json => serde_json::from_str(&content)?,
            FileFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save config to file (JSON or TOML, chosen by extension)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = FileFormat::from_path(path)?;

        let content = match format {
            FileFormat::Json => serde_json::to_string_pretty(self)?,
            FileFormat::Toml => self.to_toml()?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Load `path`, or the default file when `path` is `None`.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file is an error.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn to_toml(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        // Map view
        LatLng::checked(self.map.center.lat, self.map.center.lng)
            .map_err(|e| ConfigError::invalid("map.center", e.to_string()))?;
        check_zoom("map.zoom", self.map.zoom)?;

        if self.map.base_layers.is_empty() {
            return Err(ConfigError::MissingKey("map.base_layers".to_string()));
        }
        for layer in &self.map.base_layers {
            if layer.name.trim().is_empty() {
                return Err(ConfigError::invalid("map.base_layers.name", "must not be empty"));
            }
            check_zoom("map.base_layers.max_zoom", layer.max_zoom)?;
            for placeholder in ["{z}", "{x}", "{y}"] {
                if !layer.url_template.contains(placeholder) {
                    return Err(ConfigError::invalid(
                        "map.base_layers.url_template",
                        format!("'{}' lacks {}", layer.name, placeholder),
                    ));
                }
            }
        }
        let defaults = self.map.base_layers.iter().filter(|l| l.default).count();
        if defaults != 1 {
            return Err(ConfigError::invalid(
                "map.base_layers.default",
                format!("exactly one default layer required, found {}", defaults),
            ));
        }

        // Fly-to
        check_zoom("fly_to.zoom", self.fly_to.zoom)?;
        if !(self.fly_to.duration_secs.is_finite() && self.fly_to.duration_secs > 0.0) {
            return Err(ConfigError::out_of_range(
                "fly_to.duration_secs",
                self.fly_to.duration_secs,
            ));
        }

        // Style
        check_color("style.color", &self.style.color)?;
        check_color("style.fill_color", &self.style.fill_color)?;
        if !(0.0..=1.0).contains(&self.style.fill_opacity) {
            return Err(ConfigError::out_of_range(
                "style.fill_opacity",
                self.style.fill_opacity,
            ));
        }
        if self.style.weight == 0 {
            return Err(ConfigError::out_of_range("style.weight", self.style.weight));
        }

        // Presets
        let mut names = HashSet::new();
        for preset in &self.presets {
            LatLng::checked(preset.lat, preset.lng).map_err(|e| {
                ConfigError::invalid(format!("presets.{}", preset.name), e.to_string())
            })?;
            if !names.insert(preset.name.to_lowercase()) {
                return Err(ConfigError::invalid(
                    "presets.name",
                    format!("duplicate preset '{}'", preset.name),
                ));
            }
        }

        Ok(())
    }

    /// Look up a preset by name, ignoring case
    pub fn preset(&self, name: &str) -> Option<&Preset> {
        self.presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    /// Map context with this config's draw controls and style
    pub fn map_context(&self, bus: Arc<EventBus>) -> MapContext {
        MapContext::with_settings(self.draw.clone(), self.style.clone(), bus)
    }

    /// Coordinate search flying with this config's parameters
    pub fn coordinate_search(&self) -> CoordinateSearch {
        CoordinateSearch::with_options(self.fly_to)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

fn check_zoom(key: &str, zoom: u8) -> ConfigResult<()> {
    if zoom > MAX_ZOOM {
        return Err(ConfigError::out_of_range(key, zoom));
    }
    Ok(())
}

fn check_color(key: &str, color: &str) -> ConfigResult<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(ConfigError::invalid(key, format!("'{}' is not #rrggbb", color)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.map.zoom, 5);
        assert!(config.map.scroll_wheel_zoom);
        assert_eq!(config.map.center, LatLng::new(20.5937, 78.9629));
        assert_eq!(config.fly_to.zoom, 18);
        assert_eq!(config.fly_to.duration_secs, 2.0);
        assert_eq!(config.presets, vec![Preset::delhi()]);
    }

    #[test]
    fn test_default_layer_is_hybrid() {
        let config = MapConfig::default();
        let layer = config.default_layer().unwrap();
        assert_eq!(layer.name, "Hybrid (Buildings Visible)");
        assert_eq!(layer.max_zoom, 20);
        assert_eq!(config.base_layers.len(), 3);
        assert!(config.layer("street map").is_some());
    }

    #[test]
    fn test_tile_url() {
        assert_eq!(
            BaseLayer::street_map().tile_url(5, 10, 12),
            "https://a.tile.openstreetmap.org/5/10/12.png"
        );
        assert_eq!(
            BaseLayer::satellite().tile_url(3, 1, 2),
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/3/2/1"
        );
        assert_eq!(
            BaseLayer::hybrid().tile_url(18, 100, 200),
            "https://mt1.google.com/vt/lyrs=y&x=100&y=200&z=18"
        );
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.fly_to.zoom = 23;
        assert_eq!(
            config.validate(),
            Err(ConfigError::out_of_range("fly_to.zoom", 23))
        );

        let mut config = Config::default();
        config.map.center = LatLng::new(95.0, 0.0);
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.fly_to.duration_secs = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.fill_opacity = 1.5;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.weight = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.style.color = "green".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_validate_layers() {
        let mut config = Config::default();
        config.map.base_layers.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissingKey("map.base_layers".to_string()))
        );

        let mut config = Config::default();
        for layer in &mut config.map.base_layers {
            layer.default = true;
        }
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.map.base_layers[0].url_template = "https://example.com/tile.png".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_presets() {
        let mut config = Config::default();
        config.presets.push(Preset::new("delhi", 28.0, 77.0));
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.presets.push(Preset::new("Nowhere", 0.0, 190.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_lookup() {
        let config = Config::default();
        assert_eq!(config.preset("DELHI"), Some(&Preset::delhi()));
        assert!(config.preset("Mumbai").is_none());
    }

    #[test]
    fn test_unsupported_format() {
        assert_eq!(
            FileFormat::from_path(Path::new("config.yaml")),
            Err(ConfigError::UnsupportedFormat("yaml".to_string()))
        );
        assert!(FileFormat::from_path(Path::new("config")).is_err());
        assert_eq!(
            FileFormat::from_path(Path::new("CONFIG.TOML")),
            Ok(FileFormat::Toml)
        );
    }

    #[test]
    fn test_map_context_uses_settings() {
        let mut config = Config::default();
        config.draw.draw_rectangle = false;
        config.style.weight = 5;

        let ctx = config.map_context(Arc::new(EventBus::new()));
        assert!(!ctx.controls.draw_rectangle);
        assert_eq!(ctx.style.weight, 5);
        assert_eq!(config.coordinate_search().options(), config.fly_to);
    }

    #[test]
    fn test_toml_contains_sections() {
        let toml = Config::default().to_toml().unwrap();
        assert!(toml.contains("[map]"));
        assert!(toml.contains("[[map.base_layers]]"));
        assert!(toml.contains("[fly_to]"));
        assert!(toml.contains("[[presets]]"));
    }
}
