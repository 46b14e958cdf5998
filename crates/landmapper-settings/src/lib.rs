//! LandMapper Settings Crate
//!
//! Handles the map configuration: base layers, fly-to parameters, draw
//! controls, path style and preset locations.

pub mod config;
pub mod error;

pub use config::{BaseLayer, Config, MapConfig};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
