//! # LandMapper Core
//!
//! Core types and utilities shared by the LandMapper crates.
//! Provides geographic coordinates, error types, area unit conversion
//! and the event bus used to publish measurement updates.

pub mod error;
pub mod event_bus;
pub mod geo;
pub mod units;

pub use error::{CoordinateAxis, CoordinateError, GeoError};

pub use geo::{parse_coordinate, LatLng, ShapeKind, ViewportTarget};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, AreaEvent, EventBus, EventBusConfig, EventCategory, EventFilter, ShapeEvent,
    SubscriptionId, ViewportEvent,
};

pub use units::{format_area, format_area_display, AreaDisplay, AreaUnit};
