//! Explicit handle to the map surface's drawing state.
//!
//! Holds what the drawing toolbar allows, how the boundary is styled and the
//! bus that results are published on. Every tool handler receives it by
//! reference.

use std::fmt;
use std::sync::Arc;

use landmapper_core::{AppEvent, EventBus, ShapeKind};
use serde::{Deserialize, Serialize};

/// Corner of the map holding the drawing toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlPosition {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Default for ControlPosition {
    fn default() -> Self {
        Self::TopLeft
    }
}

impl fmt::Display for ControlPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TopLeft => write!(f, "topleft"),
            Self::TopRight => write!(f, "topright"),
            Self::BottomLeft => write!(f, "bottomleft"),
            Self::BottomRight => write!(f, "bottomright"),
        }
    }
}

/// Drawing toolbar switches.
///
/// Markers, polylines, circles, text, drag, cut and rotate are never
/// offered; only the land-boundary tools are configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawControls {
    #[serde(default)]
    pub position: ControlPosition,
    pub draw_rectangle: bool,
    pub draw_polygon: bool,
    pub edit_mode: bool,
    pub removal_mode: bool,
}

impl Default for DrawControls {
    fn default() -> Self {
        Self {
            position: ControlPosition::TopLeft,
            draw_rectangle: true,
            draw_polygon: true,
            edit_mode: true,
            removal_mode: true,
        }
    }
}

impl DrawControls {
    /// Whether the toolbar offers drawing `kind`
    pub fn allows_draw(&self, kind: ShapeKind) -> bool {
        match kind {
            ShapeKind::Rectangle => self.draw_rectangle,
            ShapeKind::Polygon => self.draw_polygon,
        }
    }
}

/// Stroke and fill of the drawn boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathStyle {
    /// Stroke color, `#rrggbb`
    pub color: String,
    /// Fill color, `#rrggbb`
    pub fill_color: String,
    /// 0.0 (transparent) to 1.0 (opaque)
    pub fill_opacity: f64,
    /// Stroke width in pixels
    pub weight: u32,
}

impl Default for PathStyle {
    fn default() -> Self {
        Self {
            color: "#22c55e".to_string(),
            fill_color: "#22c55e".to_string(),
            fill_opacity: 0.3,
            weight: 3,
        }
    }
}

/// Drawing state shared between the map surface and the tools
#[derive(Debug, Clone)]
pub struct MapContext {
    pub controls: DrawControls,
    pub style: PathStyle,
    bus: Arc<EventBus>,
}

impl MapContext {
    /// Default controls and style, publishing on `bus`
    pub fn new(bus: Arc<EventBus>) -> Self {
        Self::with_settings(DrawControls::default(), PathStyle::default(), bus)
    }

    pub fn with_settings(controls: DrawControls, style: PathStyle, bus: Arc<EventBus>) -> Self {
        Self {
            controls,
            style,
            bus,
        }
    }

    pub fn bus(&self) -> &Arc<EventBus> {
        &self.bus
    }

    /// Publish on the context's bus; returns the number of handlers reached
    pub fn publish(&self, event: AppEvent) -> usize {
        self.bus.publish(event)
    }
}

impl Default for MapContext {
    fn default() -> Self {
        Self::new(Arc::new(EventBus::new()))
    }
}
