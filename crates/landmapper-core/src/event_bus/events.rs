//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::geo::{ShapeKind, ViewportTarget};

/// Root event enum for all application events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AppEvent {
    /// Shape lifecycle
    Shape(ShapeEvent),
    /// Measured area
    Area(AreaEvent),
    /// Map recentering
    Viewport(ViewportEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Shape(_) => EventCategory::Shape,
            AppEvent::Area(_) => EventCategory::Area,
            AppEvent::Viewport(_) => EventCategory::Viewport,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Shape(e) => e.description(),
            AppEvent::Area(e) => e.description(),
            AppEvent::Viewport(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Shape,
    Area,
    Viewport,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Shape => write!(f, "Shape"),
            EventCategory::Area => write!(f, "Area"),
            EventCategory::Viewport => write!(f, "Viewport"),
        }
    }
}

/// Shape lifecycle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShapeEvent {
    /// User picked a drawing tool.
    DrawStarted {
        /// Kind being drawn.
        kind: ShapeKind,
    },
    /// Drawing finished and the shape is now active.
    Committed {
        /// Kind of the committed shape.
        kind: ShapeKind,
        /// Number of vertices in the ring.
        vertex_count: usize,
    },
    /// Vertex dragging started.
    EditStarted,
    /// The ring changed during editing.
    Edited {
        /// Number of vertices after the edit.
        vertex_count: usize,
    },
    /// Vertex dragging ended.
    EditFinished,
    /// The shape was discarded.
    Removed,
}

impl ShapeEvent {
    fn description(&self) -> String {
        match self {
            ShapeEvent::DrawStarted { kind } => format!("Drawing {}", kind),
            ShapeEvent::Committed { kind, vertex_count } => {
                format!("{} committed with {} vertices", kind, vertex_count)
            }
            ShapeEvent::EditStarted => "Editing started".to_string(),
            ShapeEvent::Edited { vertex_count } => {
                format!("Shape edited ({} vertices)", vertex_count)
            }
            ShapeEvent::EditFinished => "Editing finished".to_string(),
            ShapeEvent::Removed => "Shape removed".to_string(),
        }
    }
}

/// Measured area events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AreaEvent {
    /// New area of the active shape.
    Updated {
        /// Geodesic area in square meters.
        square_meters: f64,
    },
    /// No shape is active; area is zero.
    Cleared,
}

impl AreaEvent {
    /// Area carried by this event, zero when cleared
    pub fn square_meters(&self) -> f64 {
        match self {
            AreaEvent::Updated { square_meters } => *square_meters,
            AreaEvent::Cleared => 0.0,
        }
    }

    fn description(&self) -> String {
        match self {
            AreaEvent::Updated { square_meters } => format!("Area {:.1} m²", square_meters),
            AreaEvent::Cleared => "Area cleared".to_string(),
        }
    }
}

/// Map recentering events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewportEvent {
    /// Fly the map to the target.
    FlyTo(ViewportTarget),
}

impl ViewportEvent {
    fn description(&self) -> String {
        match self {
            ViewportEvent::FlyTo(target) => format!(
                "Fly to {} (zoom {}, request {})",
                target.center, target.zoom, target.request_id
            ),
        }
    }
}
