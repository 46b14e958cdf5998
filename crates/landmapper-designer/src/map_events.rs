//! Events the map surface sends to the area tool.

use landmapper_core::{LatLng, ShapeKind};
use serde::{Deserialize, Serialize};

/// One user interaction reported by the map surface.
///
/// Serialized with a `type` tag, e.g.
/// `{"type":"shape_edited","index":2,"point":{"lat":0.1,"lng":0.2}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MapEvent {
    /// A drawing tool was selected.
    DrawStarted { kind: ShapeKind },
    /// A click placed a vertex while drawing.
    VertexPlaced { point: LatLng },
    /// Double-click, or click on the first vertex.
    DrawFinished,
    /// The surface drew a complete shape in one step.
    ShapeCreated {
        kind: ShapeKind,
        vertices: Vec<LatLng>,
    },
    /// Vertex dragging began.
    EditStarted,
    /// A vertex was dragged to a new position.
    ShapeEdited { index: usize, point: LatLng },
    /// A midpoint handle was turned into a vertex.
    VertexInserted { index: usize, point: LatLng },
    /// A vertex was deleted.
    VertexRemoved { index: usize },
    /// Vertex dragging ended.
    EditFinished,
    /// The shape was deleted with the removal tool.
    ShapeRemoved,
}

impl MapEvent {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            MapEvent::DrawStarted { .. } => "draw_started",
            MapEvent::VertexPlaced { .. } => "vertex_placed",
            MapEvent::DrawFinished => "draw_finished",
            MapEvent::ShapeCreated { .. } => "shape_created",
            MapEvent::EditStarted => "edit_started",
            MapEvent::ShapeEdited { .. } => "shape_edited",
            MapEvent::VertexInserted { .. } => "vertex_inserted",
            MapEvent::VertexRemoved { .. } => "vertex_removed",
            MapEvent::EditFinished => "edit_finished",
            MapEvent::ShapeRemoved => "shape_removed",
        }
    }
}
