use landmapper_core::{LatLng, ShapeKind};
use serde::{Deserialize, Serialize};

use super::{check_index, FieldShape};
use crate::error::{ToolError, ToolResult};
use crate::geodesic::MIN_RING_VERTICES;

/// Free-form boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldPolygon {
    vertices: Vec<LatLng>,
}

impl FieldPolygon {
    /// Caller guarantees at least three valid vertices.
    pub(crate) fn from_ring(vertices: Vec<LatLng>) -> Self {
        Self { vertices }
    }
}

impl FieldShape for FieldPolygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    fn move_vertex(&mut self, index: usize, point: LatLng) -> ToolResult<()> {
        check_index(index, self.vertices.len())?;
        self.vertices[index] = point;
        Ok(())
    }

    fn insert_vertex(&mut self, index: usize, point: LatLng) -> ToolResult<()> {
        // index == len appends after the last vertex
        check_index(index, self.vertices.len() + 1)?;
        self.vertices.insert(index, point);
        Ok(())
    }

    fn remove_vertex(&mut self, index: usize) -> ToolResult<()> {
        check_index(index, self.vertices.len())?;
        let remaining = self.vertices.len() - 1;
        if remaining < MIN_RING_VERTICES {
            return Err(ToolError::InsufficientVertices {
                required: MIN_RING_VERTICES,
                actual: remaining,
            });
        }
        self.vertices.remove(index);
        Ok(())
    }
}
