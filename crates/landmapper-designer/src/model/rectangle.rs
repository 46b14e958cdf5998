use landmapper_core::{LatLng, ShapeKind};
use serde::{Deserialize, Serialize};

use super::{check_index, FieldShape};
use crate::error::{ToolError, ToolResult};
use crate::geodesic::VERTEX_EPSILON_DEG;

/// Rectangle boundary.
///
/// While the ring is an axis-aligned quadrilateral, dragging a corner drags
/// its two neighbours along so the shape stays a rectangle. Edges alternate
/// between constant latitude and constant longitude; `lat_edge_parity`
/// records whether edge 0 (vertex 0 → 1) or edge 1 is the first
/// constant-latitude edge. A ring that is not axis-aligned edits freely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRectangle {
    vertices: Vec<LatLng>,
    lat_edge_parity: Option<usize>,
}

impl FieldRectangle {
    /// Rectangle spanned by two opposite corners.
    ///
    /// Vertex order is `corner`, `(corner.lat, opposite.lng)`, `opposite`,
    /// `(opposite.lat, corner.lng)`.
    pub fn from_corners(corner: LatLng, opposite: LatLng) -> Self {
        Self {
            vertices: vec![
                corner,
                LatLng::new(corner.lat, opposite.lng),
                opposite,
                LatLng::new(opposite.lat, corner.lng),
            ],
            lat_edge_parity: Some(0),
        }
    }

    /// Caller guarantees at least three valid vertices.
    pub(crate) fn from_ring(vertices: Vec<LatLng>) -> Self {
        let lat_edge_parity = detect_lat_edge_parity(&vertices);
        Self {
            vertices,
            lat_edge_parity,
        }
    }

    /// Whether corner drags keep the shape axis-aligned
    pub fn is_axis_aligned(&self) -> bool {
        self.lat_edge_parity.is_some()
    }

    pub fn into_vertices(self) -> Vec<LatLng> {
        self.vertices
    }

    /// Edge `i` runs from vertex `i` to vertex `i + 1`
    fn edge_keeps_lat(parity: usize, edge: usize) -> bool {
        edge % 2 == parity
    }
}

fn detect_lat_edge_parity(vertices: &[LatLng]) -> Option<usize> {
    if vertices.len() != 4 {
        return None;
    }

    let close = |a: f64, b: f64| (a - b).abs() <= VERTEX_EPSILON_DEG;
    (0..2).find(|&parity| {
        (0..4).all(|edge| {
            let a = vertices[edge];
            let b = vertices[(edge + 1) % 4];
            if FieldRectangle::edge_keeps_lat(parity, edge) {
                close(a.lat, b.lat)
            } else {
                close(a.lng, b.lng)
            }
        })
    })
}

impl FieldShape for FieldRectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn vertices(&self) -> &[LatLng] {
        &self.vertices
    }

    fn move_vertex(&mut self, index: usize, point: LatLng) -> ToolResult<()> {
        check_index(index, self.vertices.len())?;
        self.vertices[index] = point;

        if let Some(parity) = self.lat_edge_parity {
            let next = (index + 1) % 4;
            let prev = (index + 3) % 4;

            if Self::edge_keeps_lat(parity, index) {
                self.vertices[next].lat = point.lat;
            } else {
                self.vertices[next].lng = point.lng;
            }

            if Self::edge_keeps_lat(parity, prev) {
                self.vertices[prev].lat = point.lat;
            } else {
                self.vertices[prev].lng = point.lng;
            }
        }
        Ok(())
    }

    fn insert_vertex(&mut self, _index: usize, _point: LatLng) -> ToolResult<()> {
        Err(ToolError::UnsupportedEdit {
            kind: ShapeKind::Rectangle,
            operation: "vertex insertion",
        })
    }

    fn remove_vertex(&mut self, _index: usize) -> ToolResult<()> {
        Err(ToolError::UnsupportedEdit {
            kind: ShapeKind::Rectangle,
            operation: "vertex removal",
        })
    }
}
