//! Land boundary shapes.
//!
//! Every shape is a ring of latitude/longitude vertices. The map surface
//! owns rendering; these types only hold geometry and apply vertex edits.

mod polygon;
mod rectangle;

pub use polygon::FieldPolygon;
pub use rectangle::FieldRectangle;

use landmapper_core::{LatLng, ShapeKind};
use serde::{Deserialize, Serialize};

use crate::error::{ToolError, ToolResult};
use crate::geodesic::{distinct_vertex_count, geodesic_area, open_ring, MIN_RING_VERTICES};

/// Common behaviour of drawable boundaries
pub trait FieldShape {
    fn kind(&self) -> ShapeKind;

    /// Ring vertices in traversal order, without a closing duplicate
    fn vertices(&self) -> &[LatLng];

    /// Move vertex `index` to `point`.
    fn move_vertex(&mut self, index: usize, point: LatLng) -> ToolResult<()>;

    /// Insert a new vertex before `index` (`index == len` appends).
    fn insert_vertex(&mut self, index: usize, point: LatLng) -> ToolResult<()>;

    /// Delete vertex `index`.
    fn remove_vertex(&mut self, index: usize) -> ToolResult<()>;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Geodesic area in square meters
    fn area_sq_m(&self) -> f64 {
        geodesic_area(self.vertices())
    }
}

/// The committed land boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    Rectangle(FieldRectangle),
    Polygon(FieldPolygon),
}

impl Shape {
    /// Build a shape from a ring handed over by the map surface.
    ///
    /// Every vertex must be a valid coordinate and the ring, after dropping
    /// an explicit closing vertex, must have at least three distinct points.
    pub fn from_vertices(kind: ShapeKind, vertices: Vec<LatLng>) -> ToolResult<Self> {
        for v in &vertices {
            LatLng::checked(v.lat, v.lng)?;
        }

        let ring = open_ring(vertices);
        let distinct = distinct_vertex_count(&ring);
        if distinct < MIN_RING_VERTICES {
            return Err(ToolError::InsufficientVertices {
                required: MIN_RING_VERTICES,
                actual: distinct,
            });
        }

        Ok(match kind {
            ShapeKind::Rectangle => Shape::Rectangle(FieldRectangle::from_ring(ring)),
            ShapeKind::Polygon => Shape::Polygon(FieldPolygon::from_ring(ring)),
        })
    }

    /// Axis-aligned rectangle spanned by two opposite corners
    pub fn rectangle(corner: LatLng, opposite: LatLng) -> Self {
        Shape::Rectangle(FieldRectangle::from_corners(corner, opposite))
    }

    fn inner(&self) -> &dyn FieldShape {
        match self {
            Shape::Rectangle(r) => r,
            Shape::Polygon(p) => p,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn FieldShape {
        match self {
            Shape::Rectangle(r) => r,
            Shape::Polygon(p) => p,
        }
    }
}

impl FieldShape for Shape {
    fn kind(&self) -> ShapeKind {
        self.inner().kind()
    }

    fn vertices(&self) -> &[LatLng] {
        self.inner().vertices()
    }

    fn move_vertex(&mut self, index: usize, point: LatLng) -> ToolResult<()> {
        LatLng::checked(point.lat, point.lng)?;
        self.inner_mut().move_vertex(index, point)
    }

    fn insert_vertex(&mut self, index: usize, point: LatLng) -> ToolResult<()> {
        LatLng::checked(point.lat, point.lng)?;
        self.inner_mut().insert_vertex(index, point)
    }

    fn remove_vertex(&mut self, index: usize) -> ToolResult<()> {
        self.inner_mut().remove_vertex(index)
    }
}

pub(crate) fn check_index(index: usize, len: usize) -> ToolResult<()> {
    if index < len {
        Ok(())
    } else {
        Err(ToolError::VertexOutOfRange { index, len })
    }
}
