//! Placing vertices and committing a shape.

use landmapper_core::{AppEvent, LatLng, ShapeEvent, ShapeKind};
use tracing::{debug, trace};

use super::{invalid_transition, AreaTool, ToolPhase, ToolState};
use crate::error::{ToolError, ToolResult};
use crate::map_context::MapContext;
use crate::model::{FieldRectangle, Shape};

fn draw_control_name(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "draw rectangle",
        ShapeKind::Polygon => "draw polygon",
    }
}

impl AreaTool {
    /// Pick a drawing tool. Only one shape may exist at a time.
    pub fn start_draw(&mut self, ctx: &MapContext, kind: ShapeKind) -> ToolResult<()> {
        let current = self.phase();
        if current != ToolPhase::Idle {
            return Err(invalid_transition(current, "start drawing"));
        }
        if !ctx.controls.allows_draw(kind) {
            return Err(ToolError::ControlDisabled(draw_control_name(kind)));
        }

        self.state = ToolState::Drawing {
            kind,
            vertices: Vec::new(),
        };
        debug!(%kind, "Drawing started");
        ctx.publish(AppEvent::Shape(ShapeEvent::DrawStarted { kind }));
        Ok(())
    }

    /// Place a vertex with a click.
    ///
    /// Polygons append the point. For rectangles the first click anchors a
    /// corner and every later click sets the opposite corner, so the ring
    /// always holds either the anchor alone or four corners. No area is
    /// published while drawing.
    pub fn add_vertex(&mut self, _ctx: &MapContext, point: LatLng) -> ToolResult<()> {
        let current = self.phase();
        let ToolState::Drawing { kind, vertices } = &mut self.state else {
            return Err(invalid_transition(current, "place a vertex"));
        };
        LatLng::checked(point.lat, point.lng)?;

        match (*kind, vertices.first().copied()) {
            (ShapeKind::Rectangle, Some(anchor)) => {
                *vertices = FieldRectangle::from_corners(anchor, point).into_vertices();
            }
            _ => vertices.push(point),
        }
        trace!(%point, vertex_count = vertices.len(), "Vertex placed");
        Ok(())
    }

    /// Close the ring and commit it (double-click or click on the first vertex).
    pub fn finish(&mut self, ctx: &MapContext) -> ToolResult<()> {
        let current = self.phase();
        let ToolState::Drawing { kind, vertices } = &self.state else {
            return Err(invalid_transition(current, "finish drawing"));
        };

        let shape = Shape::from_vertices(*kind, vertices.clone())?;
        self.commit_shape(ctx, shape);
        Ok(())
    }

    /// Commit a complete ring handed over by the map surface in one step.
    ///
    /// Allowed from `Idle` and replaces a drawing in progress.
    pub fn commit(
        &mut self,
        ctx: &MapContext,
        kind: ShapeKind,
        vertices: Vec<LatLng>,
    ) -> ToolResult<()> {
        let current = self.phase();
        if !matches!(current, ToolPhase::Idle | ToolPhase::Drawing) {
            return Err(invalid_transition(current, "create a shape"));
        }
        if !ctx.controls.allows_draw(kind) {
            return Err(ToolError::ControlDisabled(draw_control_name(kind)));
        }

        let shape = Shape::from_vertices(kind, vertices)?;
        self.commit_shape(ctx, shape);
        Ok(())
    }
}
