//! Vertex edits on the committed shape.
//!
//! Every edit recomputes the area from the updated ring before returning.

use landmapper_core::{AppEvent, LatLng, ShapeEvent};
use tracing::debug;

use super::{invalid_transition, AreaTool, ToolPhase, ToolState};
use crate::error::{ToolError, ToolResult};
use crate::map_context::MapContext;
use crate::model::{FieldShape, Shape};

impl AreaTool {
    /// Begin dragging vertices of the committed shape.
    pub fn start_edit(&mut self, ctx: &MapContext) -> ToolResult<()> {
        let current = self.phase();
        if current != ToolPhase::Committed {
            return Err(invalid_transition(current, "start editing"));
        }
        if !ctx.controls.edit_mode {
            return Err(ToolError::ControlDisabled("edit mode"));
        }

        self.state = match std::mem::take(&mut self.state) {
            ToolState::Committed(shape) => ToolState::Editing(shape),
            other => other,
        };
        debug!("Editing started");
        ctx.publish(AppEvent::Shape(ShapeEvent::EditStarted));
        Ok(())
    }

    /// A vertex was dragged to `point`; the area is recomputed right away.
    pub fn vertex_moved(&mut self, ctx: &MapContext, index: usize, point: LatLng) -> ToolResult<()> {
        self.apply_edit(ctx, "move a vertex", |shape| shape.move_vertex(index, point))
    }

    /// A midpoint handle became vertex `index`. Polygons only.
    pub fn vertex_inserted(
        &mut self,
        ctx: &MapContext,
        index: usize,
        point: LatLng,
    ) -> ToolResult<()> {
        self.apply_edit(ctx, "insert a vertex", |shape| {
            shape.insert_vertex(index, point)
        })
    }

    /// Vertex `index` was deleted. Polygons only, and never below three.
    pub fn vertex_removed(&mut self, ctx: &MapContext, index: usize) -> ToolResult<()> {
        self.apply_edit(ctx, "remove a vertex", |shape| shape.remove_vertex(index))
    }

    /// Stop dragging and publish the final area.
    pub fn end_edit(&mut self, ctx: &MapContext) -> ToolResult<()> {
        let current = self.phase();
        if current != ToolPhase::Editing {
            return Err(invalid_transition(current, "finish editing"));
        }

        self.state = match std::mem::take(&mut self.state) {
            ToolState::Editing(shape) => ToolState::Committed(shape),
            other => other,
        };
        let area = self.shape().map(|shape| shape.area_sq_m()).unwrap_or_default();
        debug!(area_sq_m = area, "Editing finished");
        ctx.publish(AppEvent::Shape(ShapeEvent::EditFinished));
        self.set_area(ctx, area);
        Ok(())
    }

    fn apply_edit<F>(&mut self, ctx: &MapContext, requested: &'static str, edit: F) -> ToolResult<()>
    where
        F: FnOnce(&mut Shape) -> ToolResult<()>,
    {
        let current = self.phase();
        let ToolState::Editing(shape) = &mut self.state else {
            return Err(invalid_transition(current, requested));
        };

        edit(shape)?;
        let vertex_count = shape.vertex_count();
        let area = shape.area_sq_m();

        ctx.publish(AppEvent::Shape(ShapeEvent::Edited { vertex_count }));
        self.set_area(ctx, area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{committed_square, recording_context};
    use super::*;
    use landmapper_core::{AreaEvent, ShapeKind};

    #[test]
    fn test_edit_round_trip() {
        let (ctx, events) = recording_context();
        let mut tool = committed_square(&ctx);
        let before = tool.area_sq_m();
        events.lock().clear();

        tool.start_edit(&ctx).unwrap();
        assert_eq!(tool.phase(), ToolPhase::Editing);

        tool.vertex_moved(&ctx, 2, LatLng::new(0.002, 0.002)).unwrap();
        let during = tool.area_sq_m();
        assert!(during > before);

        tool.end_edit(&ctx).unwrap();
        assert_eq!(tool.phase(), ToolPhase::Committed);
        assert_eq!(tool.area_sq_m(), during);

        assert_eq!(
            *events.lock(),
            vec![
                AppEvent::Shape(ShapeEvent::EditStarted),
                AppEvent::Shape(ShapeEvent::Edited { vertex_count: 4 }),
                AppEvent::Area(AreaEvent::Updated {
                    square_meters: during
                }),
                AppEvent::Shape(ShapeEvent::EditFinished),
                AppEvent::Area(AreaEvent::Updated {
                    square_meters: during
                }),
            ]
        );
    }

    #[test]
    fn test_vertex_moved_out_of_range() {
        let (ctx, _events) = recording_context();
        let mut tool = committed_square(&ctx);
        tool.start_edit(&ctx).unwrap();
        let before = tool.clone();

        assert_eq!(
            tool.vertex_moved(&ctx, 9, LatLng::new(0.0, 0.0)),
            Err(ToolError::VertexOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(tool.state(), before.state());
        assert_eq!(tool.area_sq_m(), before.area_sq_m());
    }

    #[test]
    fn test_edits_need_editing_phase() {
        let (ctx, _events) = recording_context();
        let mut tool = committed_square(&ctx);

        assert_eq!(
            tool.vertex_moved(&ctx, 0, LatLng::new(0.0, 0.0)),
            Err(ToolError::InvalidTransition {
                current: ToolPhase::Committed,
                requested: "move a vertex"
            })
        );
        assert!(matches!(
            tool.end_edit(&ctx),
            Err(ToolError::InvalidTransition { .. })
        ));
        assert_eq!(tool.phase(), ToolPhase::Committed);
    }

    #[test]
    fn test_edit_mode_guard() {
        let (mut ctx, _events) = recording_context();
        let mut tool = committed_square(&ctx);
        ctx.controls.edit_mode = false;

        assert_eq!(
            tool.start_edit(&ctx),
            Err(ToolError::ControlDisabled("edit mode"))
        );
        assert_eq!(tool.phase(), ToolPhase::Committed);
    }

    #[test]
    fn test_insert_and_remove_vertices() {
        let (ctx, _events) = recording_context();
        let mut tool = committed_square(&ctx);
        let before = tool.area_sq_m();
        tool.start_edit(&ctx).unwrap();

        tool.vertex_inserted(&ctx, 1, LatLng::new(-0.0005, 0.0005))
            .unwrap();
        assert_eq!(tool.shape().unwrap().vertex_count(), 5);
        assert!(tool.area_sq_m() > before);

        tool.vertex_removed(&ctx, 1).unwrap();
        tool.vertex_removed(&ctx, 0).unwrap();
        assert_eq!(tool.shape().unwrap().vertex_count(), 3);
        assert!(tool.area_sq_m() < before);

        let err = tool.vertex_removed(&ctx, 0).unwrap_err();
        assert!(matches!(err, ToolError::InsufficientVertices { .. }));
        assert_eq!(tool.shape().unwrap().vertex_count(), 3);
    }

    #[test]
    fn test_rectangle_rejects_vertex_insertion() {
        let (ctx, _events) = recording_context();
        let mut tool = AreaTool::new();
        tool.commit(
            &ctx,
            ShapeKind::Rectangle,
            Shape::rectangle(LatLng::new(0.0, 0.0), LatLng::new(0.001, 0.001))
                .vertices()
                .to_vec(),
        )
        .unwrap();
        tool.start_edit(&ctx).unwrap();

        assert!(matches!(
            tool.vertex_inserted(&ctx, 1, LatLng::new(0.0005, 0.0)),
            Err(ToolError::UnsupportedEdit { .. })
        ));
        assert_eq!(tool.shape().unwrap().vertex_count(), 4);
    }
}
