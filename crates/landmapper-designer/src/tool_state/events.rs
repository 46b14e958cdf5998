//! Dispatch of map-surface events onto the lifecycle.

use landmapper_core::LatLng;
use tracing::{trace, warn};

use super::{AreaTool, ToolPhase};
use crate::error::ToolResult;
use crate::map_context::MapContext;
use crate::map_events::MapEvent;
use crate::model::{check_index, FieldShape};

impl AreaTool {
    /// Apply one event from the map surface.
    ///
    /// A `ShapeEdited` on a committed shape enters editing first, so a
    /// surface that only reports finished drags still gets a live area.
    pub fn handle(&mut self, ctx: &MapContext, event: MapEvent) -> ToolResult<()> {
        let name = event.name();
        trace!(event = name, phase = %self.phase(), "Map event");

        let result = match event {
            MapEvent::DrawStarted { kind } => self.start_draw(ctx, kind),
            MapEvent::VertexPlaced { point } => self.add_vertex(ctx, point),
            MapEvent::DrawFinished => self.finish(ctx),
            MapEvent::ShapeCreated { kind, vertices } => self.commit(ctx, kind, vertices),
            MapEvent::EditStarted => self.start_edit(ctx),
            MapEvent::ShapeEdited { index, point } => self.edit_vertex(ctx, index, point),
            MapEvent::VertexInserted { index, point } => self.vertex_inserted(ctx, index, point),
            MapEvent::VertexRemoved { index } => self.vertex_removed(ctx, index),
            MapEvent::EditFinished => self.end_edit(ctx),
            MapEvent::ShapeRemoved => self.remove(ctx),
        };

        if let Err(e) = &result {
            warn!(event = name, error = %e, "Map event rejected");
        }
        result
    }

    fn edit_vertex(&mut self, ctx: &MapContext, index: usize, point: LatLng) -> ToolResult<()> {
        if self.phase() == ToolPhase::Committed {
            // Validate before leaving Committed so a bad drag changes nothing
            if let Some(shape) = self.shape() {
                check_index(index, shape.vertex_count())?;
            }
            LatLng::checked(point.lat, point.lng)?;
            self.start_edit(ctx)?;
        }
        self.vertex_moved(ctx, index, point)
    }
}
