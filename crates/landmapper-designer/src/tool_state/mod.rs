//! The single active shape and its lifecycle.
//!
//! `AreaTool` owns at most one shape and moves it through
//! `Idle → Drawing → Committed ⇄ Editing → Idle`. Every transition is a
//! named method with its guard; the map surface can also drive the machine
//! with [`MapEvent`](crate::MapEvent)s through [`AreaTool::handle`].
//!
//! This module is split into submodules:
//! - `drawing`: placing vertices and committing a shape
//! - `editing`: vertex edits on the committed shape
//! - `events`: dispatch of map-surface events

mod drawing;
mod editing;
mod events;

use std::fmt;

use landmapper_core::{
    format_area_display, AppEvent, AreaDisplay, AreaEvent, LatLng, ShapeEvent, ShapeKind,
};
use tracing::{debug, info};

use crate::error::{ToolError, ToolResult};
use crate::map_context::MapContext;
use crate::model::{FieldShape, Shape};

/// Lifecycle phase, without the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolPhase {
    Idle,
    Drawing,
    Committed,
    Editing,
}

impl fmt::Display for ToolPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Drawing => write!(f, "drawing"),
            Self::Committed => write!(f, "a shape is committed"),
            Self::Editing => write!(f, "editing"),
        }
    }
}

/// Lifecycle state with the data each phase owns
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToolState {
    /// No shape.
    #[default]
    Idle,
    /// Vertices placed so far; not yet a valid shape.
    Drawing {
        kind: ShapeKind,
        vertices: Vec<LatLng>,
    },
    /// Finished shape, area displayed.
    Committed(Shape),
    /// Finished shape whose vertices are being dragged.
    Editing(Shape),
}

impl ToolState {
    pub fn phase(&self) -> ToolPhase {
        match self {
            ToolState::Idle => ToolPhase::Idle,
            ToolState::Drawing { .. } => ToolPhase::Drawing,
            ToolState::Committed(_) => ToolPhase::Committed,
            ToolState::Editing(_) => ToolPhase::Editing,
        }
    }

    /// The finished shape, if any
    pub fn shape(&self) -> Option<&Shape> {
        match self {
            ToolState::Committed(shape) | ToolState::Editing(shape) => Some(shape),
            ToolState::Idle | ToolState::Drawing { .. } => None,
        }
    }
}

/// Area measurement tool for one land boundary.
///
/// Holds the active shape and its last computed area. Results are published
/// on the bus of the [`MapContext`] passed to each call; a rejected call
/// returns an error and changes nothing.
#[derive(Debug, Clone, Default)]
pub struct AreaTool {
    state: ToolState,
    area_sq_m: f64,
}

impl AreaTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    pub fn phase(&self) -> ToolPhase {
        self.state.phase()
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.state.shape()
    }

    /// Area of the active shape in square meters, 0 when there is none
    pub fn area_sq_m(&self) -> f64 {
        self.area_sq_m
    }

    /// Display strings for the current area
    pub fn display(&self) -> AreaDisplay {
        format_area_display(self.area_sq_m)
    }

    /// Discard the shape (or the drawing in progress) with the removal tool.
    pub fn remove(&mut self, ctx: &MapContext) -> ToolResult<()> {
        let current = self.phase();
        if current == ToolPhase::Idle {
            return Err(invalid_transition(current, "remove the shape"));
        }
        if !ctx.controls.removal_mode {
            return Err(ToolError::ControlDisabled("removal mode"));
        }

        self.reset();
        info!(from = %current, "Shape removed");
        ctx.publish(AppEvent::Shape(ShapeEvent::Removed));
        ctx.publish(AppEvent::Area(AreaEvent::Cleared));
        Ok(())
    }

    /// Return to `Idle` from any state, ignoring draw controls.
    pub fn clear(&mut self, ctx: &MapContext) {
        let had_shape = self.phase() != ToolPhase::Idle;
        self.reset();
        debug!(had_shape, "Area tool cleared");
        if had_shape {
            ctx.publish(AppEvent::Shape(ShapeEvent::Removed));
        }
        ctx.publish(AppEvent::Area(AreaEvent::Cleared));
    }

    fn reset(&mut self) {
        self.state = ToolState::Idle;
        self.area_sq_m = 0.0;
    }

    /// Move a finished shape into `Committed` and publish its area
    fn commit_shape(&mut self, ctx: &MapContext, shape: Shape) {
        let kind = shape.kind();
        let vertex_count = shape.vertex_count();
        let area = shape.area_sq_m();

        self.state = ToolState::Committed(shape);
        info!(%kind, vertex_count, area_sq_m = area, "Shape committed");
        ctx.publish(AppEvent::Shape(ShapeEvent::Committed { kind, vertex_count }));
        self.set_area(ctx, area);
    }

    fn set_area(&mut self, ctx: &MapContext, square_meters: f64) {
        self.area_sq_m = square_meters;
        debug!(area_sq_m = square_meters, "Area updated");
        ctx.publish(AppEvent::Area(AreaEvent::Updated { square_meters }));
    }
}

fn invalid_transition(current: ToolPhase, requested: &'static str) -> ToolError {
    ToolError::InvalidTransition { current, requested }
}
