//! Error types for the designer crate.
//!
//! This module provides structured error types for the shape lifecycle and
//! vertex editing.

use landmapper_core::{CoordinateError, ShapeKind};
use thiserror::Error;

use crate::tool_state::ToolPhase;

/// Errors that can occur while drawing or editing the active shape.
///
/// A rejected operation leaves the tool exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// The operation is not valid in the current phase.
    #[error("Cannot {requested} while {current}")]
    InvalidTransition {
        current: ToolPhase,
        requested: &'static str,
    },

    /// The ring has too few vertices to enclose an area.
    #[error("Shape needs at least {required} vertices, got {actual}")]
    InsufficientVertices { required: usize, actual: usize },

    /// A vertex index is outside the ring.
    #[error("Vertex index {index} out of range (vertices: {len})")]
    VertexOutOfRange { index: usize, len: usize },

    /// The edit is not available for this kind of shape.
    #[error("{kind} does not support {operation}")]
    UnsupportedEdit {
        kind: ShapeKind,
        operation: &'static str,
    },

    /// The map's draw controls have this action switched off.
    #[error("Map control disabled: {0}")]
    ControlDisabled(&'static str),

    /// A vertex is not a valid coordinate.
    #[error("Invalid vertex: {0}")]
    InvalidVertex(#[from] CoordinateError),
}

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
