//! Error handling for LandMapper
//!
//! Provides error types for the shared layers of the application:
//! - Geographic errors (`lat,lng` pairs)
//! - Coordinate errors (latitude/longitude text input)
//!
//! Each crate above core owns its own error enum; the binary joins them
//! with `anyhow`.
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::fmt;

use thiserror::Error;

/// Coordinate axis, used to report which input field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateAxis {
    Latitude,
    Longitude,
}

impl CoordinateAxis {
    /// Inclusive valid range in decimal degrees.
    pub fn range(self) -> (f64, f64) {
        match self {
            Self::Latitude => (-90.0, 90.0),
            Self::Longitude => (-180.0, 180.0),
        }
    }
}

impl fmt::Display for CoordinateAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude => write!(f, "latitude"),
            Self::Longitude => write!(f, "longitude"),
        }
    }
}

/// Coordinate input error type
///
/// Raised when a typed coordinate cannot be turned into a valid
/// decimal-degree value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Input was empty or whitespace only
    #[error("Missing {axis}")]
    Empty {
        /// The axis of the empty field.
        axis: CoordinateAxis,
    },

    /// Input is not a finite decimal number
    #[error("Invalid {axis} '{input}': not a decimal number")]
    Unparseable {
        /// The axis of the rejected field.
        axis: CoordinateAxis,
        /// The raw text that failed to parse.
        input: String,
    },

    /// Input parsed but lies outside the valid range
    #[error("{axis} {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// The axis of the rejected field.
        axis: CoordinateAxis,
        /// The parsed value.
        value: f64,
        /// Lower bound of the valid range.
        min: f64,
        /// Upper bound of the valid range.
        max: f64,
    },
}

impl CoordinateError {
    /// Axis whose input was rejected
    pub fn axis(&self) -> CoordinateAxis {
        match self {
            Self::Empty { axis } | Self::Unparseable { axis, .. } | Self::OutOfRange { axis, .. } => {
                *axis
            }
        }
    }
}

/// Geographic error type
///
/// Raised when a `lat,lng` pair cannot be turned into a point.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// A component of the pair is not a valid coordinate
    #[error("Invalid vertex: {0}")]
    InvalidVertex(#[from] CoordinateError),

    /// Text could not be parsed as a `lat,lng` pair
    #[error("Invalid lat,lng pair: '{0}'")]
    InvalidPair(String),
}

impl GeoError {
    /// Check if this wraps a coordinate input error
    pub fn is_coordinate_error(&self) -> bool {
        matches!(self, GeoError::InvalidVertex(_))
    }
}
