//! Geographic primitives
//!
//! Decimal-degree coordinates, the kinds of shape a user can draw and the
//! viewport target handed to the map surface.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoordinateAxis, CoordinateError, GeoError};

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a point without validating it.
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a point, rejecting non-finite or out-of-range values.
    pub fn checked(lat: f64, lng: f64) -> Result<Self, CoordinateError> {
        Ok(Self {
            lat: check_range(lat, CoordinateAxis::Latitude)?,
            lng: check_range(lng, CoordinateAxis::Longitude)?,
        })
    }

    /// Whether both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        Self::checked(self.lat, self.lng).is_ok()
    }

    /// Latitude in radians
    pub fn lat_rad(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians
    pub fn lng_rad(&self) -> f64 {
        self.lng.to_radians()
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lng)
    }
}

impl FromStr for LatLng {
    type Err = GeoError;

    /// Parses `"lat,lng"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::InvalidPair(s.to_string()))?;
        let lat = parse_coordinate(lat, CoordinateAxis::Latitude)?;
        let lng = parse_coordinate(lng, CoordinateAxis::Longitude)?;
        Ok(Self { lat, lng })
    }
}

/// Parses one typed coordinate.
///
/// Surrounding whitespace is ignored. Anything that is not a complete finite
/// decimal number, or lies outside the axis range, is rejected.
pub fn parse_coordinate(input: &str, axis: CoordinateAxis) -> Result<f64, CoordinateError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoordinateError::Empty { axis });
    }

    let value = trimmed
        .parse::<f64>()
        .map_err(|_| CoordinateError::Unparseable {
            axis,
            input: trimmed.to_string(),
        })?;

    check_range(value, axis)
}

fn check_range(value: f64, axis: CoordinateAxis) -> Result<f64, CoordinateError> {
    if !value.is_finite() {
        return Err(CoordinateError::Unparseable {
            axis,
            input: value.to_string(),
        });
    }

    let (min, max) = axis.range();
    if value < min || value > max {
        return Err(CoordinateError::OutOfRange {
            axis,
            value,
            min,
            max,
        });
    }
    Ok(value)
}

/// Kind of boundary the user draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Polygon,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rectangle => write!(f, "Rectangle"),
            Self::Polygon => write!(f, "Polygon"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangle" | "rect" => Ok(Self::Rectangle),
            "polygon" | "poly" => Ok(Self::Polygon),
            _ => Err(format!("Unknown shape kind: {}", s)),
        }
    }
}

/// Instruction for the map surface to recenter.
///
/// A new `request_id` means "fly now", even when the coordinates repeat.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportTarget {
    pub center: LatLng,
    pub request_id: u64,
    /// Zoom level to fly to
    pub zoom: u8,
    /// Animation length in seconds
    pub duration_secs: f64,
}
