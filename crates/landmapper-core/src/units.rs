//! Area unit conversion utilities
//!
//! Converts measured areas from square meters into acres and hectares and
//! formats them for the measurement panel.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Square meters in one acre
pub const SQ_M_PER_ACRE: f64 = 4046.86;

/// Square meters in one hectare
pub const SQ_M_PER_HECTARE: f64 = 10_000.0;

/// Main line shown while nothing has been measured
pub const PLACEHOLDER_MAIN: &str = "0";

/// Hint shown while nothing has been measured
pub const PLACEHOLDER_HINT: &str = "Draw on map to measure";

/// Area unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaUnit {
    SquareMeters,
    Acres,
    Hectares,
}

impl Default for AreaUnit {
    fn default() -> Self {
        Self::SquareMeters
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SquareMeters => write!(f, "m²"),
            Self::Acres => write!(f, "Acres"),
            Self::Hectares => write!(f, "Hectares"),
        }
    }
}

impl FromStr for AreaUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m2" | "m²" | "sqm" | "square_meters" => Ok(Self::SquareMeters),
            "acre" | "acres" | "ac" => Ok(Self::Acres),
            "hectare" | "hectares" | "ha" => Ok(Self::Hectares),
            _ => Err(format!("Unknown area unit: {}", s)),
        }
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Convert an area in square meters to `unit`, unrounded
pub fn convert_area(square_meters: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeters => square_meters,
        AreaUnit::Acres => square_meters / SQ_M_PER_ACRE,
        AreaUnit::Hectares => square_meters / SQ_M_PER_HECTARE,
    }
}

/// Acres, rounded to 2 decimal places
pub fn to_acres(square_meters: f64) -> f64 {
    round_to(convert_area(square_meters, AreaUnit::Acres), 2)
}

/// Hectares, rounded to 2 decimal places
pub fn to_hectares(square_meters: f64) -> f64 {
    round_to(convert_area(square_meters, AreaUnit::Hectares), 2)
}

/// Insert `,` between groups of three digits
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format an area value for display
///
/// * `square_meters` - Area in square meters
/// * `unit` - Target unit
pub fn format_area(square_meters: f64, unit: AreaUnit) -> String {
    match unit {
        AreaUnit::SquareMeters => {
            // Float-to-int `as` saturates, so huge inputs cannot wrap
            let whole = square_meters.max(0.0).round() as u64;
            format!("{} {}", group_thousands(whole), unit)
        }
        AreaUnit::Acres | AreaUnit::Hectares => {
            format!("{:.2} {}", round_to(convert_area(square_meters, unit), 2), unit)
        }
    }
}

/// What the measurement panel shows for a given area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaDisplay {
    /// Headline, e.g. `5,000 m²`
    pub main: String,
    /// Secondary line, e.g. `1.24 Acres | 0.50 Hectares`
    pub sub: String,
    /// False while the placeholder is shown
    pub measured: bool,
}

impl AreaDisplay {
    /// The "nothing measured yet" state
    pub fn placeholder() -> Self {
        Self {
            main: PLACEHOLDER_MAIN.to_string(),
            sub: PLACEHOLDER_HINT.to_string(),
            measured: false,
        }
    }
}

impl fmt::Display for AreaDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.main, self.sub)
    }
}

/// Build the measurement panel text for an area in square meters.
///
/// Zero renders the placeholder. So do negative and non-finite inputs, which
/// no valid shape produces.
pub fn format_area_display(square_meters: f64) -> AreaDisplay {
    if !square_meters.is_finite() || square_meters <= 0.0 {
        return AreaDisplay::placeholder();
    }

    AreaDisplay {
        main: format_area(square_meters, AreaUnit::SquareMeters),
        sub: format!(
            "{} | {}",
            format_area(square_meters, AreaUnit::Acres),
            format_area(square_meters, AreaUnit::Hectares)
        ),
        measured: true,
    }
}
