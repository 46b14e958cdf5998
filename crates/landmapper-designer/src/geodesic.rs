//! Geodesic area of a latitude/longitude ring.
//!
//! Uses the spherical polygon approximation of Chamberlain and Duquette
//!
//! ```text
//! A = | R² / 2 · Σ (λ[i+1] − λ[i]) · (2 + sin φ[i] + sin φ[i+1]) |
//! ```
//!
//! over consecutive vertex pairs of the implicitly closed ring (last vertex
//! connects back to the first), with φ/λ in radians and R the WGS84
//! semi-major axis, as computed by `geo::ChamberlainDuquetteArea`. Accurate
//! for field-sized polygons; not exact for very large, near-polar or
//! antimeridian-crossing shapes. Self-intersecting rings give a
//! deterministic but meaningless value.

use geo::{ChamberlainDuquetteArea, Coord, LineString, Polygon};
use landmapper_core::LatLng;

/// Sphere radius used for area, in meters (WGS84 semi-major axis)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Fewest vertices that enclose an area
pub const MIN_RING_VERTICES: usize = 3;

/// Tolerance, in degrees, for treating two vertices as the same point
pub const VERTEX_EPSILON_DEG: f64 = 1e-12;

fn ring_polygon(ring: &[LatLng]) -> Polygon<f64> {
    let exterior: LineString<f64> = ring
        .iter()
        .map(|p| Coord { x: p.lng, y: p.lat })
        .collect();
    Polygon::new(exterior, vec![])
}

fn measurable(ring: &[LatLng]) -> bool {
    ring.len() >= MIN_RING_VERTICES
        && ring.iter().all(|p| p.lat.is_finite() && p.lng.is_finite())
}

/// Signed area in square meters; the sign follows traversal direction.
///
/// Returns 0.0 for rings with fewer than three vertices or a non-finite
/// coordinate.
pub fn signed_geodesic_area(ring: &[LatLng]) -> f64 {
    if !measurable(ring) {
        return 0.0;
    }
    ring_polygon(ring).chamberlain_duquette_signed_area()
}

/// Area enclosed by `ring` in square meters.
///
/// Never negative and never NaN: degenerate rings and rings containing
/// non-finite coordinates measure 0.0. Orientation does not matter.
pub fn geodesic_area(ring: &[LatLng]) -> f64 {
    if !measurable(ring) {
        return 0.0;
    }
    let area = ring_polygon(ring).chamberlain_duquette_unsigned_area();
    if area.is_finite() {
        area
    } else {
        0.0
    }
}

/// Whether two vertices coincide
pub fn same_vertex(a: &LatLng, b: &LatLng) -> bool {
    (a.lat - b.lat).abs() <= VERTEX_EPSILON_DEG && (a.lng - b.lng).abs() <= VERTEX_EPSILON_DEG
}

/// Number of vertices that do not coincide with an earlier one
pub fn distinct_vertex_count(ring: &[LatLng]) -> usize {
    ring.iter()
        .enumerate()
        .filter(|(i, v)| !ring[..*i].iter().any(|earlier| same_vertex(earlier, v)))
        .count()
}

/// Drop an explicit closing vertex (last == first), as found in GeoJSON rings.
pub fn open_ring(mut ring: Vec<LatLng>) -> Vec<LatLng> {
    if ring.len() > MIN_RING_VERTICES {
        if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
            if same_vertex(first, last) {
                ring.pop();
            }
        }
    }
    ring
}
