//! Property tests for the spherical area approximation

use geo::algorithm::geodesic_area::GeodesicArea;
use geo::{Coord, Polygon};
use landmapper_core::LatLng;
use landmapper_designer::{geodesic_area, EARTH_RADIUS_M};
use proptest::prelude::*;

fn ellipsoid_area(ring: &[LatLng]) -> f64 {
    let coords: Vec<Coord<f64>> = ring.iter().map(|p| Coord { x: p.lng, y: p.lat }).collect();
    Polygon::new(coords.into(), vec![]).geodesic_area_unsigned()
}

fn relative_diff(a: f64, b: f64) -> f64 {
    (a - b).abs() / a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

/// Field-sized rings: 3 to 12 vertices within roughly 5 km of a center
fn field_ring() -> impl Strategy<Value = Vec<LatLng>> {
    (-60.0..60.0f64, -179.0..179.0f64).prop_flat_map(|(lat, lng)| {
        prop::collection::vec((-0.05..0.05f64, -0.05..0.05f64), 3..12).prop_map(move |offsets| {
            offsets
                .into_iter()
                .map(|(dlat, dlng)| LatLng::new(lat + dlat, lng + dlng))
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn reversed_ring_has_same_area(ring in field_ring()) {
        let forward = geodesic_area(&ring);
        let mut reversed = ring.clone();
        reversed.reverse();
        let backward = geodesic_area(&reversed);
        // Summation order differs, so allow rounding noise
        let tolerance = 1e-9 * forward.max(backward) + 1e-3;
        prop_assert!((forward - backward).abs() <= tolerance);
    }

    #[test]
    fn area_is_idempotent(ring in field_ring()) {
        prop_assert_eq!(geodesic_area(&ring).to_bits(), geodesic_area(&ring).to_bits());
    }

    #[test]
    fn area_is_never_negative_or_nan(ring in field_ring()) {
        let area = geodesic_area(&ring);
        prop_assert!(area.is_finite());
        prop_assert!(area >= 0.0);
    }

    #[test]
    fn short_rings_measure_zero(points in prop::collection::vec((-90.0..90.0f64, -180.0..180.0f64), 0..3)) {
        let ring: Vec<LatLng> = points.into_iter().map(|(lat, lng)| LatLng::new(lat, lng)).collect();
        prop_assert_eq!(geodesic_area(&ring), 0.0);
    }
}

#[test]
fn test_close_to_ellipsoidal_area_for_fields() {
    // 200 m squares from the equator to mid latitudes
    let side = (200.0 / EARTH_RADIUS_M).to_degrees();
    for lat in [0.0, 15.0, 30.0, 45.0] {
        let lng_side = side / f64::cos(f64::to_radians(lat));
        let ring = vec![
            LatLng::new(lat, 77.0),
            LatLng::new(lat, 77.0 + lng_side),
            LatLng::new(lat + side, 77.0 + lng_side),
            LatLng::new(lat + side, 77.0),
        ];
        let sphere = geodesic_area(&ring);
        let ellipsoid = ellipsoid_area(&ring);
        assert!(
            relative_diff(sphere, ellipsoid) < 0.01,
            "lat {lat}: sphere {sphere}, ellipsoid {ellipsoid}"
        );
    }
}

#[test]
fn test_irregular_field_matches_ellipsoid() {
    let ring = vec![
        LatLng::new(28.6130, 77.2080),
        LatLng::new(28.6128, 77.2102),
        LatLng::new(28.6145, 77.2110),
        LatLng::new(28.6152, 77.2095),
        LatLng::new(28.6141, 77.2083),
    ];
    let sphere = geodesic_area(&ring);
    let ellipsoid = ellipsoid_area(&ring);
    assert!(sphere > 0.0);
    assert!(relative_diff(sphere, ellipsoid) < 0.01);
}
