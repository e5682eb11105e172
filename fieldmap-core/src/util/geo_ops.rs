use geo::{Distance, Geodesic, Point};
use uom::si::f64::Length;

/// builds a point from optional latitude and longitude values in degrees.
///
/// a coordinate that is missing, non-finite or outside the WGS-84 degree range
/// means the record has no location.
///
/// # Arguments
///
/// * `latitude` - WGS-84 latitude in degrees
/// * `longitude` - WGS-84 longitude in degrees
///
/// # Returns
///
/// * a point with x=longitude, y=latitude, or None
pub fn to_point(latitude: Option<f64>, longitude: Option<f64>) -> Option<Point<f64>> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) if is_valid_coordinate(lat, lon) => Some(Point::new(lon, lat)),
        _ => None,
    }
}

/// true if the coordinate pair lies within the valid range of WGS-84 degrees
pub fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude)
}

/// computes the distance along the surface of the WGS-84 ellipsoid between two
/// points using the Karney geodesic algorithm.
pub fn geodesic_distance(src: Point<f64>, dst: Point<f64>) -> Length {
    Length::new::<uom::si::length::meter>(Geodesic.distance(src, dst))
}

/// geodesic distance between two points, in miles
pub fn geodesic_distance_miles(src: Point<f64>, dst: Point<f64>) -> f64 {
    geodesic_distance(src, dst).get::<uom::si::length::mile>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_point_axis_order() {
        let p = to_point(Some(38.9), Some(-77.0)).expect("should have a location");
        assert_eq!(p.x(), -77.0);
        assert_eq!(p.y(), 38.9);
    }

    #[test]
    fn test_to_point_missing_or_nan() {
        assert!(to_point(None, Some(-77.0)).is_none());
        assert!(to_point(Some(38.9), None).is_none());
        assert!(to_point(Some(f64::NAN), Some(-77.0)).is_none());
        assert!(to_point(Some(38.9), Some(f64::INFINITY)).is_none());
    }

    #[test]
    fn test_to_point_out_of_range() {
        assert!(to_point(Some(95.0), Some(-77.0)).is_none());
        assert!(to_point(Some(38.9), Some(-181.0)).is_none());
        assert!(to_point(Some(-90.0), Some(180.0)).is_some());
    }

    #[test]
    fn test_coordinate_range() {
        assert!(is_valid_coordinate(38.9, -77.0));
        assert!(is_valid_coordinate(-90.0, 180.0));
        assert!(!is_valid_coordinate(91.0, 0.0));
        assert!(!is_valid_coordinate(0.0, -180.5));
    }

    #[test]
    fn test_same_point_is_zero() {
        let p = Point::new(-77.0, 38.9);
        assert!(geodesic_distance_miles(p, p).abs() < 1e-9);
    }

    #[test]
    fn test_known_distance_in_dc() {
        // 0.05 degrees of latitude and longitude near Washington, DC is roughly 4.4 miles
        let src = Point::new(-77.0, 38.9);
        let dst = Point::new(-77.05, 38.95);
        let miles = geodesic_distance_miles(src, dst);
        assert!(miles > 4.3 && miles < 4.45, "unexpected distance {miles}");
        // symmetric
        assert!((geodesic_distance_miles(dst, src) - miles).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude_at_equator() {
        // a meridian degree at the equator is 110.574 km on the WGS-84 ellipsoid
        let km = geodesic_distance(Point::new(0.0, 0.0), Point::new(0.0, 1.0))
            .get::<uom::si::length::kilometer>();
        assert!((km - 110.574).abs() < 0.01, "unexpected distance {km}");
    }
}
