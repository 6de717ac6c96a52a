//! Opt-in validation for points and polygon rings.
//!
//! `Polygon` itself accepts any vertex list; these checks are for callers that
//! want to reject open rings or out-of-range coordinates before storing.

use crate::error::{PolygonError, Result};
use crate::types::{Point, Polygon};

/// Smallest closed ring: a triangle plus the repeated first vertex.
pub const MIN_RING_VERTICES: usize = 4;

/// Validates that both coordinates are finite.
pub fn validate_point(point: &Point) -> Result<()> {
    if !point.is_finite() {
        return Err(PolygonError::InvalidCoordinate(format!(
            "coordinates must be finite, got: ({}, {})",
            point.x(),
            point.y()
        )));
    }

    Ok(())
}

/// Validates a point has valid longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use spatio_polygon::compute::validation::validate_geographic_point;
/// use spatio_polygon::Point;
///
/// assert!(validate_geographic_point(&Point::new(-74.0060, 40.7128)).is_ok());
/// assert!(validate_geographic_point(&Point::new(200.0, 40.0)).is_err());
/// assert!(validate_geographic_point(&Point::new(-74.0, 95.0)).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    validate_point(point)?;

    let (x, y) = (point.x(), point.y());

    if !(-180.0..=180.0).contains(&x) {
        return Err(PolygonError::InvalidCoordinate(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(PolygonError::InvalidCoordinate(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates every vertex with [`validate_geographic_point`].
pub fn validate_geographic_polygon(polygon: &Polygon) -> Result<()> {
    for (idx, point) in polygon.iter().enumerate() {
        validate_geographic_point(point).map_err(|e| {
            PolygonError::InvalidCoordinate(format!("Point at index {}: {}", idx, e))
        })?;
    }
    Ok(())
}

/// Validates the polygon forms a closed ring of finite vertices.
///
/// Does not check for self-intersection or orientation.
///
/// # Examples
///
/// ```
/// use spatio_polygon::compute::validation::validate_ring;
/// use spatio_polygon::Polygon;
///
/// let closed = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
/// assert!(validate_ring(&closed).is_ok());
///
/// let open = Polygon::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
/// assert!(validate_ring(&open).is_err());
/// ```
pub fn validate_ring(polygon: &Polygon) -> Result<()> {
    if polygon.len() < MIN_RING_VERTICES {
        return Err(PolygonError::InvalidRing(format!(
            "ring needs at least {} vertices, got {}",
            MIN_RING_VERTICES,
            polygon.len()
        )));
    }

    for (idx, point) in polygon.iter().enumerate() {
        validate_point(point).map_err(|e| {
            PolygonError::InvalidRing(format!("Point at index {}: {}", idx, e))
        })?;
    }

    if !polygon.is_closed() {
        return Err(PolygonError::InvalidRing(
            "first and last vertices differ".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_geographic_point() {
        let nyc = Point::new(-74.0060, 40.7128);
        assert!(validate_geographic_point(&nyc).is_ok());

        // Edge cases
        assert!(validate_geographic_point(&Point::new(180.0, 0.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(-180.0, 0.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(0.0, 90.0)).is_ok());
        assert!(validate_geographic_point(&Point::new(0.0, -90.0)).is_ok());
    }

    #[test]
    fn test_invalid_geographic_point() {
        assert!(validate_geographic_point(&Point::new(180.1, 40.0)).is_err());
        assert!(validate_geographic_point(&Point::new(-200.0, 40.0)).is_err());
        assert!(validate_geographic_point(&Point::new(-74.0, 90.1)).is_err());
        assert!(validate_geographic_point(&Point::new(-74.0, -95.0)).is_err());
    }

    #[test]
    fn test_non_finite_coordinates() {
        assert!(validate_point(&Point::new(f64::NAN, 40.0)).is_err());
        assert!(validate_point(&Point::new(-74.0, f64::INFINITY)).is_err());
        assert!(validate_point(&Point::new(1e300, -1e300)).is_ok());
    }

    #[test]
    fn test_validate_geographic_polygon() {
        let polygon = Polygon::from_coords(&[(-74.0, 40.7), (-73.9, 40.8), (999.0, 40.0)]);
        let err = validate_geographic_polygon(&polygon).unwrap_err();
        assert!(err.to_string().contains("index 2"));
    }

    #[test]
    fn test_validate_ring() {
        let closed = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 0.0)]);
        assert!(validate_ring(&closed).is_ok());

        assert!(matches!(
            validate_ring(&Polygon::default()),
            Err(PolygonError::InvalidRing(_))
        ));

        let too_short = Polygon::from_coords(&[(0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        assert!(validate_ring(&too_short).is_err());

        let open = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
        assert!(validate_ring(&open).is_err());
        assert!(validate_ring(&open.closed()).is_ok());

        let nan = Polygon::from_coords(&[(0.0, 0.0), (f64::NAN, 0.0), (2.0, 2.0), (0.0, 0.0)]);
        assert!(validate_ring(&nan).is_err());
    }
}
