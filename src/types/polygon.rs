use crate::compute::containment;
use crate::error::{PolygonError, Result};
use crate::types::Point;
use crate::wkt;
use std::fmt;
use std::str::FromStr;

/// A single-ring polygon stored as an ordered list of vertices.
///
/// The ring is not required to be closed and no minimum vertex count is
/// enforced; an empty polygon is legal. Use
/// [`validate_ring`](crate::compute::validation::validate_ring) to check
/// closure explicitly.
///
/// # Examples
///
/// ```
/// use spatio_polygon::{Point, Polygon};
///
/// let square = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)]);
/// assert!(square.contains(&Point::new(1.0, 1.0)));
/// assert_eq!(square.to_string(), "POLYGON((0 0, 2 0, 2 2, 0 2, 0 0))");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Create a polygon from raw `(x, y)` pairs.
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        coords.iter().copied().map(Point::from).collect()
    }

    /// Parse WKT text with a custom configuration.
    pub fn from_wkt_with(text: &str, config: &crate::config::WktConfig) -> Result<Self> {
        wkt::parse_with(text, config).map(Self::new)
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// True when the ring has at least one vertex and ends where it starts.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Returns a copy with the first vertex appended if the ring is open.
    pub fn closed(&self) -> Self {
        let mut points = self.points.clone();
        if !self.is_closed()
            && let Some(&first) = self.points.first()
        {
            points.push(first);
        }
        Self { points }
    }

    /// Replace all vertices.
    pub fn replace(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    /// Check whether a point lies inside the ring (even-odd rule).
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        containment::contains(self, point)
    }

    /// Render as canonical WKT; same as `to_string()`.
    pub fn to_wkt(&self) -> String {
        wkt::render(&self.points)
    }

    pub fn into_inner(self) -> Vec<Point> {
        self.points
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&wkt::Wkt(&self.points), f)
    }
}

impl FromStr for Polygon {
    type Err = PolygonError;

    fn from_str(text: &str) -> Result<Self> {
        wkt::parse(text).map(Self::new)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl From<geo::LineString<f64>> for Polygon {
    fn from(ring: geo::LineString<f64>) -> Self {
        ring.into_iter().map(Point::from).collect()
    }
}

impl TryFrom<geo::Polygon<f64>> for Polygon {
    type Error = PolygonError;

    /// Takes the exterior ring; polygons with holes are rejected.
    fn try_from(polygon: geo::Polygon<f64>) -> Result<Self> {
        if !polygon.interiors().is_empty() {
            return Err(PolygonError::UnsupportedGeometry(format!(
                "polygon has {} interior ring(s), holes are not supported",
                polygon.interiors().len()
            )));
        }
        let (exterior, _) = polygon.into_inner();
        Ok(Self::from(exterior))
    }
}

impl From<&Polygon> for geo::Polygon<f64> {
    /// Note that `geo::Polygon::new` closes the exterior ring.
    fn from(polygon: &Polygon) -> Self {
        let exterior: Vec<geo::Coord<f64>> =
            polygon.points.iter().copied().map(geo::Coord::from).collect();
        geo::Polygon::new(geo::LineString::from(exterior), vec![])
    }
}
