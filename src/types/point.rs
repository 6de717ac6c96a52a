use std::fmt;

/// A planar point with longitude/latitude (x/y) coordinates.
///
/// Wraps `geo::Point` so it can be handed straight to `geo` algorithms.
/// Equality is exact floating-point equality.
///
/// # Examples
///
/// ```
/// use spatio_polygon::Point;
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// assert_eq!(nyc.x(), -74.0060);
/// assert_eq!(nyc.y(), 40.7128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    inner: geo::Point<f64>,
}

impl Point {
    /// Create a new point from x (longitude) and y (latitude) coordinates.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            inner: geo::Point::new(x, y),
        }
    }

    /// Get the x coordinate (longitude).
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x()
    }

    /// Get the y coordinate (latitude).
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y()
    }

    /// Get the longitude (alias for x).
    #[inline]
    pub fn lon(&self) -> f64 {
        self.x()
    }

    /// Get the latitude (alias for y).
    #[inline]
    pub fn lat(&self) -> f64 {
        self.y()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }

    /// Access the inner `geo::Point`.
    #[inline]
    pub fn inner(&self) -> &geo::Point<f64> {
        &self.inner
    }

    /// Convert into the inner `geo::Point`.
    #[inline]
    pub fn into_inner(self) -> geo::Point<f64> {
        self.inner
    }
}

impl fmt::Display for Point {
    /// Formats as a WKT coordinate pair, `X Y`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x(), self.y())
    }
}

impl From<geo::Point<f64>> for Point {
    fn from(point: geo::Point<f64>) -> Self {
        Self { inner: point }
    }
}

impl From<Point> for geo::Point<f64> {
    fn from(point: Point) -> Self {
        point.inner
    }
}

impl From<geo::Coord<f64>> for Point {
    fn from(coord: geo::Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Point> for geo::Coord<f64> {
    fn from(point: Point) -> Self {
        point.inner.0
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x(), point.y())
    }
}
