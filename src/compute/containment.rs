//! Point-in-polygon tests using even-odd ray casting.

use crate::types::{Point, Polygon};
use geo::{Coord, Line};

/// Check whether `point` lies inside `polygon`.
///
/// Casts a ray from the point towards +x and counts edge crossings. The ring
/// is treated as closed, so the edge from the last vertex back to the first
/// is always considered. Polygons with fewer than three vertices contain
/// nothing. Points exactly on an edge get whatever the crossing rule yields.
///
/// # Examples
///
/// ```
/// use spatio_polygon::compute::containment::contains;
/// use spatio_polygon::{Point, Polygon};
///
/// let square = Polygon::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0)]);
/// assert!(contains(&square, &Point::new(1.0, 1.0)));
/// assert!(!contains(&square, &Point::new(4.0, 1.0)));
/// ```
pub fn contains(polygon: &Polygon, point: &Point) -> bool {
    let vertices = polygon.points();
    if vertices.len() < 3 {
        return false;
    }

    let (px, py) = (point.x(), point.y());
    let mut inside = false;
    for Line { start, end } in edges(vertices) {
        // Exactly one endpoint above the ray; skips horizontal edges.
        if (start.y > py) != (end.y > py) {
            let crossing = start.x + (py - start.y) * (end.x - start.x) / (end.y - start.y);
            if px < crossing {
                inside = !inside;
            }
        }
    }
    inside
}

/// Check that every point lies inside `polygon`.
pub fn contains_all<'a>(polygon: &Polygon, points: impl IntoIterator<Item = &'a Point>) -> bool {
    points.into_iter().all(|point| contains(polygon, point))
}

/// Edges of the ring, including the closing edge from the last vertex to the first.
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = Line<f64>> + '_ {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&start, &end)| Line::new(Coord::from(start), Coord::from(end)))
}
