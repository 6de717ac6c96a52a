//! GeoJSON encoding for points and polygons.
//!
//! Polygons use a single flat ring, `{"type":"Polygon","coordinates":[[x,y],...]}`,
//! rather than GeoJSON's ring-of-rings, since holes are not supported.

use crate::error::Result;
use crate::types::{Point, Polygon};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Point {
    /// Non-finite coordinates have no JSON number form and are rejected.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if !self.is_finite() {
            return Err(S::Error::custom(format!(
                "cannot encode non-finite coordinate ({}, {})",
                self.x(),
                self.y()
            )));
        }
        (self.x(), self.y()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        <(f64, f64)>::deserialize(deserializer).map(Point::from)
    }
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum PolygonRef<'a> {
    Polygon { coordinates: &'a [Point] },
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum PolygonDocument {
    Polygon { coordinates: Vec<Point> },
}

impl Serialize for Polygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        PolygonRef::Polygon {
            coordinates: self.points(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Polygon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let PolygonDocument::Polygon { coordinates } = PolygonDocument::deserialize(deserializer)?;
        Ok(Polygon::new(coordinates))
    }
}

impl Polygon {
    /// Convert to a GeoJSON string.
    ///
    /// # Examples
    ///
    /// ```
    /// use spatio_polygon::Polygon;
    ///
    /// let polygon = Polygon::from_coords(&[(1.2, 3.4), (5.6, 7.8)]);
    /// assert_eq!(
    ///     polygon.to_geojson().unwrap(),
    ///     r#"{"type":"Polygon","coordinates":[[1.2,3.4],[5.6,7.8]]}"#
    /// );
    /// ```
    pub fn to_geojson(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a GeoJSON string.
    pub fn from_geojson(geojson: &str) -> Result<Self> {
        Ok(serde_json::from_str(geojson)?)
    }

    /// Replace this polygon's vertices with those in `geojson`.
    ///
    /// On error the current vertices are left untouched.
    pub fn decode_geojson(&mut self, geojson: &str) -> Result<()> {
        let decoded = Self::from_geojson(geojson).inspect_err(|e| {
            log::debug!("Rejecting GeoJSON polygon: {}", e);
        })?;
        *self = decoded;
        Ok(())
    }
}
