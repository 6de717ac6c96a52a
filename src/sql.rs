//! Database scalar boundary.
//!
//! Spatial columns hand polygons over as WKT text. [`SqlValue`] mirrors the
//! scalar types a driver can return; only [`SqlValue::Text`] scans into a
//! [`Polygon`].
//!
//! ```
//! use spatio_polygon::{Polygon, SqlValue};
//!
//! let mut polygon = Polygon::default();
//! polygon.scan(&SqlValue::from("POLYGON((1.2 3.4, 5.6 7.8, 6.2 1.5, 1.2 3.4)"))?;
//! assert_eq!(polygon.len(), 4);
//! assert_eq!(polygon.value(), SqlValue::Text("POLYGON((1.2 3.4, 5.6 7.8, 6.2 1.5, 1.2 3.4))".into()));
//! # Ok::<(), spatio_polygon::PolygonError>(())
//! ```

use crate::config::WktConfig;
use crate::error::{PolygonError, Result};
use crate::types::Polygon;
use crate::wkt;

/// A column value as produced or consumed by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl SqlValue {
    /// Name of the scalar type, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Blob(_) => "blob",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for SqlValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for SqlValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Blob(bytes)
    }
}

impl Polygon {
    /// Replace this polygon's vertices with the WKT held in `value`.
    ///
    /// On error the current vertices are left untouched.
    pub fn scan(&mut self, value: &SqlValue) -> Result<()> {
        self.scan_with(value, &WktConfig::default())
    }

    pub fn scan_with(&mut self, value: &SqlValue, config: &WktConfig) -> Result<()> {
        let text = value.as_text().ok_or_else(|| {
            log::debug!("Rejecting {} scalar for polygon column", value.kind());
            PolygonError::TypeMismatch {
                found: value.kind(),
            }
        })?;
        let points = wkt::parse_with(text, config)?;
        log::trace!("Scanned polygon with {} vertices", points.len());
        self.replace(points);
        Ok(())
    }

    /// The scalar to store for this polygon; always WKT text.
    pub fn value(&self) -> SqlValue {
        SqlValue::Text(self.to_wkt())
    }
}

impl TryFrom<&SqlValue> for Polygon {
    type Error = PolygonError;

    fn try_from(value: &SqlValue) -> Result<Self> {
        let mut polygon = Polygon::default();
        polygon.scan(value)?;
        Ok(polygon)
    }
}

impl From<&Polygon> for SqlValue {
    fn from(polygon: &Polygon) -> Self {
        polygon.value()
    }
}
