//! Error types for polygon codecs and validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PolygonError>;

#[derive(Debug, Error)]
pub enum PolygonError {
    /// The database scalar handed to a scan was not a text value.
    #[error("Cannot scan polygon from {found} value, expected text")]
    TypeMismatch { found: &'static str },

    #[error("Invalid WKT polygon: {0}")]
    InvalidWkt(String),

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    /// Document did not have the `{"type":"Polygon","coordinates":[...]}` shape.
    #[error("Invalid GeoJSON polygon: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid ring: {0}")]
    InvalidRing(String),

    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),
}
