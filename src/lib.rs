//! Polygon value type for spatial database columns and GeoJSON documents.
//!
//! A [`Polygon`] is an ordered ring of [`Point`]s. It scans from and renders
//! to WKT database scalars, encodes to GeoJSON, and answers point-in-polygon
//! queries.
//!
//! ```rust
//! use spatio_polygon::{Point, Polygon, SqlValue};
//!
//! let mut area = Polygon::default();
//! area.scan(&SqlValue::from("POLYGON((0 0, 2 0, 2 2, 0 2, 0 0))"))?;
//!
//! assert!(area.contains(&Point::new(1.0, 1.0)));
//! assert!(!area.contains(&Point::new(4.0, 1.0)));
//! assert_eq!(area.value(), SqlValue::Text("POLYGON((0 0, 2 0, 2 2, 0 2, 0 0))".into()));
//! # Ok::<(), spatio_polygon::PolygonError>(())
//! ```

pub mod compute;
pub mod config;
pub mod error;
#[cfg(feature = "geojson")]
pub mod geojson;
pub mod sql;
pub mod types;
pub mod wkt;

pub use config::WktConfig;
pub use error::{PolygonError, Result};
pub use sql::SqlValue;
pub use types::{Point, Polygon};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{Point, Polygon, PolygonError, Result, SqlValue, WktConfig};

    pub use crate::compute::containment::{contains, contains_all};

    pub use crate::compute::validation::{validate_geographic_polygon, validate_ring};
}
