//! Well-Known Text codec for single-ring polygons.
//!
//! The parser is strict at the head and lenient at the tail: input must start
//! with `POLYGON((`, every point must be exactly two numbers, but closing
//! parentheses after the last point are not counted. Values already stored in
//! databases rely on that leniency, so it is the default. Balanced closing can
//! be required through [`WktConfig::strict_tail`].
//!
//! ```
//! use spatio_polygon::{Point, wkt};
//!
//! let points = wkt::parse("POLYGON((1.2 3.4, 5.6 7.8)").unwrap();
//! assert_eq!(points, vec![Point::new(1.2, 3.4), Point::new(5.6, 7.8)]);
//! assert_eq!(wkt::render(&points), "POLYGON((1.2 3.4, 5.6 7.8))");
//! ```

use crate::config::WktConfig;
use crate::error::{PolygonError, Result};
use crate::types::Point;
use std::fmt;

/// Rendering of a polygon with no vertices.
pub const EMPTY: &str = "POLYGON EMPTY";

const PREFIX: &str = "POLYGON((";
const SUFFIX: &str = "))";

/// Longest slice of rejected input quoted back in error messages.
const MAX_QUOTED: usize = 64;

/// Parses WKT polygon text using the default (lenient) configuration.
pub fn parse(text: &str) -> Result<Vec<Point>> {
    parse_with(text, &WktConfig::default())
}

/// Parses WKT polygon text into its ordered vertices.
pub fn parse_with(text: &str, config: &WktConfig) -> Result<Vec<Point>> {
    let text = text.trim_end();

    if text == EMPTY {
        if config.accept_empty {
            return Ok(Vec::new());
        }
        log::debug!("Rejecting `{}` literal, empty polygons are disabled", EMPTY);
        return Err(PolygonError::InvalidWkt(format!(
            "`{}` is not accepted by this configuration",
            EMPTY
        )));
    }

    let Some(body) = text.strip_prefix(PREFIX) else {
        log::debug!("Rejecting WKT without `{}` prefix: {:?}", PREFIX, quoted(text));
        return Err(PolygonError::InvalidWkt(format!(
            "expected text starting with `{}`, got {:?}",
            PREFIX,
            quoted(text)
        )));
    };

    let body = if config.strict_tail {
        body.strip_suffix(SUFFIX).ok_or_else(|| {
            log::debug!("Rejecting WKT without closing `{}`: {:?}", SUFFIX, quoted(text));
            PolygonError::InvalidWkt(format!("expected text ending with `{}`", SUFFIX))
        })?
    } else {
        body.trim_end_matches(|c: char| c == ')' || c.is_whitespace())
    };

    if body.trim().is_empty() {
        return Err(PolygonError::InvalidCoordinate(
            "polygon must have at least one point".to_string(),
        ));
    }

    body.split(',')
        .enumerate()
        .map(|(index, pair)| parse_point(pair, index))
        .collect()
}

fn parse_point(pair: &str, index: usize) -> Result<Point> {
    let mut tokens = pair.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(
            parse_number(x, index)?,
            parse_number(y, index)?,
        )),
        _ => {
            log::debug!("Rejecting WKT point {}: {:?}", index, quoted(pair.trim()));
            Err(PolygonError::InvalidCoordinate(format!(
                "point {} must be two whitespace-separated numbers, got {:?}",
                index,
                quoted(pair.trim())
            )))
        }
    }
}

fn parse_number(token: &str, index: usize) -> Result<f64> {
    token.parse::<f64>().map_err(|e| {
        log::debug!("Rejecting WKT coordinate {:?} in point {}: {}", token, index, e);
        PolygonError::InvalidCoordinate(format!(
            "point {}: {:?} is not a number ({})",
            index,
            quoted(token),
            e
        ))
    })
}

fn quoted(text: &str) -> &str {
    match text.char_indices().nth(MAX_QUOTED) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Renders vertices as canonical WKT.
///
/// Empty input renders as `POLYGON EMPTY`. Coordinates use the shortest
/// decimal form that round-trips, so `parse(&render(points))` returns
/// `points` exactly.
pub fn render(points: &[Point]) -> String {
    Wkt(points).to_string()
}

/// `Display` adapter writing a vertex slice as WKT.
#[derive(Debug, Clone, Copy)]
pub struct Wkt<'a>(pub &'a [Point]);

impl fmt::Display for Wkt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.0.split_first() else {
            return f.write_str(EMPTY);
        };
        write!(f, "{}{}", PREFIX, first)?;
        for point in rest {
            write!(f, ", {}", point)?;
        }
        f.write_str(SUFFIX)
    }
}
