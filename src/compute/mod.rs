//! Algorithms over polygon values.
//!
//! Everything here is a pure function of its inputs; the codecs and the
//! `Polygon` type never call into validation on their own.

pub mod containment;
pub mod validation;

pub use containment::{contains, contains_all};
