#![warn(missing_docs)]

//! Parametric dish surface tessellation for trellis geometry nodes.
//!
//! A dish is a section of an ellipsoid of revolution: the surface between
//! the apex and a chosen latitude, optionally closed by a flat base cap.
//! This crate turns declarative shape parameters into the triangle mesh a
//! geometry node publishes:
//!
//! 1. [`resolve`] normalizes raw [`DishParams`] into the semi-axes, base
//!    offset, and clip angle used for sampling.
//! 2. [`tessellate_side`] samples the surface on a latitude/longitude grid,
//!    emitting side-wall vertices and indices plus a [`RimSnapshot`] of the
//!    terminal ring.
//! 3. [`build_cap`] closes the rim with a triangle fan when the base is
//!    requested.
//!
//! [`build_dish`] runs the full pipeline and is the only entry point the
//! scene layer needs.

use thiserror::Error;

mod params;
mod resolve;
mod tessellate;

pub use params::{DishParams, Subdivision};
pub use resolve::{resolve, ResolvedDish};
pub use tessellate::{build_cap, build_dish, tessellate_side, RimSnapshot, RimVertex};

/// Errors raised when shape parameters cannot describe a valid surface.
///
/// This is the only failure mode of the generator: every trigonometric
/// input downstream of [`resolve`] is range-guaranteed by construction.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    /// A numeric field is NaN or infinite.
    #[error("dish {field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A field that must be strictly positive is zero or negative.
    #[error("dish {field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The radius semi-axis is negative (zero is valid and selects the sphere case).
    #[error("dish radius must not be negative, got {0}")]
    NegativeRadius(f64),

    /// A subdivision axis has zero bands.
    #[error("dish subdivision must have at least one {axis} band")]
    EmptySubdivision {
        /// The subdivision axis with zero bands.
        axis: &'static str,
    },
}

impl ParameterError {
    /// Create a non-finite field error.
    pub fn non_finite(field: &'static str, value: f64) -> Self {
        Self::NonFinite { field, value }
    }

    /// Create a non-positive field error.
    pub fn non_positive(field: &'static str, value: f64) -> Self {
        Self::NonPositive { field, value }
    }
}
