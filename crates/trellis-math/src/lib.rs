#![warn(missing_docs)]

//! Math types for the trellis geometry nodes.
//!
//! Thin wrappers around nalgebra providing the domain types used by the
//! mesh generators: points, vectors, and the tolerance constants that
//! decide when nearly-equal shape parameters collapse to a simpler case.

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A vector in 2D space (texture coordinates, subdivision counts).
pub type Vec2 = Vector2<f64>;

/// Tolerance constants for geometric comparisons.
///
/// Shape parameters arriving from declarative content are authored by hand
/// and frequently land "almost" on a special configuration (a radius almost
/// equal to half the diameter, a height almost equal to the radius). The
/// linear tolerance decides when such inputs are treated as exactly special.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in scene units.
    pub linear: f64,
}

impl Tolerance {
    /// Default scene tolerance (1e-6 scene units).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if two scalars are effectively equal.
    pub fn scalars_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }

    /// Check if two points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point3, b: &Point3) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
