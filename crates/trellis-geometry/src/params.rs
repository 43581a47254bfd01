//! Declarative shape parameters for the dish node.

use serde::{Deserialize, Serialize};

use crate::ParameterError;

/// Tessellation density as latitude/longitude band counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subdivision {
    /// Number of latitude bands between the apex and the equator.
    pub latitude_bands: u32,
    /// Number of longitude bands around the revolution axis.
    pub longitude_bands: u32,
}

impl Subdivision {
    /// Create a subdivision from band counts.
    pub fn new(latitude_bands: u32, longitude_bands: u32) -> Self {
        Self {
            latitude_bands,
            longitude_bands,
        }
    }
}

impl Default for Subdivision {
    fn default() -> Self {
        Self::new(24, 24)
    }
}

/// Shape parameters of a dish geometry node.
///
/// A dish is the upper section of an ellipsoid of revolution sitting on the
/// y = 0 plane. `diameter` fixes the two equal semi-axes in the base plane,
/// `radius` the semi-axis along the revolution axis, and `height` how much
/// of the surface (measured up from the base) is kept. Defaults match the
/// declarative content defaults: a capped unit hemisphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DishParams {
    /// Diameter of the base circle. Must be positive.
    pub diameter: f64,
    /// Maximum height of the dished surface above the base. Values larger
    /// than the effective radius are clamped to it.
    pub height: f64,
    /// Semi-axis along the revolution axis. `0`, or anything within
    /// tolerance of `diameter / 2`, selects the spherical section. The
    /// default of `0` keeps the radius following the diameter.
    pub radius: f64,
    /// Whether to close the surface with a flat base cap.
    pub bottom: bool,
    /// Tessellation density.
    pub subdivision: Subdivision,
}

impl Default for DishParams {
    fn default() -> Self {
        Self {
            diameter: 2.0,
            height: 1.0,
            radius: 0.0,
            bottom: true,
            subdivision: Subdivision::default(),
        }
    }
}

impl DishParams {
    /// Check the parameters against the valid-surface rules.
    ///
    /// Numeric edge cases (radius equal to half the diameter, height equal
    /// to the radius) are valid configurations handled downstream by
    /// clamping, not rejected here.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (field, value) in [
            ("diameter", self.diameter),
            ("height", self.height),
            ("radius", self.radius),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::non_finite(field, value));
            }
        }
        if self.diameter <= 0.0 {
            return Err(ParameterError::non_positive("diameter", self.diameter));
        }
        if self.height <= 0.0 {
            return Err(ParameterError::non_positive("height", self.height));
        }
        if self.radius < 0.0 {
            return Err(ParameterError::NegativeRadius(self.radius));
        }
        if self.subdivision.latitude_bands == 0 {
            return Err(ParameterError::EmptySubdivision { axis: "latitude" });
        }
        if self.subdivision.longitude_bands == 0 {
            return Err(ParameterError::EmptySubdivision { axis: "longitude" });
        }
        Ok(())
    }

    /// Serialize to a JSON string (the declarative document form).
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from a JSON string. Absent fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
