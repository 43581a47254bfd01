//! Normalization of raw shape parameters into sampling quantities.

use std::f64::consts::FRAC_PI_2;

use trellis_math::Tolerance;

use crate::{DishParams, ParameterError};

/// Geometric quantities derived from [`DishParams`], ready for sampling.
///
/// The surface is the ellipsoid `(x/a)² + (y/b)² + (z/c)² = 1` shifted down
/// by `offset` so its lowest sampled point lands on the y = 0 plane, sampled
/// from the apex down to `clip_angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedDish {
    /// Semi-axis along x (half the base diameter).
    pub a: f64,
    /// Semi-axis along y (the effective radius of revolution).
    pub b: f64,
    /// Semi-axis along z (half the base diameter).
    pub c: f64,
    /// Vertical shift placing the surface base at y = 0.
    pub offset: f64,
    /// Polar angle at which sampling stops. `π/2` means a full section
    /// down to the equator, smaller values a shallower cap.
    pub clip_angle: f64,
    /// Index of the last sampled latitude ring. When it does not land on a
    /// uniform step, that ring is forced to exactly `clip_angle`.
    pub seg_l: u32,
}

/// Normalize shape parameters into the quantities used for sampling.
///
/// A radius of `0`, or within tolerance of `diameter / 2`, selects the
/// spherical section; the height is clamped to the effective radius so the
/// section never exceeds a full hemisphere. Invalid parameters are the only
/// failure mode; every trig input below is range-guaranteed.
pub fn resolve(params: &DishParams) -> Result<ResolvedDish, ParameterError> {
    params.validate()?;

    let half_dia = params.diameter / 2.0;
    let tol = Tolerance::DEFAULT;

    // Near-spherical input collapses to exactly spherical, avoiding
    // degenerate trig next to the singular configuration.
    let r = if params.radius == 0.0 || tol.scalars_equal(half_dia, params.radius) {
        half_dia
    } else {
        params.radius
    };

    let h = params.height.min(r);
    let offset = r - h;
    let clip_angle = FRAC_PI_2 - (1.0 - h / r).asin();

    let latitude_bands = params.subdivision.latitude_bands;
    // With nothing cut away the clip ring is the natural equator; the
    // rounded formula below can land one step past it.
    let seg_l = if offset == 0.0 {
        latitude_bands
    } else {
        (latitude_bands as f64 / FRAC_PI_2 * clip_angle).ceil() as u32
    };

    Ok(ResolvedDish {
        a: half_dia,
        b: r,
        c: half_dia,
        offset,
        clip_angle,
        seg_l,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Subdivision;
    use approx::assert_relative_eq;

    #[test]
    fn test_full_hemisphere_has_no_clipping() {
        let resolved = resolve(&DishParams::default()).unwrap();
        assert_eq!(resolved.a, 1.0);
        assert_eq!(resolved.b, 1.0);
        assert_eq!(resolved.c, 1.0);
        assert_eq!(resolved.offset, 0.0);
        assert_relative_eq!(resolved.clip_angle, FRAC_PI_2);
        assert_eq!(resolved.seg_l, 24);
    }

    #[test]
    fn test_zero_radius_matches_half_diameter_radius() {
        let explicit = resolve(&DishParams {
            radius: 1.0,
            ..DishParams::default()
        })
        .unwrap();
        let implied = resolve(&DishParams {
            radius: 0.0,
            ..DishParams::default()
        })
        .unwrap();
        assert_eq!(explicit, implied);
    }

    #[test]
    fn test_near_spherical_radius_collapses_to_sphere() {
        let resolved = resolve(&DishParams {
            radius: 1.0 + 1e-8,
            ..DishParams::default()
        })
        .unwrap();
        assert_eq!(resolved.b, 1.0);
    }

    #[test]
    fn test_height_clamped_to_radius() {
        let resolved = resolve(&DishParams {
            height: 5.0,
            ..DishParams::default()
        })
        .unwrap();
        assert_eq!(resolved.offset, 0.0);
        assert_relative_eq!(resolved.clip_angle, FRAC_PI_2);
    }

    #[test]
    fn test_shallow_section_clips_early() {
        let resolved = resolve(&DishParams {
            height: 0.25,
            bottom: false,
            ..DishParams::default()
        })
        .unwrap();
        assert_eq!(resolved.offset, 0.75);
        assert_relative_eq!(resolved.clip_angle, FRAC_PI_2 - 0.75_f64.asin());
        assert!(resolved.seg_l < 24);
        // The forced ring sits at the clip angle: cos(clip) * b == offset.
        assert_relative_eq!(
            resolved.b * resolved.clip_angle.cos(),
            resolved.offset,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_general_ellipsoid_keeps_given_radius() {
        let resolved = resolve(&DishParams {
            diameter: 4.0,
            radius: 1.5,
            height: 1.5,
            ..DishParams::default()
        })
        .unwrap();
        assert_eq!(resolved.a, 2.0);
        assert_eq!(resolved.b, 1.5);
        assert_eq!(resolved.c, 2.0);
        assert_eq!(resolved.offset, 0.0);
    }

    #[test]
    fn test_invalid_parameters_are_rejected() {
        let err = resolve(&DishParams {
            diameter: -1.0,
            ..DishParams::default()
        });
        assert_eq!(err, Err(ParameterError::non_positive("diameter", -1.0)));
    }

    #[test]
    fn test_seg_l_scales_with_latitude_bands() {
        let shallow = |lat: u32| {
            resolve(&DishParams {
                height: 0.25,
                subdivision: Subdivision::new(lat, 24),
                ..DishParams::default()
            })
            .unwrap()
            .seg_l
        };
        // ceil(lat / (π/2) * clip_angle) with clip_angle ≈ 0.7227 rad.
        assert_eq!(shallow(24), 12);
        assert_eq!(shallow(4), 2);
        assert_eq!(shallow(1), 1);
    }
}
