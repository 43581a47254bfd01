//! Latitude/longitude sampling of the dish surface and base-cap fan.

use std::f64::consts::{FRAC_PI_2, PI};

use trellis_math::{Point3, Vec2, Vec3};
use trellis_mesh::MeshBuffers;

use crate::{resolve, DishParams, ParameterError, ResolvedDish, Subdivision};

/// A vertex on the terminal latitude ring, kept for the base cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimVertex {
    /// Position after the base offset has been applied.
    pub position: Point3,
    /// Texture coordinate of the side-wall sample.
    pub tex_coord: Vec2,
}

/// Side list of the vertices on the terminal latitude ring.
///
/// Produced as a by-product of [`tessellate_side`], consumed only by
/// [`build_cap`], and recomputed on every rebuild, never persisted.
#[derive(Debug, Clone, Default)]
pub struct RimSnapshot {
    /// Rim vertices in longitude order, seam duplicate included.
    pub vertices: Vec<RimVertex>,
}

impl RimSnapshot {
    /// Number of rim vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if the rim holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Sample the side wall of the dish into `mesh`, returning the rim.
///
/// Latitude rings run from the apex toward the equator at uniform angular
/// steps, except the ring with index `seg_l`, which is forced to exactly
/// `clip_angle` and is always the last ring emitted. Each ring carries
/// `longitude_bands + 1` samples; the last duplicates the first so the
/// texture seam can wrap. Normals are the implicit-surface gradient
/// `(x/a², y/b², z/c²)` and are deliberately left unnormalized.
pub fn tessellate_side(
    resolved: &ResolvedDish,
    subdivision: Subdivision,
    mesh: &mut MeshBuffers,
) -> RimSnapshot {
    let ResolvedDish {
        a,
        b,
        c,
        offset,
        clip_angle,
        seg_l,
    } = *resolved;
    let lat_bands = subdivision.latitude_bands;
    let lon_bands = subdivision.longitude_bands;

    let mut rim = RimSnapshot::default();

    for lat in 0..=lat_bands {
        let theta = if lat == seg_l {
            clip_angle
        } else {
            lat as f64 * FRAC_PI_2 / lat_bands as f64
        };
        let (sin_theta, cos_theta) = theta.sin_cos();

        for lon in 0..=lon_bands {
            let phi = lon as f64 * 2.0 * PI / lon_bands as f64;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let x = a * (-cos_phi * sin_theta);
            let y = b * cos_theta;
            let z = c * (-sin_phi * sin_theta);

            let u = 0.25 - lon as f64 / lon_bands as f64;
            let v = lat as f64 / lat_bands as f64;

            // Implicit-surface gradient at the pre-offset sample.
            let normal = Vec3::new(x / (a * a), y / (b * b), z / (c * c));

            mesh.positions.push(x as f32);
            mesh.positions.push((y - offset) as f32);
            mesh.positions.push(z as f32);
            mesh.tex_coords.push(u as f32);
            mesh.tex_coords.push(v as f32);
            mesh.normals.push(normal.x as f32);
            mesh.normals.push(normal.y as f32);
            mesh.normals.push(normal.z as f32);

            if lat == lat_bands || lat == seg_l {
                rim.vertices.push(RimVertex {
                    position: Point3::new(x, y - offset, z),
                    tex_coord: Vec2::new(u, v),
                });
            }
        }

        if lat == seg_l {
            break;
        }
    }

    // Two triangles per quad between adjacent rings. The winding fixes the
    // outward face for the base-to-apex axis convention.
    for lat in 0..lat_bands {
        if lat == seg_l {
            break;
        }
        for lon in 0..lon_bands {
            let first = lat * (lon_bands + 1) + lon;
            let second = first + lon_bands + 1;
            mesh.indices.extend_from_slice(&[first + 1, second, first]);
            mesh.indices
                .extend_from_slice(&[first + 1, second + 1, second]);
        }
    }

    rim
}

/// Close the rim with a flat base cap appended to `mesh`.
///
/// Rim positions and texture coordinates are appended verbatim as new
/// vertices with a constant downward normal, then fanned from the first
/// appended vertex. The rim lies on one constant-latitude circle, so the
/// fan covers a planar convex polygon. A rim with fewer than 3 vertices
/// emits no triangles.
pub fn build_cap(rim: &RimSnapshot, mesh: &mut MeshBuffers) {
    let anchor = mesh.vertex_count() as u32;

    for (i, vert) in rim.vertices.iter().enumerate() {
        mesh.positions.push(vert.position.x as f32);
        mesh.positions.push(vert.position.y as f32);
        mesh.positions.push(vert.position.z as f32);
        mesh.tex_coords.push(vert.tex_coord.x as f32);
        mesh.tex_coords.push(vert.tex_coord.y as f32);
        mesh.normals.push(0.0);
        mesh.normals.push(-1.0);
        mesh.normals.push(0.0);

        if i >= 2 {
            let i = i as u32;
            mesh.indices.extend_from_slice(&[anchor, anchor + i - 1, anchor + i]);
        }
    }
}

/// Build the complete dish mesh for the given parameters.
///
/// Resolution is the only failure mode; on error nothing is built. The
/// returned buffers always satisfy [`MeshBuffers::validate`].
pub fn build_dish(params: &DishParams) -> Result<MeshBuffers, ParameterError> {
    let resolved = resolve(params)?;

    let mut mesh = MeshBuffers::new();
    let rim = tessellate_side(&resolved, params.subdivision, &mut mesh);
    if params.bottom {
        build_cap(&rim, &mut mesh);
    }

    Ok(mesh)
}
