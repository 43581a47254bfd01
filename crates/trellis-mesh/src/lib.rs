#![warn(missing_docs)]

//! Triangle mesh buffers for trellis geometry nodes.
//!
//! A geometry node owns exactly one [`MeshBuffers`] value (its single
//! geometry slot) and replaces the contents wholesale on every rebuild.
//! Renderers receive read-only borrows and must re-read after the owning
//! node signals a change; they never hold a view across a rebuild.

use thiserror::Error;

/// Structural defects a [`MeshBuffers`] can report from [`MeshBuffers::validate`].
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// The index buffer length is not a multiple of 3.
    #[error("indices are not a triangle list (len {0} is not a multiple of 3)")]
    NotTriangleList(usize),

    /// An index refers past the end of the vertex buffers.
    #[error("index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds {
        /// The offending index value.
        index: u32,
        /// Number of vertices in the position buffer.
        vertex_count: usize,
    },

    /// A vertex attribute contains a NaN or infinite component.
    #[error("vertex buffers contain a non-finite component")]
    NonFiniteVertex,

    /// Attribute buffers disagree on the vertex count.
    #[error("attribute buffers disagree: {positions} positions, {normals} normals, {tex_coords} texture coordinates")]
    AttributeMismatch {
        /// Vertex count implied by the position buffer.
        positions: usize,
        /// Vertex count implied by the normal buffer.
        normals: usize,
        /// Vertex count implied by the texture coordinate buffer.
        tex_coords: usize,
    },
}

/// Output triangle mesh for rendering.
///
/// Four parallel flat buffers: positions and normals use 3 components per
/// vertex, texture coordinates 2, and `indices` is a pure triangle list.
/// Normals are published exactly as the generator emitted them and are not
/// guaranteed to be unit length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeshBuffers {
    /// Flat array of vertex positions: `[x0, y0, z0, x1, y1, z1, ...]`.
    pub positions: Vec<f32>,
    /// Flat array of vertex normals: `[nx0, ny0, nz0, ...]`. Same vertex count as `positions`.
    pub normals: Vec<f32>,
    /// Flat array of texture coordinates: `[u0, v0, u1, v1, ...]`.
    pub tex_coords: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// True if no vertices have been emitted.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Clear all four buffers, keeping their allocations.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.normals.clear();
        self.tex_coords.clear();
        self.indices.clear();
    }

    /// Merge another mesh into this one, offsetting its indices.
    pub fn merge(&mut self, other: &MeshBuffers) {
        let offset = self.vertex_count() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.tex_coords.extend_from_slice(&other.tex_coords);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }

    /// True if the index buffer length is a multiple of 3.
    pub fn has_triangle_indices(&self) -> bool {
        self.indices.len() % 3 == 0
    }

    /// True if every index is within the vertex buffers.
    pub fn has_valid_indices(&self) -> bool {
        let n = self.vertex_count() as u32;
        self.indices.iter().all(|&i| i < n)
    }

    /// True if any vertex attribute contains NaN or Inf components.
    pub fn has_non_finite_vertices(&self) -> bool {
        self.positions.iter().any(|c| !c.is_finite())
            || self.normals.iter().any(|c| !c.is_finite())
            || self.tex_coords.iter().any(|c| !c.is_finite())
    }

    /// True if all attribute buffers agree on the vertex count.
    pub fn has_consistent_attributes(&self) -> bool {
        let n = self.vertex_count();
        self.normals.len() == n * 3 && self.tex_coords.len() == n * 2
    }

    /// Check every structural invariant, returning the first violation found.
    pub fn validate(&self) -> Result<(), MeshError> {
        if !self.has_triangle_indices() {
            return Err(MeshError::NotTriangleList(self.indices.len()));
        }
        if !self.has_consistent_attributes() {
            return Err(MeshError::AttributeMismatch {
                positions: self.positions.len() / 3,
                normals: self.normals.len() / 3,
                tex_coords: self.tex_coords.len() / 2,
            });
        }
        if self.has_non_finite_vertices() {
            return Err(MeshError::NonFiniteVertex);
        }
        let n = self.vertex_count();
        if let Some(&bad) = self.indices.iter().find(|&&i| i as usize >= n) {
            return Err(MeshError::IndexOutOfBounds {
                index: bad,
                vertex_count: n,
            });
        }
        Ok(())
    }
}
