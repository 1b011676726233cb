//! Quad geometry buffers for aggregate rendering.
//!
//! Each particle becomes an axis-aligned quad (two triangles) at the
//! particle's depth, billboarding a radial sprite texture. The three buffer
//! sequences are parallel and append-only: four positions, four texture
//! coordinates and six indices per quad, cleared only as a unit.
//!
//! # Example
//!
//! ```ignore
//! let mut mesh = MeshBuffers::new();
//! mesh.push_quad(&particle);
//! let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices());
//! queue.write_buffer(&vertex_buffer, 0, bytes);
//! ```

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3};

use crate::particle::AggregateParticle;

/// Vertices appended per particle quad.
pub const VERTS_PER_QUAD: usize = 4;
/// Indices appended per particle quad (two triangles).
pub const INDICES_PER_QUAD: usize = 6;

/// Interleaved position + uv vertex for GPU upload.
///
/// Layout is `[x, y, z, u, v]`, 20 bytes, no padding.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// World-space position.
    pub position: [f32; 3],
    /// Texture coordinate into the sprite.
    pub uv: [f32; 2],
}

/// Append-only geometry buffers backing the renderable aggregate mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    positions: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    indices: Vec<u32>,
}

impl MeshBuffers {
    /// Create empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one particle quad.
    ///
    /// Corners are anchored at the particle position and extend by its size
    /// in +x/+y, staying in the plane of the particle's depth (2D-lattice
    /// mode). Indices are based at the vertex count before this append, so
    /// the first quad produces `[0, 2, 1, 0, 3, 2]`.
    pub fn push_quad(&mut self, particle: &AggregateParticle) {
        let base = self.positions.len() as u32;
        let p = particle.position;
        let s = particle.size;

        self.positions.push(p);
        self.positions.push(Vec3::new(p.x, p.y + s, p.z));
        self.positions.push(Vec3::new(p.x + s, p.y + s, p.z));
        self.positions.push(Vec3::new(p.x + s, p.y, p.z));

        self.tex_coords.push(Vec2::new(0.0, 0.0));
        self.tex_coords.push(Vec2::new(0.0, 1.0));
        self.tex_coords.push(Vec2::new(1.0, 1.0));
        self.tex_coords.push(Vec2::new(1.0, 0.0));

        self.indices.push(base);
        self.indices.push(base + 2);
        self.indices.push(base + 1);
        self.indices.push(base);
        self.indices.push(base + 3);
        self.indices.push(base + 2);
    }

    /// Empty all three sequences as a unit.
    ///
    /// Must run before a fresh aggregate reuses index 0.
    pub fn clear(&mut self) {
        self.positions.clear();
        self.tex_coords.clear();
        self.indices.clear();
    }

    /// Number of quads currently in the buffers.
    #[inline]
    pub fn quad_count(&self) -> usize {
        self.positions.len() / VERTS_PER_QUAD
    }

    /// Whether no quad has been appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions, four per quad.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Texture coordinates, parallel to `positions()`.
    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    /// Triangle indices, six per quad, always in-range for `positions()`.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Flatten the parallel buffers into interleaved vertices for upload.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.positions
            .iter()
            .zip(&self.tex_coords)
            .map(|(p, t)| Vertex {
                position: p.to_array(),
                uv: t.to_array(),
            })
            .collect()
    }
}
