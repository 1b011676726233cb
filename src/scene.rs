//! The aggregate scene: particle events in, renderable model out.
//!
//! [`AggregateScene`] owns the particle store, the quad geometry buffers and
//! the sprite material. The host drives it with one `spawn_particle` +
//! `update` pair per simulation event and hands [`RenderModel`] to its
//! scene-graph each frame.

use glam::{Vec3, Vec4};
use tracing::{debug, trace};

use crate::error::SceneError;
use crate::mesh::MeshBuffers;
use crate::particle::ParticleStore;
use crate::sprite::{rasterize, RadialGradient, SpriteTexture, DEFAULT_SPRITE_SIZE};

/// Borrowed view of everything a scene-graph host needs to draw the
/// aggregate: the quad mesh and its sprite material.
#[derive(Debug, Clone, Copy)]
pub struct RenderModel<'a> {
    /// Quad geometry, four vertices and six indices per particle.
    pub mesh: &'a MeshBuffers,
    /// Diffuse sprite texture rasterized from the per-particle gradient.
    pub sprite: &'a SpriteTexture,
}

/// View state for a single diffusion-limited aggregate.
///
/// Single-threaded by design: every mutator takes `&mut self`, so one
/// presentation loop owns the scene exclusively.
#[derive(Debug, Clone)]
pub struct AggregateScene {
    store: ParticleStore,
    mesh: MeshBuffers,
    gradient: RadialGradient,
    sprite: SpriteTexture,
    sprite_size: u32,
    dirty: bool,
}

impl AggregateScene {
    /// Create an empty scene with the default 32x32 sprite.
    pub fn new() -> Self {
        Self::with_sprite_size(DEFAULT_SPRITE_SIZE)
    }

    /// Create an empty scene rasterizing its sprite at `sprite_size` pixels.
    pub fn with_sprite_size(sprite_size: u32) -> Self {
        let gradient = RadialGradient::new();
        let sprite = rasterize(&gradient, sprite_size);
        Self {
            store: ParticleStore::new(),
            mesh: MeshBuffers::new(),
            gradient,
            sprite,
            sprite_size,
            dirty: false,
        }
    }

    /// Push a new particle with the given properties onto the store.
    ///
    /// Geometry is untouched until the matching [`update`] call.
    ///
    /// [`update`]: AggregateScene::update
    pub fn spawn_particle(&mut self, position: Vec3, color: Vec4, size: f32) {
        self.store.spawn(position, color, size);
    }

    /// Apply the most recently spawned particle to the renderable state.
    ///
    /// Appends the particle's quad to the mesh, pushes its color as a
    /// gradient stop at the sprite center and re-rasterizes the sprite.
    /// Fails with [`SceneError::EmptyStore`] if nothing has been spawned.
    pub fn update(&mut self) -> Result<(), SceneError> {
        let particle = *self.store.latest()?;
        self.mesh.push_quad(&particle);
        self.gradient.push_stop(particle.color, 0.0);
        self.sprite = rasterize(&self.gradient, self.sprite_size);
        self.dirty = true;
        trace!(
            quads = self.mesh.quad_count(),
            stops = self.gradient.len(),
            "applied particle to aggregate view"
        );
        Ok(())
    }

    /// Clear the whole view: particles, geometry, gradient and sprite.
    ///
    /// After this, the next `update` starts numbering vertices at index 0.
    pub fn clear(&mut self) {
        debug!(particles = self.store.len(), "clearing aggregate scene");
        self.store.clear();
        self.mesh.clear();
        self.gradient.clear();
        self.sprite = rasterize(&self.gradient, self.sprite_size);
        self.dirty = true;
    }

    /// The renderable model for the current frame.
    pub fn model(&self) -> RenderModel<'_> {
        RenderModel {
            mesh: &self.mesh,
            sprite: &self.sprite,
        }
    }

    /// Number of particles spawned since the last clear.
    #[inline]
    pub fn particle_count(&self) -> usize {
        self.store.len()
    }

    /// The quad geometry buffers.
    pub fn mesh(&self) -> &MeshBuffers {
        &self.mesh
    }

    /// The current sprite texture.
    pub fn sprite(&self) -> &SpriteTexture {
        &self.sprite
    }

    /// The accumulated gradient backing the sprite.
    pub fn gradient(&self) -> &RadialGradient {
        &self.gradient
    }

    /// Whether the renderable state changed since the last poll. Clears the
    /// flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl Default for AggregateScene {
    fn default() -> Self {
        Self::new()
    }
}
