//! Host-facing facade over the aggregate scene.
//!
//! Pure delegation, mirroring the management surface a UI layer binds to:
//! add a particle, apply it, clear the aggregate, fetch the model.

use glam::{Vec3, Vec4};

use crate::error::SceneError;
use crate::scene::{AggregateScene, RenderModel};

/// Thin manager over [`AggregateScene`] with no state of its own.
#[derive(Debug, Clone, Default)]
pub struct AggregateView {
    scene: AggregateScene,
}

impl AggregateView {
    /// Create a view over a fresh scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a particle to the aggregate view with the given properties.
    pub fn add_particle(&mut self, position: Vec3, color: Vec4, size: f32) {
        self.scene.spawn_particle(position, color, size);
    }

    /// Apply the most recently added particle to the renderable state.
    pub fn update(&mut self) -> Result<(), SceneError> {
        self.scene.update()
    }

    /// Clear the aggregate view.
    pub fn clear_aggregate(&mut self) {
        self.scene.clear();
    }

    /// The renderable model of the aggregate.
    pub fn model(&self) -> RenderModel<'_> {
        self.scene.model()
    }

    /// The underlying scene, for hosts that need finer-grained access.
    pub fn scene(&self) -> &AggregateScene {
        &self.scene
    }

    /// Mutable access to the underlying scene.
    pub fn scene_mut(&mut self) -> &mut AggregateScene {
        &mut self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_forwards_to_scene() {
        let mut view = AggregateView::new();
        view.add_particle(Vec3::ZERO, Vec4::ONE, 1.0);
        view.update().unwrap();
        assert_eq!(view.model().mesh.quad_count(), 1);

        view.clear_aggregate();
        assert!(view.model().mesh.is_empty());
        assert_eq!(view.update(), Err(SceneError::EmptyStore));
    }
}
