//! Particle records and the spawn stack.
//!
//! The simulation reports each aggregated particle exactly once; the store
//! keeps them in spawn order with constant-time access to the most recent one,
//! which is the only particle the geometry pass ever reads.

use glam::{Vec3, Vec4};

use crate::error::SceneError;

/// A single aggregated particle as reported by the simulation.
///
/// Immutable after spawn: the store owns it, and the geometry pass reads it
/// by copy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateParticle {
    /// Lattice position of the particle.
    pub position: Vec3,
    /// Particle color (RGBA, each channel 0.0-1.0).
    pub color: Vec4,
    /// Side length of the particle's billboard quad.
    pub size: f32,
}

/// Last-in-first-out store of spawned particles.
///
/// Append-only between clears. `latest()` is the explicit "most recent"
/// accessor; no other iteration order is promised.
#[derive(Debug, Clone, Default)]
pub struct ParticleStore {
    particles: Vec<AggregateParticle>,
}

impl ParticleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new particle with the given properties.
    pub fn spawn(&mut self, position: Vec3, color: Vec4, size: f32) {
        self.particles.push(AggregateParticle {
            position,
            color,
            size,
        });
    }

    /// The most recently spawned particle.
    ///
    /// Fails with [`SceneError::EmptyStore`] if nothing has been spawned
    /// since the last clear.
    pub fn latest(&self) -> Result<&AggregateParticle, SceneError> {
        self.particles.last().ok_or(SceneError::EmptyStore)
    }

    /// Drop every particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Number of particles currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the store holds no particles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_on_empty_store() {
        let store = ParticleStore::new();
        assert_eq!(store.latest(), Err(SceneError::EmptyStore));
    }

    #[test]
    fn test_latest_returns_most_recent_unchanged() {
        let mut store = ParticleStore::new();
        for i in 0..10 {
            let pos = Vec3::new(i as f32, 0.0, 0.0);
            store.spawn(pos, Vec4::ONE, 1.0);
            let latest = store.latest().unwrap();
            assert_eq!(latest.position, pos);
            assert_eq!(latest.color, Vec4::ONE);
            assert_eq!(latest.size, 1.0);
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn test_clear_empties_store() {
        let mut store = ParticleStore::new();
        store.spawn(Vec3::ZERO, Vec4::ONE, 1.0);
        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.latest(), Err(SceneError::EmptyStore));
    }
}
