//! Run configuration for an aggregate visualization.
//!
//! Describes one simulation run from the view's perspective: how many
//! particles to expect, the stickiness coefficient, the billboard size and
//! the lattice/attractor geometry the run was generated on. The lattice and
//! attractor are carried as labelling metadata only; the simulation itself is
//! an external collaborator.

use crate::error::ConfigError;

/// Geometry of the simulation lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatticeType {
    /// Square lattice (default).
    #[default]
    Square,
    /// Triangular lattice.
    Triangle,
}

/// Geometry of the attractor seed the aggregate grows from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttractorType {
    /// Single point seed (default).
    #[default]
    Point,
    /// Line seed.
    Line,
    /// Plane seed.
    Plane,
}

/// Parameters of one simulation run.
///
/// Use method chaining to configure, then `validate()` before starting the
/// run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    /// Number of particles the run will generate.
    pub particle_target: u32,
    /// Probability that a colliding particle sticks, in (0, 1].
    pub stickiness: f64,
    /// Billboard side length used for every particle quad.
    pub particle_size: f32,
    /// Lattice geometry of the run.
    pub lattice: LatticeType,
    /// Attractor geometry of the run.
    pub attractor: AttractorType,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            particle_target: 1000,
            stickiness: 1.0,
            particle_size: 1.0,
            lattice: LatticeType::Square,
            attractor: AttractorType::Point,
        }
    }
}

impl RunConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of particles the run will generate.
    pub fn with_particle_target(mut self, target: u32) -> Self {
        self.particle_target = target;
        self
    }

    /// Set the stickiness coefficient.
    pub fn with_stickiness(mut self, stickiness: f64) -> Self {
        self.stickiness = stickiness;
        self
    }

    /// Set the billboard side length.
    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self
    }

    /// Set the lattice geometry.
    pub fn with_lattice(mut self, lattice: LatticeType) -> Self {
        self.lattice = lattice;
        self
    }

    /// Set the attractor geometry.
    pub fn with_attractor(mut self, attractor: AttractorType) -> Self {
        self.attractor = attractor;
        self
    }

    /// Check the run parameters.
    ///
    /// Stickiness must lie in (0, 1] and the particle target must be
    /// non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.stickiness > 0.0 && self.stickiness <= 1.0) {
            return Err(ConfigError::Stickiness(self.stickiness));
        }
        if self.particle_target == 0 {
            return Err(ConfigError::ZeroParticleTarget);
        }
        Ok(())
    }
}
