//! # aggvis - Aggregate Visualization
//!
//! Renderable geometry and companion charts for diffusion-limited-aggregation
//! (DLA) particle simulations.
//!
//! The simulation itself lives elsewhere; aggvis is the presentation core
//! that turns its particle events into GPU-facing buffers and plot-ready
//! data series:
//!
//! - each aggregated particle becomes a textured quad in an append-only mesh,
//! - particle colors accumulate into a radial gradient rasterized as the
//!   quad sprite texture,
//! - each run opens a chart series of aggregate radius against particle
//!   count.
//!
//! ## Quick Start
//!
//! ```ignore
//! use aggvis::prelude::*;
//!
//! let config = RunConfig::new()
//!     .with_particle_target(5000)
//!     .with_stickiness(0.8);
//! config.validate()?;
//!
//! let mut view = AggregateView::new();
//! let mut chart = RadiusChart::new();
//! chart.add_series(config.particle_target, config.stickiness);
//!
//! // Per simulation event:
//! view.add_particle(position, color, config.particle_size);
//! view.update()?;
//! chart.add_point(count, radius)?;
//!
//! // Per frame:
//! let model = view.model();
//! upload(model.mesh.vertices(), model.mesh.indices(), &model.sprite.data);
//! ```
//!
//! ## Core Concepts
//!
//! ### Scene
//!
//! [`AggregateScene`] (behind the [`AggregateView`] facade) owns a LIFO
//! particle store and the geometry buffers. `spawn_particle` records an
//! event; `update` applies the most recent particle, appending four vertices,
//! four texture coordinates and six indices, pushing the particle color into
//! the sprite gradient and re-rasterizing the sprite.
//!
//! ### Chart
//!
//! [`RadiusChart`] keeps one named series per run, labelled by particle
//! target and stickiness. Points go to the active series; [`axis_step`]
//! picks a readable tick spacing from the run's particle target.
//!
//! ### Threading
//!
//! Everything is single-threaded and synchronous. Mutators take `&mut self`;
//! confine a scene and its chart to one presentation loop.

pub mod chart;
pub mod config;
pub mod error;
pub mod mesh;
pub mod particle;
pub mod scene;
pub mod sprite;
pub mod view;

pub use bytemuck;
pub use chart::{axis_step, AxisLimits, RadiusChart, RadiusSample, RadiusSeries};
pub use config::{AttractorType, LatticeType, RunConfig};
pub use error::{ChartError, ConfigError, SceneError, VisError};
pub use glam::{Vec2, Vec3, Vec4};
pub use mesh::{MeshBuffers, Vertex, INDICES_PER_QUAD, VERTS_PER_QUAD};
pub use particle::{AggregateParticle, ParticleStore};
pub use scene::{AggregateScene, RenderModel};
pub use sprite::{rasterize, GradientStop, RadialGradient, SpriteTexture, DEFAULT_SPRITE_SIZE};
pub use view::AggregateView;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use aggvis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chart::{axis_step, AxisLimits, RadiusChart, RadiusSample, RadiusSeries};
    pub use crate::config::{AttractorType, LatticeType, RunConfig};
    pub use crate::error::{ChartError, ConfigError, SceneError, VisError};
    pub use crate::mesh::{MeshBuffers, Vertex};
    pub use crate::particle::{AggregateParticle, ParticleStore};
    pub use crate::scene::{AggregateScene, RenderModel};
    pub use crate::sprite::{rasterize, RadialGradient, SpriteTexture, DEFAULT_SPRITE_SIZE};
    pub use crate::view::AggregateView;
    pub use crate::{Vec2, Vec3, Vec4};
}
