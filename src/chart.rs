//! Radius-versus-particle-count chart data.
//!
//! One series is opened per simulation run, labelled by the run's particle
//! target and stickiness coefficient. As the aggregate grows, the host
//! appends (particle number, aggregate radius) samples to the active series.
//! The chart holds plain data only; rendering belongs to whatever plotting
//! widget the host uses.
//!
//! # Example
//!
//! ```ignore
//! let mut chart = RadiusChart::new();
//! chart.add_series(5000, 0.8);
//! chart.add_point(1, 0.0)?;
//! chart.add_point(2, 1.0)?;
//! for series in chart.series() {
//!     plot_ui.line(Line::new(PlotPoints::from(series.points())));
//! }
//! ```

use tracing::{debug, trace};

use crate::error::ChartError;

/// One (particle number, aggregate radius) sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusSample {
    /// Number of particles in the aggregate when the sample was taken.
    pub particles: u32,
    /// Radius minimally bounding the aggregate at that point.
    pub radius: f64,
}

/// A named, ordered sample sequence for one simulation run.
#[derive(Debug, Clone)]
pub struct RadiusSeries {
    label: String,
    particle_target: u32,
    stickiness: f64,
    samples: Vec<RadiusSample>,
}

impl RadiusSeries {
    fn new(particle_target: u32, stickiness: f64) -> Self {
        Self {
            label: format!("{} particles, stickiness {}", particle_target, stickiness),
            particle_target,
            stickiness,
            samples: Vec::new(),
        }
    }

    /// Display label, built from the run parameters.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Particle target of the run this series belongs to.
    #[inline]
    pub fn particle_target(&self) -> u32 {
        self.particle_target
    }

    /// Stickiness coefficient of the run this series belongs to.
    #[inline]
    pub fn stickiness(&self) -> f64 {
        self.stickiness
    }

    /// The recorded samples, in append order.
    pub fn samples(&self) -> &[RadiusSample] {
        &self.samples
    }

    /// Number of recorded samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples as `[x, y]` pairs ready for a plotting widget.
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .map(|s| [s.particles as f64, s.radius])
            .collect()
    }
}

/// Chart of aggregate radius against particle count, one series per run.
///
/// At most one series is *active*; `add_point` always targets it. Mutations
/// raise a dirty flag the host polls once per frame via [`take_dirty`].
///
/// [`take_dirty`]: RadiusChart::take_dirty
#[derive(Debug, Clone, Default)]
pub struct RadiusChart {
    series: Vec<RadiusSeries>,
    active: Option<usize>,
    dirty: bool,
}

impl RadiusChart {
    /// Create a chart with no series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new series for a run and make it the active target.
    pub fn add_series(&mut self, particle_target: u32, stickiness: f64) {
        let series = RadiusSeries::new(particle_target, stickiness);
        debug!(label = %series.label(), "opened chart series");
        self.series.push(series);
        self.active = Some(self.series.len() - 1);
        self.dirty = true;
    }

    /// Append a sample to the active series.
    ///
    /// Fails with [`ChartError::NoActiveSeries`] if no series was opened
    /// since the last `clear_all`.
    pub fn add_point(&mut self, particles: u32, radius: f64) -> Result<(), ChartError> {
        let idx = self.active.ok_or(ChartError::NoActiveSeries)?;
        self.series[idx].samples.push(RadiusSample { particles, radius });
        self.dirty = true;
        trace!(particles, radius, "chart sample recorded");
        Ok(())
    }

    /// Drop every series and reset active-series tracking.
    pub fn clear_all(&mut self) {
        debug!(series = self.series.len(), "cleared all chart series");
        self.series.clear();
        self.active = None;
        self.dirty = true;
    }

    /// All series, in the order they were opened.
    pub fn series(&self) -> &[RadiusSeries] {
        &self.series
    }

    /// The series `add_point` currently targets, if any.
    pub fn active(&self) -> Option<&RadiusSeries> {
        self.active.map(|i| &self.series[i])
    }

    /// Whether the chart changed since the last poll. Clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// X-axis step for the single-series chart presentation.
///
/// A pure step function of the run's particle target; thresholds at 2500,
/// 5000 and 7500 keep the tick count readable as runs get longer.
pub fn axis_step(total_particles: u32) -> u32 {
    if total_particles < 2500 {
        100
    } else if total_particles < 5000 {
        200
    } else if total_particles < 7500 {
        300
    } else {
        400
    }
}

/// X-axis range for a run: zero through the particle target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLimits {
    /// Minimum x value, always zero.
    pub min: u32,
    /// Maximum x value, the run's particle target.
    pub max: u32,
}

impl AxisLimits {
    /// Limits for a run generating `total_particles` particles.
    pub fn for_target(total_particles: u32) -> Self {
        Self {
            min: 0,
            max: total_particles,
        }
    }
}
