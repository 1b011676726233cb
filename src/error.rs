//! Error types for aggvis.
//!
//! Both scene and chart errors are contract violations on the caller's side
//! (updating an empty scene, plotting into a chart with no open series), so
//! the enums are small and carry no retry semantics.

use std::fmt;

/// Errors from the aggregate scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError {
    /// A geometry update was requested with no particle in the store.
    EmptyStore,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::EmptyStore => {
                write!(f, "geometry update requested but no particle has been spawned")
            }
        }
    }
}

impl std::error::Error for SceneError {}

/// Errors from the radius chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// A data point was added before any series was opened.
    NoActiveSeries,
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::NoActiveSeries => {
                write!(f, "data point added but no series is open. Call add_series() first.")
            }
        }
    }
}

impl std::error::Error for ChartError {}

/// Errors from run configuration validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Stickiness coefficient outside the half-open interval (0, 1].
    Stickiness(f64),
    /// A run must target at least one particle.
    ZeroParticleTarget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Stickiness(k) => {
                write!(f, "stickiness coefficient {} is outside (0, 1]", k)
            }
            ConfigError::ZeroParticleTarget => {
                write!(f, "particle target must be non-zero")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Umbrella error for callers that drive scene, chart and config together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisError {
    /// Scene-side failure.
    Scene(SceneError),
    /// Chart-side failure.
    Chart(ChartError),
    /// Configuration rejected.
    Config(ConfigError),
}

impl fmt::Display for VisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisError::Scene(e) => write!(f, "scene error: {}", e),
            VisError::Chart(e) => write!(f, "chart error: {}", e),
            VisError::Config(e) => write!(f, "config error: {}", e),
        }
    }
}

impl std::error::Error for VisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VisError::Scene(e) => Some(e),
            VisError::Chart(e) => Some(e),
            VisError::Config(e) => Some(e),
        }
    }
}

impl From<SceneError> for VisError {
    fn from(e: SceneError) -> Self {
        VisError::Scene(e)
    }
}

impl From<ChartError> for VisError {
    fn from(e: ChartError) -> Self {
        VisError::Chart(e)
    }
}

impl From<ConfigError> for VisError {
    fn from(e: ConfigError) -> Self {
        VisError::Config(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let e: VisError = SceneError::EmptyStore.into();
        assert_eq!(e, VisError::Scene(SceneError::EmptyStore));

        let e: VisError = ChartError::NoActiveSeries.into();
        assert_eq!(e, VisError::Chart(ChartError::NoActiveSeries));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;
        let e: VisError = ConfigError::Stickiness(1.5).into();
        assert!(e.source().is_some());
    }
}
