//! Error types for scene configuration.

use thiserror::Error;

/// Rejected configuration values.
///
/// Geometry itself never fails: degenerate rays resolve to a miss inside the
/// intersection routines. Only the parameters that set up a run are checked.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Grid has no cells to sample.
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    /// Cell count does not fit in `usize`.
    #[error("grid {width}x{height} has too many cells")]
    GridTooLarge { width: usize, height: usize },

    /// Sweep needs at least one frame to divide the circle by.
    #[error("frame count must be positive")]
    NoFrames,

    /// Cube edge length is zero, negative or not finite.
    #[error("cube size must be positive and finite, got {0}")]
    InvalidSize(f32),

    /// Spin would never complete a revolution.
    #[error("rotation speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),

    /// One revolution would take more frames than a `u32` counts.
    #[error("rotation speed {0} is too small to complete a revolution")]
    SpeedTooSmall(f32),

    /// Spin ray has no direction.
    #[error("ray direction must be non-zero")]
    ZeroDirection,
}

/// Result type for configuration checks.
pub type Result<T> = std::result::Result<T, ConfigError>;
