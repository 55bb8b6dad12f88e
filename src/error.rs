//! Configuration errors
//!
//! Everything here is raised while building a simulation. Once a simulation
//! exists, frames can only fail at the output driver.

use core::fmt;

/// Rejected simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Diffusion reads two neighbours on each side, so the strip needs at
    /// least `min` pixels.
    TooFewPixels { requested: usize, min: usize },
    /// More pixels than the compile-time buffer capacity
    TooManyPixels { requested: usize, capacity: usize },
    /// The palette has no colors to look up
    EmptyPalette,
    /// The (possibly smoothed) palette does not fit into its buffer
    PaletteTooLarge { requested: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewPixels { requested, min } => {
                write!(f, "pixel count {requested} is below the minimum of {min}")
            }
            Self::TooManyPixels {
                requested,
                capacity,
            } => write!(f, "pixel count {requested} exceeds capacity {capacity}"),
            Self::EmptyPalette => f.write_str("palette has no colors"),
            Self::PaletteTooLarge {
                requested,
                capacity,
            } => write!(f, "palette of {requested} colors exceeds capacity {capacity}"),
        }
    }
}

impl core::error::Error for ConfigError {}
