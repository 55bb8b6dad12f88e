//! Gamma and per-channel brightness curve
//!
//! Applied to every pixel after palette lookup and before packing.

use super::Color;

/// Default exponent of the gamma curve
pub const DEFAULT_GAMMA: f32 = 2.7;

/// Default color balance for warm flames (red, green, blue)
pub const DEFAULT_LEVELS: [f32; 3] = [0.9, 0.8, 0.15];

/// Fixed gamma curve with per-channel brightness multipliers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaLevels {
    /// Brightness multipliers for red, green and blue
    pub levels: [f32; 3],
    /// Gamma exponent
    pub gamma: f32,
}

impl Default for GammaLevels {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl GammaLevels {
    pub const DEFAULT: Self = Self::new(DEFAULT_LEVELS);

    /// Levels with the default gamma exponent
    pub const fn new(levels: [f32; 3]) -> Self {
        Self {
            levels,
            gamma: DEFAULT_GAMMA,
        }
    }

    #[must_use]
    pub const fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Apply `channel ^ gamma * level` to every channel
    pub fn apply(&self, color: Color) -> Color {
        let [r, g, b] = self.levels;
        Color {
            r: self.adjust(color.r) * r,
            g: self.adjust(color.g) * g,
            b: self.adjust(color.b) * b,
        }
    }

    #[inline]
    fn adjust(&self, channel: f32) -> f32 {
        libm::powf(channel.max(0.0), self.gamma)
    }
}
