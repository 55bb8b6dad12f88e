use crate::color::{Color, GammaLevels, PalettePreset};
use crate::simulation::SimulationParameters;

/// Pixel count used when none is configured
pub const DEFAULT_PIXEL_COUNT: usize = 120;

/// Intensity (percent) the controller starts with
pub const DEFAULT_INTENSITY: u8 = 40;

/// Configuration for the fire simulation
#[derive(Debug, Clone)]
pub struct FireConfig<'a> {
    /// Number of pixels on the strip
    pub pixel_count: usize,
    /// Sparking and cooling until the first intensity change
    pub parameters: SimulationParameters,
    /// Palette anchor colors
    pub palette: &'a [Color],
    /// Expand the anchors into a gradient
    pub smoothing: bool,
    /// Gamma curve and color balance
    pub gamma: GammaLevels,
    /// Intensity reported by the controller before any change
    pub intensity: u8,
    /// Seed of the simulation's random generator
    pub seed: u64,
}

impl Default for FireConfig<'_> {
    fn default() -> Self {
        Self::new(DEFAULT_PIXEL_COUNT)
    }
}

impl<'a> FireConfig<'a> {
    /// Default fire look for a strip of `pixel_count` pixels
    pub const fn new(pixel_count: usize) -> Self {
        Self {
            pixel_count,
            parameters: SimulationParameters::DEFAULT,
            palette: PalettePreset::Fire.anchors(),
            smoothing: false,
            gamma: GammaLevels::DEFAULT,
            intensity: DEFAULT_INTENSITY,
            seed: 0,
        }
    }

    #[must_use]
    pub const fn with_palette(mut self, palette: &'a [Color]) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub const fn with_preset(self, preset: PalettePreset) -> Self {
        self.with_palette(preset.anchors())
    }

    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    #[must_use]
    pub const fn with_gamma(mut self, gamma: GammaLevels) -> Self {
        self.gamma = gamma;
        self
    }

    #[must_use]
    pub const fn with_parameters(mut self, parameters: SimulationParameters) -> Self {
        self.parameters = parameters;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
