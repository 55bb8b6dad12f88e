//! Fire simulation
//!
//! Glues the heat field, palette and renderer into a single frame step.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::OutputDriver;
use crate::color::{Palette, Rgb};
use crate::config::FireConfig;
use crate::error::ConfigError;
use crate::heat::{HeatField, MAX_COOLING, MAX_SPARKING};
use crate::renderer::FrameRenderer;

/// Inputs of the heat simulation, read at the start of every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Chance out of 255 that a new spark is lit each frame.
    /// Higher is a more roaring fire, lower is more flickery.
    pub sparking: f32,
    /// How fast the air cools. Less cooling gives taller flames.
    pub cooling: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SimulationParameters {
    pub const DEFAULT: Self = Self {
        sparking: 200.0,
        cooling: 55.0,
    };

    /// Create parameters, clamping both values to their valid range
    pub fn new(sparking: f32, cooling: f32) -> Self {
        Self {
            sparking: clamp_or_zero(sparking, MAX_SPARKING),
            cooling: clamp_or_zero(cooling, MAX_COOLING),
        }
    }

    /// Derive parameters from an intensity percentage
    ///
    /// As intensity goes up, sparking rises to 255 and cooling drops to 0.
    pub fn from_intensity(intensity: u8) -> Self {
        let intensity = f32::from(intensity.min(100));
        Self {
            sparking: intensity / 100.0 * MAX_SPARKING,
            cooling: 100.0 - intensity,
        }
    }
}

fn clamp_or_zero(value: f32, max: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, max)
}

/// Stateful fire animation bound to an output driver
pub struct FireSimulation<D: OutputDriver, const MAX_LEDS: usize> {
    driver: D,
    heat: HeatField<MAX_LEDS>,
    palette: Palette,
    renderer: FrameRenderer<MAX_LEDS>,
    parameters: SimulationParameters,
    rng: SmallRng,
}

impl<D: OutputDriver, const MAX_LEDS: usize> FireSimulation<D, MAX_LEDS> {
    /// Create a simulation with a cold heat field
    ///
    /// Fails if the pixel count does not fit the buffers or the palette
    /// ends up empty.
    pub fn new(driver: D, config: &FireConfig<'_>) -> Result<Self, ConfigError> {
        let palette = Palette::build(config.palette, config.smoothing)?;
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let heat = HeatField::new(config.pixel_count)?;
        let renderer = FrameRenderer::new(config.pixel_count, config.gamma)?;

        log::debug!(
            "fire simulation: {} pixels, {} palette colors (smoothing: {})",
            config.pixel_count,
            palette.len(),
            config.smoothing
        );

        Ok(Self {
            driver,
            heat,
            palette,
            renderer,
            parameters: SimulationParameters::new(
                config.parameters.sparking,
                config.parameters.cooling,
            ),
            rng: SmallRng::seed_from_u64(config.seed),
        })
    }

    /// Advance the animation by one frame and show it
    pub fn step(&mut self) -> Result<(), D::Error> {
        self.heat.cool(self.parameters.cooling, &mut self.rng);
        self.heat.diffuse();
        self.heat.spark(self.parameters.sparking, &mut self.rng);

        self.renderer.render(self.heat.values(), &self.palette);
        self.renderer.flush(&mut self.driver)
    }

    /// Blank the display
    ///
    /// The heat field is left untouched, so the next `step` flares back up
    /// from the residual heat.
    pub fn reset(&mut self) -> Result<(), D::Error> {
        self.renderer.clear();
        self.renderer.flush(&mut self.driver)
    }

    pub const fn parameters(&self) -> SimulationParameters {
        self.parameters
    }

    pub fn set_parameters(&mut self, parameters: SimulationParameters) {
        self.parameters = SimulationParameters::new(parameters.sparking, parameters.cooling);
    }

    pub fn pixel_count(&self) -> usize {
        self.heat.len()
    }

    pub const fn heat(&self) -> &HeatField<MAX_LEDS> {
        &self.heat
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Last frame written to the back buffer
    pub fn frame(&self) -> &[Rgb] {
        self.renderer.frame()
    }

    pub const fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }
}
