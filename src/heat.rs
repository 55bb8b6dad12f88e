//! Heat field of the fire simulation
//!
//! One heat value per pixel. Every frame the field is cooled, diffused to
//! its neighbours and occasionally ignited by a spark. The three steps must
//! run in that order since each one reads the result of the previous.

use heapless::Vec;
use rand::Rng;

use crate::error::ConfigError;

/// Smallest strip the diffusion kernel works on
pub const MIN_PIXELS: usize = 5;

/// Upper bound of the sparking weight (always ignite)
pub const MAX_SPARKING: f32 = 255.0;

/// Upper bound of the cooling rate
pub const MAX_COOLING: f32 = 100.0;

/// Smallest amount of heat added by a spark
pub const SPARK_HEAT_MIN: f32 = 160.0;

/// Largest amount of heat added by a spark
pub const SPARK_HEAT_MAX: f32 = 240.0;

/// Per-pixel heat values
///
/// The length is fixed at construction. `MAX_LEDS` is the buffer capacity.
#[derive(Debug, Clone)]
pub struct HeatField<const MAX_LEDS: usize> {
    heat: Vec<f32, MAX_LEDS>,
    /// Snapshot of `heat` taken at the start of `diffuse`
    scratch: Vec<f32, MAX_LEDS>,
}

impl<const MAX_LEDS: usize> HeatField<MAX_LEDS> {
    /// Create a cold field of `len` pixels
    pub fn new(len: usize) -> Result<Self, ConfigError> {
        check_len::<MAX_LEDS>(len)?;
        let mut heat = Vec::new();
        // capacity is checked above
        let _ = heat.resize(len, 0.0);
        Ok(Self {
            scratch: heat.clone(),
            heat,
        })
    }

    /// Create a field with the given initial heat
    pub fn from_values(values: &[f32]) -> Result<Self, ConfigError> {
        let mut field = Self::new(values.len())?;
        field.heat.copy_from_slice(values);
        Ok(field)
    }

    pub fn len(&self) -> usize {
        self.heat.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heat.is_empty()
    }

    pub fn values(&self) -> &[f32] {
        &self.heat
    }

    /// Hottest pixel of the field
    pub fn max_heat(&self) -> f32 {
        self.heat.iter().copied().fold(0.0, f32::max)
    }

    /// Cool down every cell a little
    ///
    /// Each pixel loses a uniform random amount in
    /// `0..=cooling * 10 / len + 2`, never dropping below zero.
    /// More cooling means shorter flames.
    pub fn cool<R: Rng>(&mut self, cooling: f32, rng: &mut R) {
        // f32::max drops NaN
        let cooling = cooling.max(0.0).min(MAX_COOLING);
        let max_drop = cooling * 10.0 / self.heat.len() as f32 + 2.0;
        for cell in &mut self.heat {
            let drop = rng.gen_range(0.0..=max_drop);
            *cell = (*cell - drop).max(0.0);
        }
    }

    /// Spread heat to the neighbours
    ///
    /// Every pixel becomes the average of the two pixels on each side of it,
    /// wrapping around the ends of the strip. All averages are taken from
    /// the field as it was before this call.
    pub fn diffuse(&mut self) {
        let len = self.heat.len();
        self.scratch.copy_from_slice(&self.heat);
        let before = &self.scratch;

        for (p, cell) in self.heat.iter_mut().enumerate() {
            let sum = before[(p + len - 2) % len]
                + before[(p + len - 1) % len]
                + before[(p + 1) % len]
                + before[(p + 2) % len];
            *cell = sum / 4.0;
        }
    }

    /// Randomly ignite a new spark
    ///
    /// With probability `sparking / 255` one random pixel gains between
    /// [`SPARK_HEAT_MIN`] and [`SPARK_HEAT_MAX`] heat. Returns the ignited
    /// pixel, if any.
    pub fn spark<R: Rng>(&mut self, sparking: f32, rng: &mut R) -> Option<usize> {
        let roll: f32 = rng.gen_range(0.0..MAX_SPARKING);
        if sparking.is_nan() || roll >= sparking {
            return None;
        }

        let index = rng.gen_range(0..self.heat.len());
        self.heat[index] += rng.gen_range(SPARK_HEAT_MIN..=SPARK_HEAT_MAX);
        Some(index)
    }
}

/// Validate a pixel count against the diffusion minimum and the capacity
pub(crate) fn check_len<const MAX_LEDS: usize>(len: usize) -> Result<(), ConfigError> {
    if len < MIN_PIXELS {
        return Err(ConfigError::TooFewPixels {
            requested: len,
            min: MIN_PIXELS,
        });
    }
    if len > MAX_LEDS {
        return Err(ConfigError::TooManyPixels {
            requested: len,
            capacity: MAX_LEDS,
        });
    }
    Ok(())
}
