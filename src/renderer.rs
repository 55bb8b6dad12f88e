//! Heat to color mapping
//!
//! The renderer owns the back buffer. Pixels are written into it one by one
//! and only become visible once the whole buffer is flushed to the driver.

use heapless::Vec;

use crate::OutputDriver;
use crate::color::{GammaLevels, Palette, Rgb};
use crate::error::ConfigError;
use crate::heat::check_len;

/// Heat value that maps to the end of the palette
///
/// Sparks may push heat past this point; the palette lookup saturates.
pub const HEAT_SCALE: f32 = 240.0;

/// Double-buffered frame renderer
#[derive(Debug, Clone)]
pub struct FrameRenderer<const MAX_LEDS: usize> {
    frame: Vec<Rgb, MAX_LEDS>,
    gamma: GammaLevels,
}

impl<const MAX_LEDS: usize> FrameRenderer<MAX_LEDS> {
    /// Create a renderer with an all-off buffer of `len` pixels
    pub fn new(len: usize, gamma: GammaLevels) -> Result<Self, ConfigError> {
        check_len::<MAX_LEDS>(len)?;
        let mut frame = Vec::new();
        // capacity is checked above
        let _ = frame.resize(len, Rgb::default());
        Ok(Self { frame, gamma })
    }

    /// Color of a single heat value
    pub fn color_for(&self, heat: f32, palette: &Palette) -> Rgb {
        shade(heat, palette, &self.gamma)
    }

    /// Write a color into the back buffer
    ///
    /// Out of range indices are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(slot) = self.frame.get_mut(index) {
            *slot = color;
        }
    }

    /// Render a whole heat field into the back buffer
    pub fn render(&mut self, heat: &[f32], palette: &Palette) {
        for (slot, &value) in self.frame.iter_mut().zip(heat) {
            *slot = shade(value, palette, &self.gamma);
        }
    }

    /// Turn every pixel of the back buffer off
    pub fn clear(&mut self) {
        self.frame.fill(Rgb::default());
    }

    /// Publish the back buffer to the display in one write
    pub fn flush<D: OutputDriver>(&self, driver: &mut D) -> Result<(), D::Error> {
        driver.write(&self.frame)
    }

    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub const fn gamma(&self) -> GammaLevels {
        self.gamma
    }
}

#[inline]
fn shade(heat: f32, palette: &Palette, gamma: &GammaLevels) -> Rgb {
    gamma.apply(palette.lookup(heat / HEAT_SCALE)).to_rgb()
}
