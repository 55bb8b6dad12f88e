//! Palette construction and lookup
//!
//! A palette is built once from a list of anchor colors and never changes
//! afterwards. With smoothing enabled every consecutive pair of anchors is
//! expanded into a ten-color range.

use heapless::Vec;

use super::Color;
use crate::error::ConfigError;

/// Maximum number of colors a palette can hold
pub const MAX_PALETTE: usize = 160;

/// Number of colors generated for each pair of anchors when smoothing
pub const GRADIENT_STEPS: usize = 10;

/// Immutable ordered list of colors
#[derive(Debug, Clone, Default)]
pub struct Palette {
    colors: Vec<Color, MAX_PALETTE>,
}

impl Palette {
    /// Build a palette from anchors
    ///
    /// Empty or single-anchor input is not rejected here: it produces an
    /// empty (or one-color) palette that the caller has to deal with.
    pub fn build(anchors: &[Color], smoothing: bool) -> Result<Self, ConfigError> {
        if smoothing {
            Self::gradient(anchors)
        } else {
            Self::from_anchors(anchors)
        }
    }

    /// Use the anchors verbatim
    pub fn from_anchors(anchors: &[Color]) -> Result<Self, ConfigError> {
        let mut colors = Vec::new();
        colors
            .extend_from_slice(anchors)
            .map_err(|()| ConfigError::PaletteTooLarge {
                requested: anchors.len(),
                capacity: MAX_PALETTE,
            })?;
        Ok(Self { colors })
    }

    /// Expand each consecutive anchor pair into [`GRADIENT_STEPS`] colors
    ///
    /// Each range includes both of its ends. The last anchor only serves as
    /// the target of the final range.
    pub fn gradient(anchors: &[Color]) -> Result<Self, ConfigError> {
        let requested = anchors.len().saturating_sub(1) * GRADIENT_STEPS;
        let too_large = ConfigError::PaletteTooLarge {
            requested,
            capacity: MAX_PALETTE,
        };
        if requested > MAX_PALETTE {
            return Err(too_large);
        }

        let last_step = (GRADIENT_STEPS - 1) as f32;
        let mut colors = Vec::new();
        for pair in anchors.windows(2) {
            for step in 0..GRADIENT_STEPS {
                let color = pair[0].lerp(pair[1], step as f32 / last_step);
                colors.push(color).map_err(|_| too_large)?;
            }
        }
        Ok(Self { colors })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Sample the palette at a fractional position
    ///
    /// `0.0` is the first color and `1.0` the last; anything in between
    /// blends the two nearest entries. Positions outside `0.0..=1.0`
    /// saturate at the ends. An empty palette yields black.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lookup(&self, position: f32) -> Color {
        let Some(last) = self.colors.len().checked_sub(1) else {
            return Color::BLACK;
        };
        if last == 0 || position.is_nan() || position <= 0.0 {
            return self.colors[0];
        }

        let scaled = position * last as f32;
        if scaled >= last as f32 {
            return self.colors[last];
        }

        let index = scaled as usize;
        let amount = scaled - index as f32;
        self.colors[index].lerp(self.colors[index + 1], amount)
    }
}
