use super::Rgb;

/// Floating point RGB color, every channel in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Linear blend towards `other`
    ///
    /// # Arguments
    /// * `other` - Target color
    /// * `amount` - Blend factor (0.0 = all self, 1.0 = all other)
    #[inline]
    pub fn lerp(self, other: Self, amount: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * amount,
            g: self.g + (other.g - self.g) * amount,
            b: self.b + (other.b - self.b) * amount,
        }
    }

    /// Pack into the strip's native 8-bit color
    ///
    /// Channels are clamped to `0.0..=1.0` before scaling.
    pub fn to_rgb(self) -> Rgb {
        Rgb {
            r: denormalize(self.r),
            g: denormalize(self.g),
            b: denormalize(self.b),
        }
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn denormalize(value: f32) -> u8 {
    // NaN saturates to zero on the cast
    libm::roundf(value.clamp(0.0, 1.0) * 255.0) as u8
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn pack_rgb(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
