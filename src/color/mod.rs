mod gamma;
mod palette;
mod preset;
mod utils;

use smart_leds::RGB8;

pub use gamma::{DEFAULT_GAMMA, DEFAULT_LEVELS, GammaLevels};
pub use palette::{GRADIENT_STEPS, MAX_PALETTE, Palette};
pub use preset::{BLUE_COLORS, FIRE_COLORS, PRIDE_COLORS, PalettePreset};
pub use utils::{Color, pack_rgb, rgb_from_u32};

pub type Rgb = RGB8;
