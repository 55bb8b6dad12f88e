//! Built-in palette anchors
//!
//! Presets are addressed by a stable numeric id (for compact remote
//! protocols) or by name.

use super::Color;

const PRESET_NAME_FIRE: &str = "fire";
const PRESET_NAME_BLUE: &str = "blue";
const PRESET_NAME_PRIDE: &str = "pride";

const PRESET_ID_FIRE: u8 = 0;
const PRESET_ID_BLUE: u8 = 1;
const PRESET_ID_PRIDE: u8 = 2;

/// Dark red through orange to bright yellow
pub const FIRE_COLORS: [Color; 8] = [
    Color::new(0.7, 0.2, 0.0), // Dark red
    Color::new(0.8, 0.3, 0.1), // Orange
    Color::new(0.8, 0.4, 0.1), // Orange
    Color::new(0.8, 0.6, 0.1), // Orange
    Color::new(1.0, 0.5, 0.0), // Orange
    Color::new(0.8, 0.6, 0.1), // Yellow
    Color::new(1.0, 0.6, 0.2), // Yellow
    Color::new(1.0, 0.8, 0.6), // Bright yellow
];

/// Gas flame blues
pub const BLUE_COLORS: [Color; 5] = [
    Color::new(0.2, 0.34, 0.83),
    Color::new(0.36, 0.52, 0.95),
    Color::new(0.5, 0.85, 0.98),
    Color::new(0.73, 0.97, 0.98),
    Color::new(0.9, 0.9, 1.0),
];

/// Rainbow flag stripes
pub const PRIDE_COLORS: [Color; 6] = [
    Color::new(0.52, 0.0, 0.49),
    Color::new(0.0, 0.0, 0.98),
    Color::new(0.0, 0.5, 0.09),
    Color::new(1.0, 1.0, 0.25),
    Color::new(1.0, 0.65, 0.17),
    Color::new(1.0, 0.0, 0.09),
];

/// Known palette presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PalettePreset {
    #[default]
    Fire = PRESET_ID_FIRE,
    Blue = PRESET_ID_BLUE,
    Pride = PRESET_ID_PRIDE,
}

impl PalettePreset {
    pub const ALL: [Self; 3] = [Self::Fire, Self::Blue, Self::Pride];

    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PRESET_ID_FIRE => Self::Fire,
            PRESET_ID_BLUE => Self::Blue,
            PRESET_ID_PRIDE => Self::Pride,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => PRESET_NAME_FIRE,
            Self::Blue => PRESET_NAME_BLUE,
            Self::Pride => PRESET_NAME_PRIDE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PRESET_NAME_FIRE => Some(Self::Fire),
            PRESET_NAME_BLUE => Some(Self::Blue),
            PRESET_NAME_PRIDE => Some(Self::Pride),
            _ => None,
        }
    }

    /// Anchor colors of the preset
    pub const fn anchors(self) -> &'static [Color] {
        match self {
            Self::Fire => &FIRE_COLORS,
            Self::Blue => &BLUE_COLORS,
            Self::Pride => &PRIDE_COLORS,
        }
    }
}
