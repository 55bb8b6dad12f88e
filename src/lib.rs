#![no_std]

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame_scheduler;
pub mod heat;
pub mod renderer;
pub mod simulation;

pub use config::FireConfig;
pub use controller::{
    ControlHandle, ControlState, LightController, PowerState, SharedControls, Tick,
};
pub use error::ConfigError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use heat::HeatField;
pub use renderer::FrameRenderer;
pub use simulation::{FireSimulation, SimulationParameters};

pub use color::{Color, GammaLevels, Palette, PalettePreset, Rgb};
pub use embassy_time::{Duration, Instant};

use core::fmt::Debug;

use smart_leds::SmartLedsWrite;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The fire simulation is generic over this trait.
pub trait OutputDriver {
    /// Error reported when a frame could not be shown
    type Error: Debug;

    /// Write a complete frame to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}

/// Adapter for any [`smart_leds`] driver
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = Rgb>,
    W::Error: Debug,
{
    type Error = W::Error;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(colors.iter().copied())
    }
}
