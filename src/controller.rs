//! Power and intensity control
//!
//! The external actor (remote protocol handler, UI, ...) writes to a
//! [`SharedControls`] block through a [`ControlHandle`]. The frame loop owns
//! the [`LightController`], which reads one snapshot of the block at the
//! start of every tick. Access is guarded by `critical-section`, so the
//! handle can be used from another thread or an interrupt.

use core::cell::Cell;

use critical_section::Mutex;

use crate::OutputDriver;
use crate::config::{DEFAULT_INTENSITY, FireConfig};
use crate::simulation::{FireSimulation, SimulationParameters};

/// Highest intensity percentage
pub const MAX_INTENSITY: u8 = 100;

/// Power state of the light
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PowerState {
    #[default]
    Off,
    On,
}

impl From<bool> for PowerState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

/// Snapshot of everything the external actor can set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    pub power: PowerState,
    /// Intensity percentage (0-100)
    pub intensity: u8,
    /// Simulation parameters derived from the last intensity change
    pub parameters: SimulationParameters,
    /// Bumped on every intensity change
    pub revision: u32,
    /// Set once the loop has been asked to stop
    pub stopped: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new(SimulationParameters::DEFAULT, DEFAULT_INTENSITY)
    }
}

impl ControlState {
    /// Powered off state with the given starting values
    pub const fn new(parameters: SimulationParameters, intensity: u8) -> Self {
        Self {
            power: PowerState::Off,
            intensity,
            parameters,
            revision: 0,
            stopped: false,
        }
    }
}

/// Control block shared between the external actor and the frame loop
pub struct SharedControls {
    inner: Mutex<Cell<ControlState>>,
}

impl Default for SharedControls {
    fn default() -> Self {
        Self::new(ControlState::new(
            SimulationParameters::DEFAULT,
            DEFAULT_INTENSITY,
        ))
    }
}

impl SharedControls {
    /// Create a control block, usable in a `static`
    pub const fn new(initial: ControlState) -> Self {
        Self {
            inner: Mutex::new(Cell::new(initial)),
        }
    }

    /// Control block seeded from the simulation configuration
    pub fn from_config(config: &FireConfig<'_>) -> Self {
        Self::new(ControlState::new(
            config.parameters,
            config.intensity.min(MAX_INTENSITY),
        ))
    }

    /// Get a handle for the external actor
    pub const fn handle(&self) -> ControlHandle<'_> {
        ControlHandle { controls: self }
    }

    /// Read the current state
    pub fn snapshot(&self) -> ControlState {
        critical_section::with(|cs| self.inner.borrow(cs).get())
    }

    /// Modify the state and return the result
    fn update(&self, apply: impl FnOnce(&mut ControlState)) -> ControlState {
        critical_section::with(|cs| {
            let cell = self.inner.borrow(cs);
            let mut state = cell.get();
            apply(&mut state);
            cell.set(state);
            state
        })
    }
}

/// Handle used by the external actor to control the light
///
/// This is a lightweight reference that can be copied and passed around.
#[derive(Clone, Copy)]
pub struct ControlHandle<'a> {
    controls: &'a SharedControls,
}

impl ControlHandle<'_> {
    /// Turn the light on or off, effective on the next tick
    pub fn set_power(&self, on: bool) {
        let state = self.controls.update(|state| state.power = on.into());
        log::info!("setting power to {:?}", state.power);
    }

    /// Set the intensity percentage, effective on the next tick
    ///
    /// Values outside `0..=100` are clamped. The intensity drives the
    /// simulation: sparking goes up and cooling goes down as it rises.
    pub fn set_intensity(&self, intensity: i32) {
        let intensity = u8::try_from(intensity.clamp(0, i32::from(MAX_INTENSITY)))
            .unwrap_or(MAX_INTENSITY);
        let parameters = SimulationParameters::from_intensity(intensity);
        self.controls.update(|state| {
            state.intensity = intensity;
            state.parameters = parameters;
            state.revision = state.revision.wrapping_add(1);
        });
        log::info!(
            "setting intensity to {} (sparking: {}, cooling: {})",
            intensity,
            parameters.sparking,
            parameters.cooling
        );
    }

    /// Ask the frame loop to blank the display and stop
    pub fn stop(&self) {
        self.controls.update(|state| {
            state.power = PowerState::Off;
            state.stopped = true;
        });
        log::info!("stop requested");
    }

    pub fn state(&self) -> ControlState {
        self.controls.snapshot()
    }
}

/// What a controller tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The light is on and a new frame was shown
    Rendered,
    /// The light is off and the display was blanked
    Blanked,
    /// The controller has shut down; nothing was done
    Halted,
}

/// On/off state machine driving a fire simulation
pub struct LightController<'a, D: OutputDriver, const MAX_LEDS: usize> {
    controls: &'a SharedControls,
    simulation: FireSimulation<D, MAX_LEDS>,
    /// Revision of the control parameters last applied to the simulation
    applied_revision: u32,
    halted: bool,
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize> LightController<'a, D, MAX_LEDS> {
    pub const fn new(controls: &'a SharedControls, simulation: FireSimulation<D, MAX_LEDS>) -> Self {
        Self {
            controls,
            simulation,
            applied_revision: 0,
            halted: false,
        }
    }

    /// Advance one tick
    ///
    /// Renders a frame while on and blanks the display while off. The
    /// simulation keeps its configured parameters until the first intensity
    /// change reaches the control block. If a stop
    /// was requested the controller shuts down instead and every later tick
    /// returns [`Tick::Halted`].
    pub fn tick(&mut self) -> Result<Tick, D::Error> {
        if self.halted {
            return Ok(Tick::Halted);
        }

        let state = self.controls.snapshot();
        if state.stopped {
            self.shutdown()?;
            return Ok(Tick::Halted);
        }

        if state.revision != self.applied_revision {
            self.applied_revision = state.revision;
            self.simulation.set_parameters(state.parameters);
        }
        match state.power {
            PowerState::On => {
                self.simulation.step()?;
                Ok(Tick::Rendered)
            }
            PowerState::Off => {
                self.simulation.reset()?;
                Ok(Tick::Blanked)
            }
        }
    }

    /// Turn the light off, blank the display and stop ticking
    ///
    /// Safe to call any number of times; every call leaves the display blank.
    pub fn shutdown(&mut self) -> Result<(), D::Error> {
        if !self.halted {
            self.halted = true;
            log::info!("shutting down, blanking display");
        }
        self.controls.update(|state| {
            state.power = PowerState::Off;
            state.stopped = true;
        });
        self.simulation.reset()
    }

    pub const fn is_halted(&self) -> bool {
        self.halted
    }

    pub const fn handle(&self) -> ControlHandle<'a> {
        self.controls.handle()
    }

    pub fn state(&self) -> ControlState {
        self.controls.snapshot()
    }

    pub const fn simulation(&self) -> &FireSimulation<D, MAX_LEDS> {
        &self.simulation
    }

    pub fn simulation_mut(&mut self) -> &mut FireSimulation<D, MAX_LEDS> {
        &mut self.simulation
    }
}
