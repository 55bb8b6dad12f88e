//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/yielding between frames.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::controller::{LightController, Tick};

/// Default frame duration: no pacing, render as fast as the display allows.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(0);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// What the controller did this frame (`None` if the frame was dropped).
    pub tick: Option<Tick>,
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Runs one controller tick per frame
/// - Tracks frame timing with drift correction
/// - Survives failed frames, counting them as dropped
/// - Stops scheduling once the controller has shut down
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(controller);
///
/// while let Some(result) = scheduler.tick(Instant::from_millis(now_ms())) {
///     // Platform-specific sleep or yield
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, D: OutputDriver, const MAX_LEDS: usize> {
    controller: LightController<'a, D, MAX_LEDS>,
    next_frame: Instant,
    frame_duration: Duration,
    dropped_frames: u32,
}

impl<'a, D: OutputDriver, const MAX_LEDS: usize> FrameScheduler<'a, D, MAX_LEDS> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (unpaced) for frame timing.
    pub fn new(controller: LightController<'a, D, MAX_LEDS>) -> Self {
        Self::with_frame_duration(controller, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        controller: LightController<'a, D, MAX_LEDS>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            controller,
            next_frame: Instant::from_millis(0),
            frame_duration,
            dropped_frames: 0,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// Returns `None` once the controller has shut down, either before or
    /// during this tick. No further frames should be scheduled after that.
    ///
    /// A frame whose output failed is logged and counted; the schedule
    /// continues with the next one.
    pub fn tick(&mut self, now: Instant) -> Option<FrameResult> {
        if self.controller.is_halted() {
            return None;
        }

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = Duration::from_millis(self.frame_duration.as_millis() * 2);
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let tick = match self.controller.tick() {
            Ok(Tick::Halted) => return None,
            Ok(tick) => Some(tick),
            Err(err) => {
                self.dropped_frames = self.dropped_frames.saturating_add(1);
                log::warn!("dropped frame {}: {:?}", self.dropped_frames, err);
                None
            }
        };
        // A stop observed during a failed tick still ends the schedule
        if self.controller.is_halted() {
            return None;
        }

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame > now {
            self.next_frame.duration_since(now)
        } else {
            Duration::from_millis(0)
        };

        Some(FrameResult {
            tick,
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Run frames until the controller shuts down.
    ///
    /// `clock` supplies the current time and `sleep` is called once after
    /// every frame; it is where the host sleeps or yields to other work.
    pub fn run<C, S>(&mut self, mut clock: C, mut sleep: S)
    where
        C: FnMut() -> Instant,
        S: FnMut(Duration),
    {
        while let Some(result) = self.tick(clock()) {
            sleep(result.sleep_duration);
        }
    }

    /// Shut the controller down, leaving the display blank.
    ///
    /// Subsequent ticks return `None`.
    pub fn stop(&mut self) {
        if let Err(err) = self.controller.shutdown() {
            log::warn!("failed to blank display on stop: {:?}", err);
        }
    }

    /// Number of frames whose output failed so far.
    pub const fn dropped_frames(&self) -> u32 {
        self.dropped_frames
    }

    /// Get a reference to the controller.
    pub const fn controller(&self) -> &LightController<'a, D, MAX_LEDS> {
        &self.controller
    }

    /// Get a mutable reference to the controller.
    pub fn controller_mut(&mut self) -> &mut LightController<'a, D, MAX_LEDS> {
        &mut self.controller
    }
}
