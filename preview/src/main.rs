//! Desktop preview app for the hearth fire simulation
//!
//! Renders the simulated LED strip in a window with interactive controls.
//! The UI plays the role of the remote control: every change goes through
//! a `ControlHandle`, exactly like a network command handler would.

use std::convert::Infallible;
use std::time::Instant as StdInstant;

use eframe::egui::{self};
use hearth::config::DEFAULT_INTENSITY;
use hearth::heat::MIN_PIXELS;
use hearth::{
    ConfigError, ControlHandle, ControlState, FireConfig, FireSimulation, FrameScheduler,
    Instant, LightController, OutputDriver, PalettePreset, Rgb, SharedControls,
    SimulationParameters,
};

/// Maximum number of LEDs the simulation supports
const MAX_LEDS: usize = 300;

/// Default number of LEDs in the simulated strip
const DEFAULT_LED_COUNT: usize = 120;

/// Size of each LED rectangle in pixels
const LED_SIZE: f32 = 12.0;

/// Gap between LEDs
const LED_GAP: f32 = 2.0;

/// Control block shared between the UI and the frame loop
static CONTROLS: SharedControls = SharedControls::new(ControlState::new(
    SimulationParameters::DEFAULT,
    DEFAULT_INTENSITY,
));

/// Output driver that keeps the last flushed frame for painting
#[derive(Default)]
struct PreviewOutput {
    frame: Vec<Rgb>,
}

impl OutputDriver for PreviewOutput {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.frame.clear();
        self.frame.extend_from_slice(colors);
        Ok(())
    }
}

type PreviewScheduler = FrameScheduler<'static, PreviewOutput, MAX_LEDS>;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 400.0])
            .with_title("Hearth Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "hearth-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    /// Frame loop driving the simulation
    scheduler: PreviewScheduler,
    /// Handle used for every control change
    controls: ControlHandle<'static>,

    // UI state (tracked to detect changes)
    /// Light is on
    power: bool,
    /// Intensity percentage
    intensity: i32,
    /// Selected palette
    preset: PalettePreset,
    /// Gradient palette
    smoothing: bool,
    /// Number of LEDs to simulate
    led_count: usize,
    /// LED pixel size for display
    led_size: f32,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    /// Whether animation is playing
    playing: bool,
    /// Last rejected configuration
    error: Option<ConfigError>,
}

impl PreviewApp {
    fn new() -> Self {
        let preset = PalettePreset::Fire;
        let scheduler = match build_scheduler(DEFAULT_LED_COUNT, preset, false) {
            Ok(scheduler) => scheduler,
            Err(err) => panic!("default preview configuration rejected: {err}"),
        };
        let controls = CONTROLS.handle();
        controls.set_power(true);
        let state = controls.state();

        Self {
            scheduler,
            controls,
            power: true,
            intensity: i32::from(state.intensity),
            preset,
            smoothing: false,
            led_count: DEFAULT_LED_COUNT,
            led_size: LED_SIZE,
            t_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            error: None,
        }
    }

    /// Rebuild the simulation after a configuration change
    fn rebuild(&mut self) {
        match build_scheduler(self.led_count, self.preset, self.smoothing) {
            Ok(scheduler) => {
                self.scheduler = scheduler;
                self.error = None;
            }
            Err(err) => self.error = Some(err),
        }
    }

    /// Update synthetic time based on wall clock
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            #[allow(clippy::cast_possible_truncation)]
            let delta_ms = delta.as_millis() as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    fn frame(&self) -> &[Rgb] {
        &self
            .scheduler
            .controller()
            .simulation()
            .driver()
            .frame
    }
}

fn build_scheduler(
    led_count: usize,
    preset: PalettePreset,
    smoothing: bool,
) -> Result<PreviewScheduler, ConfigError> {
    let config = FireConfig::new(led_count)
        .with_preset(preset)
        .with_smoothing(smoothing)
        .with_parameters(CONTROLS.snapshot().parameters);
    let simulation = FireSimulation::new(PreviewOutput::default(), &config)?;
    Ok(FrameScheduler::new(LightController::new(&CONTROLS, simulation)))
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();

        if self.playing {
            let _ = self.scheduler.tick(Instant::from_millis(self.t_ms));
        }

        // Request continuous repaint for animation
        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui
                            .button(if self.playing {
                                "⏸ Pause"
                            } else {
                                "▶ Play"
                            })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                        ui.label(format!(
                            "Dropped frames: {}",
                            self.scheduler.dropped_frames()
                        ));
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Size: ");
                        ui.add(egui::Slider::new(&mut self.led_size, 4.0..=32.0));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <LightControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.checkbox(&mut self.power, "Power").changed() {
                            self.controls.set_power(self.power);
                        }

                        ui.add_space(8.0);

                        ui.label("Intensity:");
                        let old_intensity = self.intensity;
                        ui.add(egui::Slider::new(&mut self.intensity, 0..=100));
                        if self.intensity != old_intensity {
                            self.controls.set_intensity(self.intensity);
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        let parameters = self.controls.state().parameters;
                        ui.label(format!(
                            "Sparking: {:.0}  Cooling: {:.0}",
                            parameters.sparking, parameters.cooling
                        ));
                    });
                });
                // </LightControls>
            });

            ui.add_space(16.0);

            // <SimulationConfig>
            ui.horizontal(|ui| {
                let mut changed = false;

                ui.label("Palette:");
                let mut selected = self.preset;
                egui::ComboBox::from_id_salt("palette_selector")
                    .selected_text(self.preset.as_str())
                    .show_ui(ui, |ui| {
                        for preset in PalettePreset::ALL {
                            ui.selectable_value(&mut selected, preset, preset.as_str());
                        }
                    });
                if selected != self.preset {
                    self.preset = selected;
                    changed = true;
                }

                ui.add_space(8.0);
                changed |= ui.checkbox(&mut self.smoothing, "Smoothing").changed();

                ui.add_space(8.0);
                ui.label("LEDs:");
                let old_led_count = self.led_count;
                ui.add(egui::Slider::new(&mut self.led_count, MIN_PIXELS..=MAX_LEDS));
                changed |= self.led_count != old_led_count;

                if changed {
                    self.rebuild();
                }
            });
            // </SimulationConfig>

            if let Some(err) = self.error {
                ui.colored_label(egui::Color32::RED, err.to_string());
            }

            ui.add_space(16.0);

            // === LED Display ===
            let available_width = ui.available_width();
            let led_pitch = self.led_size + LED_GAP;
            let frame = self.frame();

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let leds_per_row = (available_width / led_pitch).floor().max(1.0) as usize;
            let rows = frame.len().div_ceil(leds_per_row).max(1);
            #[allow(clippy::cast_precision_loss)]
            let height = rows as f32 * led_pitch;

            let (response, painter) = ui.allocate_painter(
                egui::vec2(available_width, height),
                egui::Sense::hover(),
            );
            let origin = response.rect.min;

            #[allow(clippy::cast_precision_loss)]
            for (i, pixel) in frame.iter().enumerate() {
                let row = i / leds_per_row;
                let col = i % leds_per_row;
                let x = origin.x + col as f32 * led_pitch;
                let y = origin.y + row as f32 * led_pitch;

                let rect = egui::Rect::from_min_size(
                    egui::pos2(x, y),
                    egui::vec2(self.led_size, self.led_size),
                );
                let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
                painter.rect_filled(rect, 3.0, color);
            }
        });
    }
}
