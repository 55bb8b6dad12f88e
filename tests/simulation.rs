mod common;

mod tests {
    use hearth::color::Color;
    use hearth::{ConfigError, FireConfig, FireSimulation, PalettePreset, SimulationParameters};

    use crate::common::{RecordingDriver, is_blank};

    const MAX_LEDS: usize = 128;

    type Simulation = FireSimulation<RecordingDriver, MAX_LEDS>;

    fn simulation(config: &FireConfig<'_>) -> Simulation {
        Simulation::new(RecordingDriver::default(), config).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let new = |config: &FireConfig<'_>| Simulation::new(RecordingDriver::default(), config).err();

        assert!(matches!(
            new(&FireConfig::new(0)),
            Some(ConfigError::TooFewPixels { .. })
        ));
        assert!(matches!(
            new(&FireConfig::new(MAX_LEDS + 1)),
            Some(ConfigError::TooManyPixels { .. })
        ));
        assert_eq!(
            new(&FireConfig::new(60).with_palette(&[])),
            Some(ConfigError::EmptyPalette)
        );
        // A single anchor has nothing to blend towards
        let single = [Color::new(1.0, 0.0, 0.0)];
        assert_eq!(
            new(&FireConfig::new(60).with_palette(&single).with_smoothing(true)),
            Some(ConfigError::EmptyPalette)
        );
        assert!(new(&FireConfig::new(60).with_palette(&single)).is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config = FireConfig::default();
        assert_eq!(config.pixel_count, 120);
        assert_eq!(config.parameters, SimulationParameters::new(200.0, 55.0));
        assert_eq!(config.palette, PalettePreset::Fire.anchors());
        assert!(!config.smoothing);
    }

    #[test]
    fn test_step_flushes_a_full_frame() {
        let mut fire = simulation(&FireConfig::new(30));
        fire.step().unwrap();
        fire.step().unwrap();

        let frames = &fire.driver().frames;
        assert_eq!(frames.len(), 2);
        assert!(frames.iter().all(|frame| frame.len() == 30));
        assert_eq!(fire.driver().last().unwrap(), fire.frame());
    }

    #[test]
    fn test_reset_blanks_display_but_keeps_heat() {
        let mut fire = simulation(&FireConfig::new(30).with_seed(1));
        for _ in 0..50 {
            fire.step().unwrap();
        }
        let heat = fire.heat().values().to_vec();
        assert!(heat.iter().any(|&value| value > 0.0));

        fire.reset().unwrap();
        assert!(is_blank(fire.frame()));
        assert!(is_blank(fire.driver().last().unwrap()));
        assert_eq!(fire.heat().values(), heat.as_slice());

        fire.reset().unwrap();
        assert!(is_blank(fire.driver().last().unwrap()));
    }

    #[test]
    fn test_same_seed_same_animation() {
        let config = FireConfig::new(40).with_seed(99);
        let mut a = simulation(&config);
        let mut b = simulation(&config);
        for _ in 0..100 {
            a.step().unwrap();
            b.step().unwrap();
        }
        assert_eq!(a.driver().frames, b.driver().frames);
    }

    #[test]
    fn test_parameters_are_clamped() {
        let mut fire = simulation(&FireConfig::new(30));
        fire.set_parameters(SimulationParameters {
            sparking: 400.0,
            cooling: -3.0,
        });
        assert_eq!(fire.parameters(), SimulationParameters::new(255.0, 0.0));

        fire.set_parameters(SimulationParameters {
            sparking: f32::NAN,
            cooling: 120.0,
        });
        assert_eq!(fire.parameters(), SimulationParameters::new(0.0, 100.0));
    }

    #[test]
    fn test_no_sparking_stays_dark() {
        let config = FireConfig::new(30).with_parameters(SimulationParameters::new(0.0, 55.0));
        let mut fire = simulation(&config);
        for _ in 0..100 {
            fire.step().unwrap();
        }
        assert_eq!(fire.heat().max_heat(), 0.0);
    }

    #[test]
    fn test_smoothed_palette_is_used() {
        let fire = simulation(&FireConfig::new(30).with_smoothing(true));
        assert_eq!(fire.palette().len(), 70);
    }

    #[test]
    fn test_thousand_frames_end_to_end() {
        let mut fire = simulation(&FireConfig::new(60).with_seed(2024));
        for frame in 0..1000 {
            fire.step().unwrap();
            assert!(
                fire.heat().max_heat() <= 400.0,
                "frame {frame}: heat {}",
                fire.heat().max_heat()
            );
            assert_eq!(fire.driver().last().unwrap().len(), 60);
        }
        assert_eq!(fire.driver().frames.len(), 1000);
        assert!(fire.driver().frames.iter().any(|frame| !is_blank(frame)));
    }
}
