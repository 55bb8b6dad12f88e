mod common;

mod tests {
    use std::cell::Cell;

    use embassy_time::{Duration, Instant};
    use hearth::{
        FireConfig, FireSimulation, FrameScheduler, LightController, OutputDriver,
        SharedControls, Tick,
    };

    use crate::common::{FlakyDriver, RecordingDriver, is_blank};

    const MAX_LEDS: usize = 64;

    fn scheduler<D: OutputDriver>(
        controls: &SharedControls,
        driver: D,
        frame_duration: Duration,
    ) -> FrameScheduler<'_, D, MAX_LEDS> {
        let simulation = FireSimulation::new(driver, &FireConfig::new(20)).unwrap();
        FrameScheduler::with_frame_duration(
            LightController::new(controls, simulation),
            frame_duration,
        )
    }

    #[test]
    fn test_unpaced_by_default() {
        let controls = SharedControls::default();
        let simulation =
            FireSimulation::new(RecordingDriver::default(), &FireConfig::new(20)).unwrap();
        let mut scheduler =
            FrameScheduler::<_, MAX_LEDS>::new(LightController::new(&controls, simulation));

        controls.handle().set_power(true);
        for ms in 0..5 {
            let result = scheduler.tick(Instant::from_millis(ms)).unwrap();
            assert_eq!(result.tick, Some(Tick::Rendered));
            assert_eq!(result.sleep_duration, Duration::from_millis(0));
        }
    }

    #[test]
    fn test_pacing_and_drift_correction() {
        let controls = SharedControls::default();
        let mut scheduler = scheduler(
            &controls,
            RecordingDriver::default(),
            Duration::from_millis(10),
        );

        let result = scheduler.tick(Instant::from_millis(0)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        let result = scheduler.tick(Instant::from_millis(12)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(8));

        // A long stall skips the backlog
        let result = scheduler.tick(Instant::from_millis(500)).unwrap();
        assert_eq!(result.next_deadline, Instant::from_millis(510));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }

    #[test]
    fn test_failed_frames_are_dropped_not_fatal() {
        let controls = SharedControls::default();
        let mut scheduler = scheduler(&controls, FlakyDriver::new(3), Duration::from_millis(0));
        controls.handle().set_power(true);

        let mut rendered = 0;
        for ms in 0..9 {
            let result = scheduler.tick(Instant::from_millis(ms)).unwrap();
            if result.tick == Some(Tick::Rendered) {
                rendered += 1;
            }
        }
        assert_eq!(rendered, 6);
        assert_eq!(scheduler.dropped_frames(), 3);
        assert_eq!(scheduler.controller().simulation().driver().shown, 6);
    }

    #[test]
    fn test_stop_request_ends_schedule() {
        let controls = SharedControls::default();
        let mut scheduler = scheduler(
            &controls,
            RecordingDriver::default(),
            Duration::from_millis(0),
        );
        let handle = controls.handle();
        handle.set_power(true);

        assert!(scheduler.tick(Instant::from_millis(0)).is_some());
        handle.stop();
        assert!(scheduler.tick(Instant::from_millis(1)).is_none());
        assert!(scheduler.tick(Instant::from_millis(2)).is_none());

        let driver = scheduler.controller().simulation().driver();
        assert_eq!(driver.frames.len(), 2);
        assert!(is_blank(driver.last().unwrap()));
    }

    #[test]
    fn test_run_until_stopped() {
        let controls = SharedControls::default();
        let mut scheduler = scheduler(
            &controls,
            RecordingDriver::default(),
            Duration::from_millis(5),
        );
        let handle = controls.handle();
        handle.set_power(true);

        let now = Cell::new(0);
        let mut sleeps = 0;
        scheduler.run(
            || Instant::from_millis(now.get()),
            |duration| {
                sleeps += 1;
                now.set(now.get() + duration.as_millis());
                if sleeps == 10 {
                    handle.stop();
                }
            },
        );

        assert_eq!(sleeps, 10);
        let driver = scheduler.controller().simulation().driver();
        // Ten frames plus the blanking on stop
        assert_eq!(driver.frames.len(), 11);
        assert!(is_blank(driver.last().unwrap()));
    }

    #[test]
    fn test_stop_blanks_display() {
        let controls = SharedControls::default();
        let mut scheduler = scheduler(
            &controls,
            RecordingDriver::default(),
            Duration::from_millis(0),
        );
        controls.handle().set_power(true);
        assert!(scheduler.tick(Instant::from_millis(0)).is_some());

        scheduler.stop();
        scheduler.stop();
        assert!(scheduler.tick(Instant::from_millis(1)).is_none());
        assert!(scheduler.controller().is_halted());
        assert!(is_blank(
            scheduler.controller().simulation().driver().last().unwrap()
        ));
    }
}
