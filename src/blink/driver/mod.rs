//! Blink Driver
//!
//! Toggles one LED [`TOGGLES_PER_RUN`] times at the configured rate. The run
//! always completes; there is no cancellation. The first toggle (Off -> On)
//! happens immediately and each later one once a half-period has elapsed
//! since the previous toggle.

mod new;
mod run;
mod drive;
mod hold_steady;
mod apply_state;

use crate::{
    blink::{LedState, StatusSink},
    config::{PinConfig, TimingMode},
    hardware::PinInterface,
};

/// 10 full on/off cycles
pub const TOGGLES_PER_RUN: u32 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Driving,
}

/// Outcome of one blink run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkReport {
    pub toggles: u32,
    /// Status records that could not be written; the run continues past them
    pub status_failures: u32,
    pub final_state: LedState,
}

pub struct BlinkDriver<'a, P: PinInterface, S: StatusSink> {
    pins: &'a mut P,
    status: &'a mut S,
    pin_config: PinConfig,
    pwm_range: u32,
    timing: TimingMode,
    state: DriverState,
}

impl<P: PinInterface, S: StatusSink> BlinkDriver<'_, P, S> {
    /// `Driving` only while [`BlinkDriver::run`] is on the stack, so callers
    /// holding the driver between runs always see `Idle`.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Brightness percent scaled onto the PWM channel range
    fn duty_for(&self, brightness_pct: u8) -> u32 {
        brightness_pct as u32 * self.pwm_range / 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        blink::{BlinkConfig, Led, ToggleEvent},
        config::DeviceConfig,
        error::{LadError, Result},
        hardware::{Level, MockPins, PinCall, PinMode},
    };

    fn ready_pins(config: &DeviceConfig) -> MockPins {
        let mut pins = MockPins::new();
        for pin in [config.pins.green, config.pins.red] {
            pins.set_mode(pin, PinMode::Output).unwrap();
            pins.create_pwm_channel(pin, config.pwm_range).unwrap();
        }
        pins
    }

    fn busy_poll_config() -> DeviceConfig {
        DeviceConfig {
            timing: TimingMode::BusyPoll,
            ..DeviceConfig::default()
        }
    }

    struct FailingSink;

    impl StatusSink for FailingSink {
        fn record(&mut self, _event: &ToggleEvent) -> Result<()> {
            Err(LadError::Io(std::io::Error::other("disk gone")))
        }
    }

    #[test]
    fn test_twenty_alternating_toggles_for_every_frequency() {
        let device = busy_poll_config();

        for frequency in 1..=10 {
            let mut pins = ready_pins(&device);
            let mut events: Vec<ToggleEvent> = Vec::new();
            let config = BlinkConfig::new(Led::Red, frequency, 60).unwrap();

            let report = BlinkDriver::new(&mut pins, &mut events, &device)
                .run(&config)
                .unwrap();

            assert_eq!(report.toggles, TOGGLES_PER_RUN);
            assert_eq!(events.len(), TOGGLES_PER_RUN as usize);
            for (i, event) in events.iter().enumerate() {
                let expected = if i % 2 == 0 { LedState::On } else { LedState::Off };
                assert_eq!(event.led_state, expected, "toggle {} at {} Hz", i, frequency);
                assert_eq!(event.pin, 27);
            }
            assert_eq!(report.final_state, LedState::Off);
        }
    }

    #[test]
    fn test_busy_poll_waits_half_period_between_toggles() {
        let device = busy_poll_config();
        let mut pins = ready_pins(&device);
        let mut events: Vec<ToggleEvent> = Vec::new();
        let config = BlinkConfig::new(Led::Green, 2, 80).unwrap();

        BlinkDriver::new(&mut pins, &mut events, &device).run(&config).unwrap();

        // First toggle on the first poll (t=1), then one every 500 ms
        assert_eq!(pins.clock_ms(), 1 + 19 * 500);
    }

    #[test]
    fn test_sleep_mode_does_not_spin() {
        let device = DeviceConfig::default();
        assert_eq!(device.timing, TimingMode::Sleep);

        let mut pins = ready_pins(&device);
        let mut events: Vec<ToggleEvent> = Vec::new();
        let config = BlinkConfig::new(Led::Green, 2, 80).unwrap();

        let report = BlinkDriver::new(&mut pins, &mut events, &device).run(&config).unwrap();

        assert_eq!(report.toggles, TOGGLES_PER_RUN);
        assert!(pins.polls() < 3 * TOGGLES_PER_RUN as u64);
        assert!(pins.clock_ms() >= 19 * 500);
        assert!(pins.clock_ms() < 20 * 500);
    }

    #[test]
    fn test_pin_writes_follow_state() {
        let device = busy_poll_config();
        let mut pins = ready_pins(&device);
        let setup_calls = pins.calls().len();
        let mut events: Vec<ToggleEvent> = Vec::new();
        let config = BlinkConfig::new(Led::Green, 5, 80).unwrap();

        BlinkDriver::new(&mut pins, &mut events, &device).run(&config).unwrap();

        let writes = &pins.calls()[setup_calls..];
        assert_eq!(writes.len(), 2 * TOGGLES_PER_RUN as usize);
        assert_eq!(writes[0], PinCall::WritePwm(13, 80));
        assert_eq!(writes[1], PinCall::WriteDigital(13, Level::High));
        assert_eq!(writes[2], PinCall::WritePwm(13, 0));
        assert_eq!(writes[3], PinCall::WriteDigital(13, Level::Low));
        assert!(pins.calls_for(27).len() == 2, "red LED untouched by the run");
        assert_eq!(pins.level(13), Some(Level::Low));
    }

    #[test]
    fn test_brightness_scaled_to_pwm_range() {
        let device = DeviceConfig {
            pwm_range: 1024,
            timing: TimingMode::BusyPoll,
            ..DeviceConfig::default()
        };
        let mut pins = ready_pins(&device);
        let mut events: Vec<ToggleEvent> = Vec::new();
        let config = BlinkConfig::new(Led::Green, 10, 50).unwrap();

        BlinkDriver::new(&mut pins, &mut events, &device).run(&config).unwrap();

        assert!(pins.calls().contains(&PinCall::WritePwm(13, 512)));
    }

    #[test]
    fn test_zero_frequency_holds_led_on() {
        let device = busy_poll_config();
        let mut pins = ready_pins(&device);
        let mut events: Vec<ToggleEvent> = Vec::new();
        let config = BlinkConfig::new(Led::Red, 0, 40).unwrap();

        let mut driver = BlinkDriver::new(&mut pins, &mut events, &device);
        let report = driver.run(&config).unwrap();
        assert_eq!(driver.state(), DriverState::Idle);

        assert_eq!(report.toggles, 1);
        assert_eq!(report.final_state, LedState::On);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].led_state, LedState::On);
        assert_eq!(pins.duty_cycle(27), Some(40));
        assert_eq!(pins.level(27), Some(Level::High));
    }

    #[test]
    fn test_zero_brightness_never_lights_led() {
        let device = busy_poll_config();
        let mut pins = ready_pins(&device);
        let mut events: Vec<ToggleEvent> = Vec::new();
        let config = BlinkConfig::new(Led::Red, 0, 0).unwrap();

        let report = BlinkDriver::new(&mut pins, &mut events, &device).run(&config).unwrap();

        assert_eq!(report.final_state, LedState::On);
        assert_eq!(pins.level(27), Some(Level::High));
        assert_eq!(pins.duty_cycle(27), Some(0));
        assert_eq!(pins.output_level(27), Some(Level::Low));
    }

    #[test]
    fn test_status_failures_do_not_stop_the_run() {
        let device = busy_poll_config();
        let mut pins = ready_pins(&device);
        let mut sink = FailingSink;
        let config = BlinkConfig::new(Led::Green, 10, 100).unwrap();

        let report = BlinkDriver::new(&mut pins, &mut sink, &device).run(&config).unwrap();

        assert_eq!(report.toggles, TOGGLES_PER_RUN);
        assert_eq!(report.status_failures, TOGGLES_PER_RUN);
    }

    #[test]
    fn test_hardware_failure_is_propagated() {
        let device = busy_poll_config();
        // No PWM channel created
        let mut pins = MockPins::new();
        let mut events: Vec<ToggleEvent> = Vec::new();
        let config = BlinkConfig::new(Led::Green, 1, 10).unwrap();

        let mut driver = BlinkDriver::new(&mut pins, &mut events, &device);
        assert!(driver.run(&config).is_err());
        assert_eq!(driver.state(), DriverState::Idle);
    }
}
