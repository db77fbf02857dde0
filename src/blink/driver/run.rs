use crate::{
    blink::{driver::{BlinkDriver, BlinkReport, DriverState}, BlinkConfig, StatusSink},
    error::Result,
    hardware::PinInterface,
    log_info,
};

impl<P: PinInterface, S: StatusSink> BlinkDriver<'_, P, S> {
    /// Drive one confirmed configuration to completion
    pub fn run(&mut self, config: &BlinkConfig) -> Result<BlinkReport> {
        let pin = config.target().pin(&self.pin_config);

        log_info!(
            "💡 Blinking {} LED (pin {}) at {} Hz, {}% brightness",
            config.target().label(),
            pin,
            config.frequency_hz(),
            config.brightness_pct()
        );

        self.state = DriverState::Driving;
        let result = match config.half_period_ms() {
            Some(half_period_ms) => self.drive(config, pin, half_period_ms),
            None => self.hold_steady(config, pin),
        };
        self.state = DriverState::Idle;

        if let Ok(report) = &result {
            log_info!(
                "✓ Blink finished: {} toggles, {} status write failures",
                report.toggles,
                report.status_failures
            );
        }

        result
    }
}
