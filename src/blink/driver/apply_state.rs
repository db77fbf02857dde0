use crate::{
    blink::{
        driver::{BlinkDriver, BlinkReport},
        BlinkConfig, LedState, StatusSink, ToggleEvent,
    },
    error::Result,
    hardware::{Pin, PinInterface},
    log_debug,
    log_error,
};

impl<P: PinInterface, S: StatusSink> BlinkDriver<'_, P, S> {
    /// Write one toggle to the pins and the status record
    pub(super) fn apply_state(
        &mut self,
        config: &BlinkConfig,
        pin: Pin,
        state: LedState,
        report: &mut BlinkReport,
    ) -> Result<()> {
        let duty = match state {
            LedState::On => self.duty_for(config.brightness_pct()),
            LedState::Off => 0,
        };
        self.pins.write_pwm_duty_cycle(pin, duty)?;
        self.pins.write_digital(pin, state.level())?;

        report.toggles += 1;
        report.final_state = state;
        log_debug!("Toggle {} on pin {}: {:?}", report.toggles, pin, state);

        let event = ToggleEvent::new(config, pin, state);
        if let Err(e) = self.status.record(&event) {
            report.status_failures += 1;
            log_error!("Failed to write status record: {}", e);
        }

        Ok(())
    }
}
