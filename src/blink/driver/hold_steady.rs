use crate::{
    blink::{
        driver::{BlinkDriver, BlinkReport},
        BlinkConfig, LedState, StatusSink,
    },
    error::Result,
    hardware::{Pin, PinInterface},
    log_warn,
};

impl<P: PinInterface, S: StatusSink> BlinkDriver<'_, P, S> {
    /// 0 Hz: switch the LED on at the requested brightness and leave it there
    pub(super) fn hold_steady(&mut self, config: &BlinkConfig, pin: Pin) -> Result<BlinkReport> {
        log_warn!("Frequency 0 Hz requested, holding pin {} on without toggling", pin);

        let mut report = BlinkReport {
            toggles: 0,
            status_failures: 0,
            final_state: LedState::Off,
        };
        self.apply_state(config, pin, LedState::On, &mut report)?;

        Ok(report)
    }
}
