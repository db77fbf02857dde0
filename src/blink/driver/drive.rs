use crate::{
    blink::{
        driver::{BlinkDriver, BlinkReport, TOGGLES_PER_RUN},
        BlinkConfig, LedState, StatusSink,
    },
    config::TimingMode,
    error::Result,
    hardware::{Pin, PinInterface},
};

impl<P: PinInterface, S: StatusSink> BlinkDriver<'_, P, S> {
    pub(super) fn drive(
        &mut self,
        config: &BlinkConfig,
        pin: Pin,
        half_period_ms: f64,
    ) -> Result<BlinkReport> {
        let mut report = BlinkReport {
            toggles: 0,
            status_failures: 0,
            final_state: LedState::Off,
        };
        let mut last_toggle: Option<u64> = None;

        while report.toggles < TOGGLES_PER_RUN {
            let now = self.pins.elapsed_millis();

            if let Some(last) = last_toggle {
                let waited = now.saturating_sub(last) as f64;
                if waited < half_period_ms {
                    if self.timing == TimingMode::Sleep {
                        self.pins.delay_millis((half_period_ms - waited).ceil() as u64);
                    }
                    continue;
                }
            }

            last_toggle = Some(now);
            let next = report.final_state.toggled();
            self.apply_state(config, pin, next, &mut report)?;
        }

        Ok(report)
    }
}
