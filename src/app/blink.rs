use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::{BlinkDriver, BlinkReport, StatusSink},
    console::Decision,
    error::Result,
    hardware::PinInterface,
    log_info,
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    /// Collect, confirm and run one blink. `None` when the user cancels.
    pub fn blink(&mut self) -> Result<Option<BlinkReport>> {
        self.console.clear_screen()?;
        self.console.say("\nBlink...")?;

        let config = self.console.collect_blink_config()?;

        if self.console.confirm_blink_config(&config)? == Decision::Cancel {
            log_info!("Blink configuration discarded: {:?}", config);
            return Ok(None);
        }

        self.console.say("\nBlinking...")?;
        let report = BlinkDriver::new(&mut self.pins, &mut self.status, &self.config).run(&config)?;
        self.console.clear_screen()?;

        // Printed after the clear so it stays above the next menu
        if report.status_failures > 0 {
            self.console.say(&format!(
                "Could not write {} ({} of {} updates failed)",
                self.config.status_file.display(),
                report.status_failures,
                report.toggles
            ))?;
        }

        Ok(Some(report))
    }
}
