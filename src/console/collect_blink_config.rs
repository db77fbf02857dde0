use std::io::{BufRead, Write};

use crate::{blink::BlinkConfig, error::Result};

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Configuration Collector: LED, then frequency, then brightness
    pub fn collect_blink_config(&mut self) -> Result<BlinkConfig> {
        let target = self.select_led()?;
        let frequency_hz = self.enter_frequency()?;
        let brightness_pct = self.enter_brightness()?;

        Ok(BlinkConfig::new(target, frequency_hz.into(), brightness_pct.into())?)
    }
}
