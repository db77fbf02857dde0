use std::io::{BufRead, Write};

use crate::{blink::BlinkConfig, error::Result};

use super::{Console, Decision};

impl<R: BufRead, W: Write> Console<R, W> {
    /// Confirmation Gate
    pub fn confirm_blink_config(&mut self, config: &BlinkConfig) -> Result<Decision> {
        let prompt = format!(
            "Confirm your blink configurations.\n\n\
             LED to blink: {}\n\
             Blink Frequency: {}Hz\n\
             Blink Brightness: {}%\n\n\
             [1] Confirm Configuration\n\
             [0] Return to Home\n\n\
             Your Selection: ",
            config.target().label(),
            config.frequency_hz(),
            config.brightness_pct()
        );

        self.prompt_until(&prompt, |selection| match selection {
            1 => Some(Decision::Confirm),
            0 => Some(Decision::Cancel),
            _ => None,
        })
    }
}
