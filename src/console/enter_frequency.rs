use std::io::{BufRead, Write};

use crate::{
    blink::{validate_frequency, MAX_FREQUENCY_HZ},
    error::Result,
};

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn enter_frequency(&mut self) -> Result<u8> {
        let prompt = format!(
            "Enter frequency to blink.\n\nEnter whole numbers between 0 to {}\n\nFrequency (Hz): ",
            MAX_FREQUENCY_HZ
        );
        self.prompt_until(&prompt, |value| validate_frequency(value).ok())
    }
}
