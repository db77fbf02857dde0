use std::io::{BufRead, Write};

use crate::{
    blink::{validate_brightness, MAX_BRIGHTNESS_PCT},
    error::Result,
};

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn enter_brightness(&mut self) -> Result<u8> {
        let prompt = format!(
            "Select LED brightness during blink.\n\nEnter whole numbers between 0 to {}\nBrightness (%): ",
            MAX_BRIGHTNESS_PCT
        );
        self.prompt_until(&prompt, |value| validate_brightness(value).ok())
    }
}
