use std::io::{BufRead, Write};

use crate::{blink::Led, error::Result};

use super::Console;

const LED_PROMPT: &str = "\nSelect LED to blink.\n\n[1] Green LED\n[2] Red LED\n\nYour Selection: ";

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn select_led(&mut self) -> Result<Led> {
        self.prompt_until(LED_PROMPT, Led::from_selection)
    }
}
