use std::io::{BufRead, Write};

use crate::error::Result;

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Show `prompt` until `accept` takes the entered number
    pub(super) fn prompt_until<T>(
        &mut self,
        prompt: &str,
        accept: impl Fn(i64) -> Option<T>,
    ) -> Result<T> {
        loop {
            write!(self.output, "{}", prompt)?;
            self.output.flush()?;

            if let Some(value) = self.read_number()?.and_then(&accept) {
                self.clear_screen()?;
                return Ok(value);
            }

            self.clear_screen()?;
            writeln!(self.output, "Invalid Input. Try Again...\n")?;
        }
    }
}
