use std::io::{BufRead, Write};

use crate::error::{LadError, Result};

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Read one line. `Ok(None)` when the line is not a whole number,
    /// including lines that are not valid UTF-8.
    pub(super) fn read_number(&mut self) -> Result<Option<i64>> {
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(LadError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&line).trim().parse().ok())
    }
}
