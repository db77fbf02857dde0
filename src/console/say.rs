use std::io::{BufRead, Write};

use crate::error::Result;

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    /// Print a status line outside of any prompt
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }
}
