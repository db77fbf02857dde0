use std::io::{BufRead, Write};

use crossterm::{
    cursor::MoveTo,
    terminal::{Clear, ClearType},
    QueueableCommand,
};

use crate::error::Result;

use super::Console;

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn clear_screen(&mut self) -> Result<()> {
        if self.clear_screen {
            self.output
                .queue(Clear(ClearType::All))?
                .queue(MoveTo(0, 0))?;
            self.output.flush()?;
        }
        Ok(())
    }
}
