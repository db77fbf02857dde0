use std::io::{BufRead, Write};

use crate::error::Result;

use super::{Console, MenuSelection};

const MAIN_MENU: &str = "\n===== LAD STUDENT DEVICE =====\n\
\n[0] Turn off both LEDs\
\n[1] Turn on both LEDs\
\n[2] Blink LED\
\n[3] Exit\n\
\nYour Selection: ";

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn select_menu(&mut self) -> Result<MenuSelection> {
        self.prompt_until(MAIN_MENU, MenuSelection::from_selection)
    }
}
