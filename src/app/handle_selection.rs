use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::StatusSink,
    console::MenuSelection,
    error::Result,
    hardware::PinInterface,
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    pub fn handle_selection(&mut self, selection: MenuSelection) -> Result<()> {
        match selection {
            MenuSelection::TurnOff => self.turn_off_leds(),
            MenuSelection::TurnOn => self.turn_on_leds(),
            MenuSelection::Blink => self.blink().map(|_| ()),
            MenuSelection::Exit => {
                self.running = false;
                Ok(())
            }
        }
    }
}
