//! Program lifecycle: pin setup, the menu loop and cleanup on exit

mod new;
mod setup;
mod run;
mod handle_selection;
mod turn_off_leds;
mod turn_on_leds;
mod blink;
mod shutdown;

use std::io::{BufRead, Write};

use crate::{
    blink::StatusSink,
    config::DeviceConfig,
    console::Console,
    hardware::PinInterface,
};

pub struct App<P: PinInterface, S: StatusSink, R: BufRead, W: Write> {
    pins: P,
    status: S,
    console: Console<R, W>,
    config: DeviceConfig,
    /// Is the menu loop running?
    running: bool,
}

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    pub fn pins(&self) -> &P {
        &self.pins
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    fn led_pins(&self) -> [u8; 2] {
        [self.config.pins.green, self.config.pins.red]
    }
}
