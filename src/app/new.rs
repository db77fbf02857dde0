use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::StatusSink,
    config::DeviceConfig,
    console::Console,
    hardware::PinInterface,
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    /// Constructs a new instance of [`App`].
    pub fn new(pins: P, status: S, console: Console<R, W>, config: DeviceConfig) -> Self {
        Self {
            pins,
            status,
            console,
            config,
            running: true,
        }
    }
}
