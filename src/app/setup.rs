use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::StatusSink,
    error::Result,
    hardware::{PinInterface, PinMode},
    log_info,
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    /// LED pins to outputs, one software PWM channel per LED
    pub fn setup(&mut self) -> Result<()> {
        for pin in self.led_pins() {
            self.pins.set_mode(pin, PinMode::Output)?;
        }
        for pin in self.led_pins() {
            self.pins.create_pwm_channel(pin, self.config.pwm_range)?;
        }

        log_info!(
            "Pins ready: green={} red={} pwm_range={}",
            self.config.pins.green,
            self.config.pins.red,
            self.config.pwm_range
        );

        self.console.clear_screen()
    }
}
