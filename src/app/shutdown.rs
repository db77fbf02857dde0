use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::StatusSink,
    error::Result,
    hardware::{Level, PinInterface, PinMode},
    log_info,
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    /// LEDs off, PWM off, pins back to inputs
    pub fn shutdown(&mut self) -> Result<()> {
        self.console.clear_screen()?;
        self.console.say("\nCleaning Up...")?;

        for pin in self.led_pins() {
            self.pins.write_digital(pin, Level::Low)?;
        }
        for pin in self.led_pins() {
            self.pins.write_pwm_duty_cycle(pin, 0)?;
        }
        for pin in self.led_pins() {
            self.pins.set_mode(pin, PinMode::Input)?;
        }

        log_info!("Pins released");
        self.console.say("Bye!\n")
    }
}
