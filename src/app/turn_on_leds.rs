use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::StatusSink,
    error::Result,
    hardware::{Level, PinInterface},
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    /// Troubleshooting: both LEDs high at full duty cycle
    pub fn turn_on_leds(&mut self) -> Result<()> {
        self.console.clear_screen()?;
        self.console.say("\nTurning on both LEDs...")?;

        for pin in self.led_pins() {
            self.pins.write_digital(pin, Level::High)?;
            self.pins.write_pwm_duty_cycle(pin, self.config.pwm_range)?;
        }
        Ok(())
    }
}
