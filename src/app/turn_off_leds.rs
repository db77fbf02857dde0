use std::io::{BufRead, Write};

use crate::{
    app::App,
    blink::StatusSink,
    error::Result,
    hardware::{Level, PinInterface},
};

impl<P: PinInterface, S: StatusSink, R: BufRead, W: Write> App<P, S, R, W> {
    /// Troubleshooting: both LEDs low, PWM off
    pub fn turn_off_leds(&mut self) -> Result<()> {
        self.console.clear_screen()?;
        self.console.say("\nTurning off both LEDs...")?;

        for pin in self.led_pins() {
            self.pins.write_digital(pin, Level::Low)?;
            self.pins.write_pwm_duty_cycle(pin, 0)?;
        }
        Ok(())
    }
}
