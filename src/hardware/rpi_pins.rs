//! Raspberry Pi backend built on rppal's GPIO and software PWM

use std::collections::HashMap;
use std::time::Instant;

use rppal::gpio::{Gpio, OutputPin};

use crate::{
    error::{LadError, Result},
    hardware::{pwm_gated_level, Level, Pin, PinInterface, PinMode},
};

/// Software PWM base frequency: 100 steps of 100µs
const SOFT_PWM_HZ: f64 = 100.0;

struct PwmChannel {
    range_max: u32,
    duty: u32,
}

pub struct RpiPins {
    gpio: Gpio,
    outputs: HashMap<Pin, OutputPin>,
    pwm: HashMap<Pin, PwmChannel>,
    started: Instant,
}

impl RpiPins {
    pub fn new() -> Result<Self> {
        let gpio = Gpio::new().map_err(|e| LadError::Hardware(e.to_string()))?;

        Ok(Self {
            gpio,
            outputs: HashMap::new(),
            pwm: HashMap::new(),
            started: Instant::now(),
        })
    }

    fn output(&mut self, pin: Pin) -> Result<&mut OutputPin> {
        self.outputs
            .get_mut(&pin)
            .ok_or_else(|| LadError::Hardware(format!("pin {} is not an output", pin)))
    }
}

impl PinInterface for RpiPins {
    fn set_mode(&mut self, pin: Pin, mode: PinMode) -> Result<()> {
        match mode {
            PinMode::Output => {
                if !self.outputs.contains_key(&pin) {
                    let output = self
                        .gpio
                        .get(pin)
                        .map_err(|e| LadError::Hardware(e.to_string()))?
                        .into_output_low();
                    self.outputs.insert(pin, output);
                }
            }
            PinMode::Input => {
                self.pwm.remove(&pin);
                // Dropping the OutputPin restores the pin's previous mode
                if let Some(mut output) = self.outputs.remove(&pin) {
                    let _ = output.clear_pwm();
                }
            }
        }
        Ok(())
    }

    fn write_digital(&mut self, pin: Pin, level: Level) -> Result<()> {
        let duty = self.pwm.get(&pin).map(|ch| ch.duty);
        let output = self.output(pin)?;
        match pwm_gated_level(duty, level) {
            Some(Level::High) => output.set_high(),
            Some(Level::Low) => output.set_low(),
            None => tracing::trace!(pin, ?level, "digital write deferred to active PWM"),
        }
        Ok(())
    }

    fn create_pwm_channel(&mut self, pin: Pin, range_max: u32) -> Result<()> {
        if range_max == 0 {
            return Err("PWM range must be greater than 0".into());
        }
        self.output(pin)?;
        self.pwm.insert(pin, PwmChannel { range_max, duty: 0 });
        Ok(())
    }

    fn write_pwm_duty_cycle(&mut self, pin: Pin, value: u32) -> Result<()> {
        let Some(channel) = self.pwm.get_mut(&pin) else {
            return Err(LadError::Hardware(format!("pin {} has no PWM channel", pin)));
        };
        channel.duty = value.min(channel.range_max);
        let duty = channel.duty;
        let fraction = duty as f64 / channel.range_max as f64;

        let output = self.output(pin)?;
        let written = if duty == 0 {
            output.clear_pwm().map(|_| output.set_low())
        } else {
            output.set_pwm_frequency(SOFT_PWM_HZ, fraction)
        };
        written.map_err(|e| LadError::Hardware(e.to_string()))
    }

    fn elapsed_millis(&mut self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}
