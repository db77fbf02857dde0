//! Hardware Pin Interface
//!
//! The blink core never touches GPIO directly; it drives a [`PinInterface`]
//! so the same sequencing runs against the Raspberry Pi or a [`MockPins`].

mod mock_pins;
#[cfg(feature = "rpi")]
mod rpi_pins;

use crate::error::Result;

pub use mock_pins::{MockPins, PinCall};
#[cfg(feature = "rpi")]
pub use rpi_pins::RpiPins;

/// BCM GPIO number
pub type Pin = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Capability interface over the pins the device drives
///
/// # Invariants
///
/// - A pin must be switched to [`PinMode::Output`] before digital or PWM writes
/// - PWM writes require a channel created with [`PinInterface::create_pwm_channel`]
/// - `elapsed_millis` is monotonic
/// - Once a pin has a PWM channel the channel owns the output: a digital
///   write never lights a pin whose duty cycle is 0 (see [`pwm_gated_level`])
pub trait PinInterface {
    fn set_mode(&mut self, pin: Pin, mode: PinMode) -> Result<()>;

    fn write_digital(&mut self, pin: Pin, level: Level) -> Result<()>;

    /// Create a software PWM channel whose duty cycle runs 0..=`range_max`
    fn create_pwm_channel(&mut self, pin: Pin, range_max: u32) -> Result<()>;

    /// Write a duty cycle in channel units; values above the range are clamped
    fn write_pwm_duty_cycle(&mut self, pin: Pin, value: u32) -> Result<()>;

    /// Milliseconds since the interface was created
    fn elapsed_millis(&mut self) -> u64;

    /// Block for `ms` milliseconds
    fn delay_millis(&mut self, ms: u64) {
        std::thread::sleep(std::time::Duration::from_millis(ms));
    }
}

/// Level a digital write should actually drive on a pin.
///
/// `pwm_duty` is the pin's current duty cycle, `None` without a PWM channel.
/// Returns `None` when the running PWM output must be left alone.
pub fn pwm_gated_level(pwm_duty: Option<u32>, requested: Level) -> Option<Level> {
    match pwm_duty {
        None => Some(requested),
        Some(0) => Some(Level::Low),
        Some(_) => None,
    }
}
