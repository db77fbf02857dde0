use crate::{blink::Led, config::ValidationError};

pub const MAX_FREQUENCY_HZ: u8 = 10;
pub const MAX_BRIGHTNESS_PCT: u8 = 100;

/// A blink request that has passed range validation
///
/// Fields are private so a `BlinkConfig` outside the allowed ranges cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlinkConfig {
    target: Led,
    frequency_hz: u8,
    brightness_pct: u8,
}

impl BlinkConfig {
    pub fn new(target: Led, frequency_hz: i64, brightness_pct: i64) -> Result<Self, ValidationError> {
        Ok(Self {
            target,
            frequency_hz: validate_frequency(frequency_hz)?,
            brightness_pct: validate_brightness(brightness_pct)?,
        })
    }

    pub fn target(&self) -> Led {
        self.target
    }

    pub fn frequency_hz(&self) -> u8 {
        self.frequency_hz
    }

    pub fn brightness_pct(&self) -> u8 {
        self.brightness_pct
    }

    /// `None` for 0 Hz, which the driver treats as solid on
    pub fn half_period_ms(&self) -> Option<f64> {
        half_period_ms(self.frequency_hz)
    }
}

/// Time between toggles. One full cycle is `1000 / f` ms and the LED
/// changes state at the end of each half of it.
pub fn half_period_ms(frequency_hz: u8) -> Option<f64> {
    if frequency_hz == 0 {
        return None;
    }
    Some(1000.0 / frequency_hz as f64)
}

pub fn validate_frequency(value: i64) -> Result<u8, ValidationError> {
    in_range(value, MAX_FREQUENCY_HZ).ok_or_else(|| ValidationError {
        field: "frequency".to_string(),
        error: format!("Must be a whole number between 0 and {}", MAX_FREQUENCY_HZ),
    })
}

pub fn validate_brightness(value: i64) -> Result<u8, ValidationError> {
    in_range(value, MAX_BRIGHTNESS_PCT).ok_or_else(|| ValidationError {
        field: "brightness".to_string(),
        error: format!("Must be a whole number between 0 and {}", MAX_BRIGHTNESS_PCT),
    })
}

fn in_range(value: i64, max: u8) -> Option<u8> {
    u8::try_from(value).ok().filter(|v| *v <= max)
}
