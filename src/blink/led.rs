use crate::{
    config::PinConfig,
    hardware::{Level, Pin},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Green,
    Red,
}

impl Led {
    /// Menu selection `[1] Green LED`, `[2] Red LED`
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(Led::Green),
            2 => Some(Led::Red),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Led::Green => "Green",
            Led::Red => "Red",
        }
    }

    pub fn pin(&self, pins: &PinConfig) -> Pin {
        match self {
            Led::Green => pins.green,
            Led::Red => pins.red,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    Off,
    On,
}

impl LedState {
    pub fn toggled(self) -> Self {
        match self {
            LedState::Off => LedState::On,
            LedState::On => LedState::Off,
        }
    }

    pub fn level(self) -> Level {
        match self {
            LedState::Off => Level::Low,
            LedState::On => Level::High,
        }
    }

    /// `0` or `1`, as written to the status record
    pub fn as_digit(self) -> u8 {
        match self {
            LedState::Off => 0,
            LedState::On => 1,
        }
    }
}
