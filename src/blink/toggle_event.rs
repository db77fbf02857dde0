use crate::{
    blink::{BlinkConfig, Led, LedState},
    hardware::Pin,
};

/// The state written after one toggle. Only the latest one is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    pub led_state: LedState,
    pub target: Led,
    pub pin: Pin,
    pub frequency_hz: u8,
    pub brightness_pct: u8,
}

impl ToggleEvent {
    pub fn new(config: &BlinkConfig, pin: Pin, led_state: LedState) -> Self {
        Self {
            led_state,
            target: config.target(),
            pin,
            frequency_hz: config.frequency_hz(),
            brightness_pct: config.brightness_pct(),
        }
    }
}
