//! LED blink subsystem: validated configuration, the toggle driver and the
//! status record it leaves behind.

mod led;
mod blink_config;
mod toggle_event;
pub mod driver;
pub mod status;

pub use blink_config::{
    BlinkConfig,
    half_period_ms,
    validate_brightness,
    validate_frequency,
    MAX_BRIGHTNESS_PCT,
    MAX_FREQUENCY_HZ,
};
pub use driver::{BlinkDriver, BlinkReport, DriverState, TOGGLES_PER_RUN};
pub use led::{Led, LedState};
pub use status::{StatusFile, StatusSink};
pub use toggle_event::ToggleEvent;
