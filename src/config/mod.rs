//! Device configuration loaded from `lad.yaml`
//!
//! Every field falls back to the wiring of the original LAD student board,
//! so running without a config file drives BCM 13 (green) and BCM 27 (red).

mod trait_default;
mod load_from_path;
mod load_or_default;
mod validate;
mod validation_error;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use validation_error::ValidationError;

pub const DEFAULT_CONFIG_FILE: &str = "lad.yaml";

/// Highest BCM GPIO number exposed on the 40-pin header
pub const MAX_BCM_PIN: u8 = 27;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub pins: PinConfig,
    pub pwm_range: u32,
    pub status_file: PathBuf,
    pub log_dir: PathBuf,
    pub timing: TimingMode,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinConfig {
    pub green: u8,
    pub red: u8,
}

/// How the blink driver waits out a half-period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingMode {
    /// Spin on the millisecond clock until the half-period has elapsed
    BusyPoll,
    /// Block the thread for the remainder of the half-period
    Sleep,
}
