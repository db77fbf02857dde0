use std::path::PathBuf;

use super::{DeviceConfig, PinConfig, TimingMode};

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            pins: PinConfig::default(),
            pwm_range: 100,
            status_file: PathBuf::from("waveformdata.csv"),
            log_dir: PathBuf::from("./logs"),
            timing: TimingMode::Sleep,
            clear_screen: true,
        }
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            green: 13,
            red: 27,
        }
    }
}
