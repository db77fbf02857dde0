use std::path::Path;

use crate::{
    config::DeviceConfig,
    error::Result,
    log_debug,
};

impl DeviceConfig {
    /// Read and validate a YAML config file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config: DeviceConfig = serde_yaml::from_str(&raw)?;

        log_debug!("Loaded config from {}: {:?}", path.display(), config);

        config.validate()?;
        Ok(config)
    }
}
