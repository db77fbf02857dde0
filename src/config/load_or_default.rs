use std::path::Path;

use crate::{
    config::DeviceConfig,
    error::Result,
};

impl DeviceConfig {
    /// Load `path` if it exists, otherwise fall back to the built-in defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }
}
