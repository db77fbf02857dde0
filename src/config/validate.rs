use crate::config::{DeviceConfig, ValidationError, MAX_BCM_PIN};

impl DeviceConfig {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for (field, pin) in [("pins.green", self.pins.green), ("pins.red", self.pins.red)] {
            if pin > MAX_BCM_PIN {
                return Err(ValidationError {
                    field: field.to_string(),
                    error: format!("BCM pin must be 0-{}, got {}", MAX_BCM_PIN, pin),
                });
            }
        }

        if self.pins.green == self.pins.red {
            return Err(ValidationError {
                field: "pins".to_string(),
                error: "Green and red LEDs cannot share a pin".to_string(),
            });
        }

        if self.pwm_range == 0 {
            return Err(ValidationError {
                field: "pwm_range".to_string(),
                error: "Must be greater than 0".to_string(),
            });
        }

        if self.status_file.as_os_str().is_empty() {
            return Err(ValidationError {
                field: "status_file".to_string(),
                error: "Cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
