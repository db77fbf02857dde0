use thiserror::Error;

use crate::config::ValidationError;

#[derive(Error, Debug)]
pub enum LadError {
    #[error("Hardware error: {0}")]
    Hardware(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid value: {0}")]
    Validation(#[from] ValidationError),

    #[error("Console input closed")]
    InputClosed,
}

impl From<&str> for LadError {
    fn from(error: &str) -> Self {
        LadError::Hardware(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LadError>;
