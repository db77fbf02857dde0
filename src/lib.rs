pub mod app;
pub mod blink;
pub mod config;
pub mod console;
pub mod error;
pub mod hardware;
pub mod util;

pub use app::App;
pub use blink::{BlinkConfig, BlinkDriver, Led, LedState, ToggleEvent};
pub use config::DeviceConfig;
pub use error::{LadError, Result};
