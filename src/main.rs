use std::io;
use std::path::Path;

use lad_device::{
    blink::StatusFile,
    config::{DeviceConfig, DEFAULT_CONFIG_FILE},
    console::Console,
    log_info,
    util::log::init_logger,
    App,
};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = DeviceConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE))?;
    init_logger(&config.log_dir)?;
    log_info!("Starting lad-device version {}", env!("CARGO_PKG_VERSION"));

    let pins = open_pins()?;
    let status = StatusFile::new(config.status_file.clone());
    let console = Console::new(io::stdin().lock(), io::stdout(), config.clear_screen);

    App::new(pins, status, console, config).run()?;
    Ok(())
}

#[cfg(feature = "rpi")]
fn open_pins() -> lad_device::Result<lad_device::hardware::RpiPins> {
    lad_device::hardware::RpiPins::new()
}

/// Without GPIO support every pin call lands on the mock, which makes a dry run
#[cfg(not(feature = "rpi"))]
fn open_pins() -> lad_device::Result<lad_device::hardware::MockPins> {
    tracing::warn!("built without the `rpi` feature, pin writes are simulated");
    Ok(lad_device::hardware::MockPins::new())
}
