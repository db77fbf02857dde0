use std::fs;
use std::io::Cursor;

use lad_device::{
    blink::StatusFile,
    config::{DeviceConfig, TimingMode},
    console::Console,
    hardware::{Level, MockPins, PinMode},
    util::csv_table::CsvTable,
    App,
};
use tempfile::TempDir;

fn session(temp_dir: &TempDir, input: &str) -> App<MockPins, StatusFile, Cursor<Vec<u8>>, Vec<u8>> {
    let config = DeviceConfig {
        status_file: temp_dir.path().join("waveformdata.csv"),
        clear_screen: false,
        ..DeviceConfig::default()
    };
    let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false);
    let status = StatusFile::new(config.status_file.clone());

    App::new(MockPins::new(), status, console, config)
}

#[test]
fn test_blink_session_leaves_last_toggle_in_status_file() {
    let temp_dir = TempDir::new().unwrap();

    // Blink -> Green -> 5 Hz -> 80% -> Confirm -> Exit
    let mut app = session(&temp_dir, "2\n1\n5\n80\n1\n3\n");
    app.run().unwrap();

    let record = fs::read_to_string(temp_dir.path().join("waveformdata.csv")).unwrap();
    assert_eq!(
        record,
        " Blink LED: 13 \n Blink Frequency: 5\n Blink Brightness: 80\n LED State: 0\n LED Colour: Green\n"
    );

    let out = String::from_utf8_lossy(app.console().output()).into_owned();
    assert!(out.contains("Blinking..."));
    assert!(out.contains("Bye!"));
    assert_eq!(app.pins().mode(13), Some(PinMode::Input));
}

#[test]
fn test_cancelled_session_writes_no_status_record() {
    let temp_dir = TempDir::new().unwrap();

    // Blink -> Red -> 3 Hz -> 40% -> Return to Home -> Exit
    let mut app = session(&temp_dir, "2\n2\n3\n40\n0\n3\n");
    app.run().unwrap();

    assert!(!temp_dir.path().join("waveformdata.csv").exists());
}

#[test]
fn test_invalid_entries_are_reprompted_within_a_session() {
    let temp_dir = TempDir::new().unwrap();

    // Bad menu choice, bad LED, out-of-range frequency and brightness, bad confirm
    let mut app = session(&temp_dir, "7\n2\n5\n2\n11\n10\n101\n0\n4\n1\n3\n");
    app.run().unwrap();

    let record = fs::read_to_string(temp_dir.path().join("waveformdata.csv")).unwrap();
    assert!(record.contains(" Blink LED: 27 \n"));
    assert!(record.contains(" Blink Frequency: 10\n"));
    assert!(record.contains(" Blink Brightness: 0\n"));
    assert!(record.contains(" LED Colour: Red\n"));

    let out = String::from_utf8_lossy(app.console().output()).into_owned();
    assert_eq!(out.matches("Invalid Input. Try Again...").count(), 5);
}

#[test]
fn test_zero_frequency_session_holds_led_on() {
    let temp_dir = TempDir::new().unwrap();

    let mut app = session(&temp_dir, "2\n2\n0\n60\n1\n");
    app.run().unwrap();

    let record = fs::read_to_string(temp_dir.path().join("waveformdata.csv")).unwrap();
    assert!(record.contains(" LED State: 1\n"));
    // Input closed after the blink, so cleanup switched it back off
    assert_eq!(app.pins().level(27), Some(Level::Low));
}

#[test]
fn test_unwritable_status_file_does_not_abort_blink() {
    let temp_dir = TempDir::new().unwrap();
    let config = DeviceConfig {
        status_file: temp_dir.path().join("no_such_dir").join("waveformdata.csv"),
        clear_screen: false,
        timing: TimingMode::BusyPoll,
        ..DeviceConfig::default()
    };
    let console = Console::new(Cursor::new(b"2\n1\n10\n50\n1\n3\n".to_vec()), Vec::new(), false);
    let status = StatusFile::new(config.status_file.clone());
    let mut app = App::new(MockPins::new(), status, console, config);

    app.run().unwrap();

    let out = String::from_utf8_lossy(app.console().output()).into_owned();
    assert!(out.contains("20 of 20 updates failed"));
}

#[test]
fn test_config_file_overrides_pins() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lad.yaml");
    fs::write(&path, "pins:\n  green: 5\n  red: 6\nclear_screen: false\n").unwrap();

    let config = DeviceConfig::load_from_path(&path).unwrap();
    assert_eq!(config.pins.green, 5);
    assert_eq!(config.pins.red, 6);
    assert!(!config.clear_screen);

    fs::write(&path, "pins:\n  green: 6\n  red: 6\n").unwrap();
    assert!(DeviceConfig::load_from_path(&path).is_err());

    let missing = DeviceConfig::load_or_default(&temp_dir.path().join("absent.yaml")).unwrap();
    assert_eq!(missing.pins.green, 13);
}

#[test]
fn test_display_plot_table_from_disk() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data.csv");
    fs::write(&path, "t,green,red\n0,1,0\n500,0,1\n").unwrap();

    let table = CsvTable::load(&path).unwrap();
    assert_eq!(table.rows().len(), 3);
    assert_eq!(table.render(), "t\tgreen\tred\n0\t1\t0\n500\t0\t1\n");
}
