//! Status Recorder: the single overwrite-in-place record of the latest toggle

mod status_file;
mod render_record;

use crate::{blink::ToggleEvent, error::Result};

pub use render_record::render_record;
pub use status_file::StatusFile;

/// Destination for toggle records
pub trait StatusSink {
    fn record(&mut self, event: &ToggleEvent) -> Result<()>;
}

/// Keeps every event, for inspecting a whole run
impl StatusSink for Vec<ToggleEvent> {
    fn record(&mut self, event: &ToggleEvent) -> Result<()> {
        self.push(*event);
        Ok(())
    }
}
