use std::path::{Path, PathBuf};

use crate::{
    blink::{status::{render_record, StatusSink}, ToggleEvent},
    error::Result,
};

/// Overwrites `path` with the latest record on every toggle. Not atomic.
#[derive(Debug, Clone)]
pub struct StatusFile {
    path: PathBuf,
}

impl StatusFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusSink for StatusFile {
    fn record(&mut self, event: &ToggleEvent) -> Result<()> {
        std::fs::write(&self.path, render_record(event))?;
        Ok(())
    }
}
