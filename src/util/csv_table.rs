//! Comma-separated data loader used by the `display-plot` tool

use std::path::Path;

use crate::error::Result;

pub const DEFAULT_CSV_FILE: &str = "data.csv";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(Self::parse(&raw))
    }

    /// Split every non-empty line on commas. No quoting support.
    pub fn parse(raw: &str) -> Self {
        let rows = raw
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.split(',').map(|field| field.trim().to_string()).collect())
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Tab-separated rendering, one row per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.rows {
            out.push_str(&row.join("\t"));
            out.push('\n');
        }
        out
    }
}
