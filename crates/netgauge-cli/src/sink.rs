//! Append-mode report files.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

pub const REPORT_PING: &str = "Report_Ping.txt";
pub const REPORT_DNS: &str = "Report_DNS.txt";
pub const REPORT_SUMMARY: &str = "Report_Summary.txt";

/// One report file, created on first use and opened for append on every
/// write so successive runs accumulate.
pub struct ReportSink {
    path: PathBuf,
}

impl ReportSink {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one rendered block, newline-terminated.
    pub fn append(&self, block: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("failed to open {}", self.path.display()))?;
        writeln!(file, "{block}")
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
