//! Input discovery: glob the working directory for diagnostic logs.

use anyhow::{Context, Result};
use globset::{Glob, GlobMatcher};
use std::path::{Path, PathBuf};

const PING_PATTERN: &str = "Ping_*";
const DNS_PATTERN: &str = "DNS*";
const CAPTURE_PATTERN: &str = "WireSharkCapture_*";

/// Diagnostic inputs found in one working directory.
#[derive(Debug, Default)]
pub struct Inputs {
    pub ping: Vec<PathBuf>,
    pub dns: Vec<PathBuf>,
    /// First capture file in name order. Its absence disables only the
    /// packet pipeline.
    pub capture: Option<PathBuf>,
}

/// Scan `dir` for ping logs (`Ping_*`), DNS logs (`DNS*`) and a packet
/// capture (`WireSharkCapture_*`). Matches are sorted by file name so
/// report order is deterministic.
pub fn scan(dir: &Path) -> Result<Inputs> {
    let ping = matcher(PING_PATTERN)?;
    let dns = matcher(DNS_PATTERN)?;
    let capture = matcher(CAPTURE_PATTERN)?;

    let mut inputs = Inputs::default();
    let mut captures = Vec::new();
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if ping.is_match(name) {
            inputs.ping.push(entry.path());
        } else if capture.is_match(name) {
            captures.push(entry.path());
        } else if dns.is_match(name) {
            inputs.dns.push(entry.path());
        }
    }
    inputs.ping.sort();
    inputs.dns.sort();
    captures.sort();
    inputs.capture = captures.into_iter().next();
    Ok(inputs)
}

fn matcher(pattern: &str) -> Result<GlobMatcher> {
    Ok(Glob::new(pattern)?.compile_matcher())
}
