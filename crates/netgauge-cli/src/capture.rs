//! External capture-analysis tool invocation.
//!
//! The packet pipeline never owns the capture file format: it shells out
//! to tshark and counts the frame numbers the tool prints, once
//! unfiltered and once restricted to retransmission-related frames.

use std::path::Path;
use std::process::Command;

/// Display filter matching retransmitted, lost or duplicated frames.
pub const RETRANSMISSION_FILTER: &str = "tcp.analysis.retransmission || tcp.analysis.fast_retransmission || tcp.analysis.lost_segment || tcp.analysis.duplicate_ack";

const DEFAULT_TOOL: &str = "tshark";

fn tool() -> String {
    std::env::var("NETGAUGE_TSHARK").unwrap_or_else(|_| DEFAULT_TOOL.to_string())
}

/// Count frames in `capture`, optionally restricted by a display filter.
///
/// One frame number per stdout line; blank lines are ignored. A spawn
/// failure or non-zero exit is reported on stderr and yields `None` —
/// the packet pipeline degrades, the run continues.
pub fn count_frames(capture: &Path, filter: Option<&str>) -> Option<u64> {
    let tool = tool();
    let mut cmd = Command::new(&tool);
    cmd.arg("-r").arg(capture);
    if let Some(filter) = filter {
        cmd.arg("-Y").arg(filter);
    }
    cmd.args(["-T", "fields", "-e", "frame.number"]);

    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error: failed to run {tool}: {e}");
            return None;
        }
    };
    if !output.status.success() {
        eprintln!(
            "error: {tool} exited with {} on {}",
            output.status,
            capture.display()
        );
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Some(stdout.lines().filter(|l| !l.trim().is_empty()).count() as u64)
}
