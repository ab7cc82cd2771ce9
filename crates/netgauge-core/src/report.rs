//! Text report rendering.
//!
//! Pure formatting: every number is computed upstream, and a missing
//! metric renders as the literal `no data` rather than a fabricated zero.

use crate::classify::{MetricTags, Status};
use crate::model::Summary;

const RULE: &str = "\t_________________________________________________________________";
const BAR: &str = "\t==============================================";

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        v.to_string()
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map(fmt_value).unwrap_or_else(|| "no data".to_string())
}

fn fmt_count(v: Option<u64>) -> String {
    v.map(|n| n.to_string())
        .unwrap_or_else(|| "no data".to_string())
}

/// Rate in [0,1] as a percentage with two decimals.
fn fmt_rate(v: Option<f64>) -> String {
    v.map(|r| format!("{:.2}%", r * 100.0))
        .unwrap_or_else(|| "no data".to_string())
}

/// Value followed by its classification tag; no tag when there is no
/// verdict.
fn tagged(value: String, status: Status) -> String {
    let tag = status.tag();
    if tag.is_empty() {
        value
    } else {
        format!("{value} {tag}")
    }
}

/// Per-file ping report block.
pub fn ping_report(s: &Summary) -> String {
    [
        RULE.to_string(),
        format!("\tPing Statistic Report for {}", s.target),
        format!("\tMinimum Latency: {}", fmt_opt(s.minimum)),
        format!("\tMaximum Latency: {}", fmt_opt(s.maximum)),
        format!("\tAverage Latency: {}", fmt_opt(s.average)),
        format!("\tMedian Latency: {}", fmt_opt(s.median)),
        format!("\tStandard Deviation: {}", fmt_opt(s.stdev)),
        format!("\tSuccessful Pings: {}", s.success),
        format!("\tTimeouts: {}", s.failures),
        format!("\tSuccess Rate: {}", fmt_opt(s.success_rate)),
        RULE.to_string(),
    ]
    .join("\n")
}

/// Per-file DNS report block.
pub fn dns_report(s: &Summary) -> String {
    [
        RULE.to_string(),
        format!(
            "\tDNS Statistic Report for {} (Source: {})",
            s.target,
            s.source.as_deref().unwrap_or("")
        ),
        format!("\tMinimum LookUp Time: {}", fmt_opt(s.minimum)),
        format!("\tMaximum LookUp Time: {}", fmt_opt(s.maximum)),
        format!("\tAverage LookUp Time: {}", fmt_opt(s.average)),
        format!("\tMedian LookUp Time: {}", fmt_opt(s.median)),
        format!("\tStandard Deviation: {}", fmt_opt(s.stdev)),
        format!("\tSuccessful Lookups: {}", s.success),
        format!("\tTimeouts/Errors: {}", s.failures),
        format!("\tSuccess Rate: {}", fmt_opt(s.success_rate)),
        RULE.to_string(),
    ]
    .join("\n")
}

/// Cross-file ping report block with per-metric verdict tags.
pub fn global_ping_report(s: &Summary, tags: &MetricTags) -> String {
    [
        BAR.to_string(),
        "\tGLOBAL PING STATISTICS REPORT".to_string(),
        format!("\tTotal Successful Pings:\t{}", s.success),
        format!("\tTotal Timeouts:\t\t{}", s.failures),
        format!("\tMinimum Latency:\t{}", fmt_opt(s.minimum)),
        format!("\tMaximum Latency:\t{}", fmt_opt(s.maximum)),
        format!(
            "\tSuccess Rate:\t\t{}",
            tagged(fmt_rate(s.success_rate), tags.success_rate)
        ),
        format!(
            "\tAverage Latency:\t{}",
            tagged(fmt_opt(s.average), tags.average)
        ),
        format!(
            "\tMedian Latency:\t\t{}",
            tagged(fmt_opt(s.median), tags.median)
        ),
        format!(
            "\tStandard Deviation:\t{}",
            tagged(fmt_opt(s.stdev), tags.stdev)
        ),
        BAR.to_string(),
    ]
    .join("\n")
}

/// Cross-file DNS report block with per-metric verdict tags.
pub fn global_dns_report(s: &Summary, tags: &MetricTags) -> String {
    [
        BAR.to_string(),
        "\tGLOBAL DNS STATISTICS REPORT".to_string(),
        format!("\tTotal Successful Lookups:\t{}", s.success),
        format!("\tTotal Errors/Timeouts:\t\t{}", s.failures),
        format!("\tMinimum LookUp Time:\t\t{}", fmt_opt(s.minimum)),
        format!("\tMaximum LookUp Time:\t\t{}", fmt_opt(s.maximum)),
        format!(
            "\tSuccess Rate:\t\t\t{}",
            tagged(fmt_rate(s.success_rate), tags.success_rate)
        ),
        format!(
            "\tAverage LookUp Time:\t\t{}",
            tagged(fmt_opt(s.average), tags.average)
        ),
        format!(
            "\tMedian LookUp Time:\t\t{}",
            tagged(fmt_opt(s.median), tags.median)
        ),
        format!(
            "\tStandard Deviation:\t\t{}",
            tagged(fmt_opt(s.stdev), tags.stdev)
        ),
        BAR.to_string(),
    ]
    .join("\n")
}

/// Packet-loss report block.
pub fn packet_report(
    total: Option<u64>,
    flagged: Option<u64>,
    rate: Option<f64>,
    status: Status,
) -> String {
    [
        BAR.to_string(),
        "\tGLOBAL PACKET STATISTICS REPORT".to_string(),
        format!("\tTotal Packets:\t{}", fmt_count(total)),
        format!(
            "\tRetransmitted, Lost or Duplicated Packets:\t{}",
            fmt_count(flagged)
        ),
        format!(
            "\tPacket Loss Rate:\t{}",
            tagged(fmt_rate(rate), status)
        ),
        BAR.to_string(),
    ]
    .join("\n")
}
