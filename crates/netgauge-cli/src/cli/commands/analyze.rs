//! The analyze command: discover inputs, run the ping, DNS and packet
//! pipelines, append the report files, echo every block to the console.

use crate::capture;
use crate::discover;
use crate::sink::{self, ReportSink};
use anyhow::{Context, Result};
use clap::Args;
use netgauge_core::classify::{grade_dns, grade_ping};
use netgauge_core::{packet, report, source, stats, SourceError, Summary};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Directory holding the diagnostic logs (and receiving the reports)
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,

    /// Additionally print the global summaries as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs) -> Result<i32> {
    let inputs = discover::scan(&args.dir)?;
    eprintln!(
        ">>> Analyzing {}: {} ping logs, {} dns logs, capture {}",
        args.dir.display(),
        inputs.ping.len(),
        inputs.dns.len(),
        if inputs.capture.is_some() {
            "found"
        } else {
            "missing"
        },
    );

    let ping_sink = ReportSink::new(args.dir.join(sink::REPORT_PING));
    let dns_sink = ReportSink::new(args.dir.join(sink::REPORT_DNS));
    let summary_sink = ReportSink::new(args.dir.join(sink::REPORT_SUMMARY));

    let ping_summaries =
        per_file_reports(&inputs.ping, source::ping::collect, report::ping_report, &ping_sink)
            .context("ping analysis failed")?;
    let ping_global = stats::merge(&ping_summaries);
    let ping_tags = grade_ping(&ping_global);
    let block = report::global_ping_report(&ping_global, &ping_tags);
    println!("{block}");
    ping_sink.append(&block)?;
    summary_sink.append(&block)?;

    let dns_summaries =
        per_file_reports(&inputs.dns, source::dns::collect, report::dns_report, &dns_sink)
            .context("dns analysis failed")?;
    let dns_global = stats::merge(&dns_summaries);
    let dns_tags = grade_dns(&dns_global);
    let block = report::global_dns_report(&dns_global, &dns_tags);
    println!("{block}");
    dns_sink.append(&block)?;
    summary_sink.append(&block)?;

    let (total, flagged) = match &inputs.capture {
        Some(capture_file) => (
            capture::count_frames(capture_file, None),
            capture::count_frames(capture_file, Some(capture::RETRANSMISSION_FILTER)),
        ),
        None => {
            eprintln!(">>> No capture file found; skipping packet analysis");
            (None, None)
        }
    };
    let rate = packet::loss_rate(total, flagged);
    let status = packet::classify_loss(rate);
    let block = report::packet_report(total, flagged, rate, status);
    println!("{block}");
    summary_sink.append(&block)?;

    if args.json {
        let doc = serde_json::json!({
            "ping": { "summary": ping_global, "tags": ping_tags },
            "dns": { "summary": dns_global, "tags": dns_tags },
            "packets": {
                "total": total,
                "flagged": flagged,
                "loss_rate": rate,
                "status": status,
            },
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    }

    Ok(0)
}

/// Parse each file, echo and append its report block, and collect the
/// per-file summaries for the global reduction. A file that fails to read
/// or parse aborts the run: strict parsing, no zero-filled summaries.
fn per_file_reports(
    files: &[PathBuf],
    collect: fn(&Path) -> Result<Summary, SourceError>,
    render: fn(&Summary) -> String,
    sink: &ReportSink,
) -> Result<Vec<Summary>> {
    let mut summaries = Vec::with_capacity(files.len());
    for path in files {
        let summary = collect(path).with_context(|| path.display().to_string())?;
        let block = render(&summary);
        println!("{block}");
        sink.append(&block)?;
        summaries.push(summary);
    }
    Ok(summaries)
}
