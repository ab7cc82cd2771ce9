//! Ping latency logs: CSV rows of target, status, and integer latency.

use super::{field, Table};
use crate::errors::SourceError;
use crate::model::{Record, Summary};
use crate::stats;
use std::path::Path;
use tracing::debug;

const TARGET: &str = "Target";
const STATUS: &str = "Status";
const LATENCY: &str = "Latency(ms)";
const STATUS_SUCCESS: &str = "Success";

/// Parse one ping log and reduce it to a [`Summary`].
///
/// The target is taken from the first row; a file without rows produces
/// an empty summary with an empty target. Any status other than
/// `Success` counts as a timeout.
pub fn collect(path: &Path) -> Result<Summary, SourceError> {
    let table = Table::read(path)?;
    if table.rows.is_empty() {
        return Ok(stats::aggregate(String::new(), None, &[]));
    }

    let target_col = table.column(TARGET, path)?;
    let status_col = table.column(STATUS, path)?;
    let latency_col = table.column(LATENCY, path)?;

    let (first_line, first_fields) = &table.rows[0];
    let target = field(first_fields, target_col, path, *first_line)?.to_string();

    let mut records = Vec::with_capacity(table.rows.len());
    for (line, fields) in &table.rows {
        if field(fields, status_col, path, *line)? == STATUS_SUCCESS {
            let raw = field(fields, latency_col, path, *line)?;
            let ms: i64 = raw.trim().parse().map_err(|_| {
                SourceError::parse(path, *line, format!("invalid latency {raw:?}"))
            })?;
            records.push(Record::Success(ms as f64));
        } else {
            records.push(Record::Failure);
        }
    }

    let summary = stats::aggregate(target, None, &records);
    debug!(
        path = %path.display(),
        attempts = summary.attempts(),
        "parsed ping log"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn ping_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("temp file");
        f.write_all(content.as_bytes()).expect("write");
        f
    }

    #[test]
    fn collects_target_and_statistics() {
        let f = ping_file(
            "Target,Status,Latency(ms)\n\
             192.168.1.1,Success,50\n\
             192.168.1.1,Success,60\n\
             192.168.1.1,Success,0\n\
             192.168.1.1,Timeout,0\n",
        );
        let s = collect(f.path()).unwrap();
        assert_eq!(s.target, "192.168.1.1");
        assert_eq!(s.success, 3);
        assert_eq!(s.failures, 1);
        assert_eq!(s.success_rate, Some(0.75));
        assert_eq!(s.minimum, Some(50.0));
        assert_eq!(s.maximum, Some(60.0));
        assert_eq!(s.average, Some(55.0));
        assert_eq!(s.median, Some(55.0));
        assert_eq!(s.stdev, Some(7.1));
    }

    #[test]
    fn header_only_file_yields_empty_summary() {
        let f = ping_file("Target,Status,Latency(ms)\n");
        let s = collect(f.path()).unwrap();
        assert_eq!(s.target, "");
        assert_eq!(s.attempts(), 0);
        assert_eq!(s.success_rate, None);
    }

    #[test]
    fn non_integer_latency_fails_the_file() {
        let f = ping_file("Target,Status,Latency(ms)\ngw,Success,fast\n");
        let err = collect(f.path()).unwrap_err();
        assert!(matches!(err, SourceError::Parse { row: 2, .. }));
    }

    #[test]
    fn short_row_fails_the_file() {
        let f = ping_file("Target,Status,Latency(ms)\ngw,Success,10\ngw\n");
        let err = collect(f.path()).unwrap_err();
        assert!(matches!(err, SourceError::Parse { row: 3, .. }));
    }

    #[test]
    fn failure_rows_do_not_need_a_parseable_latency() {
        let f = ping_file("Target,Status,Latency(ms)\ngw,Timeout,n/a\ngw,Success,25\n");
        let s = collect(f.path()).unwrap();
        assert_eq!(s.success, 1);
        assert_eq!(s.failures, 1);
        assert_eq!(s.average, Some(25.0));
    }
}
