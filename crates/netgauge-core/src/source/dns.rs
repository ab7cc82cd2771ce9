//! DNS lookup logs: CSV rows with an error column and a float lookup
//! time. Resolver and target identity comes from the file name.

use super::{field, Table};
use crate::errors::SourceError;
use crate::model::{Record, Summary};
use crate::stats;
use lazy_static::lazy_static;
use regex::Regex;
use std::path::Path;
use tracing::debug;

const ERROR: &str = "Error";
const LOOKUP_TIME: &str = "LookUp Time in ms";

lazy_static! {
    static ref IDENTITY: Regex = Regex::new(r"DNS\((.*?)\)_LU\((.*?)\)").unwrap();
}

/// Resolver source and lookup target from a log file name following the
/// `DNS(<source>)_LU(<target>)` convention, e.g.
/// `DNS(8.8.8.8)_LU(www.example.com)_170225113736`. Both are empty when
/// the name does not match.
pub fn identity(path: &Path) -> (String, String) {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    match IDENTITY.captures(name) {
        Some(caps) => (caps[1].to_string(), caps[2].to_string()),
        None => (String::new(), String::new()),
    }
}

/// Parse one DNS lookup log and reduce it to a [`Summary`].
///
/// A row is a success iff its `Error` field is empty; its lookup time is
/// then parsed as float milliseconds.
pub fn collect(path: &Path) -> Result<Summary, SourceError> {
    let (source, target) = identity(path);

    let table = Table::read(path)?;
    if table.rows.is_empty() {
        return Ok(stats::aggregate(target, Some(source), &[]));
    }

    let error_col = table.column(ERROR, path)?;
    let time_col = table.column(LOOKUP_TIME, path)?;

    let mut records = Vec::with_capacity(table.rows.len());
    for (line, fields) in &table.rows {
        if field(fields, error_col, path, *line)?.is_empty() {
            let raw = field(fields, time_col, path, *line)?;
            let ms: f64 = raw.trim().parse().map_err(|_| {
                SourceError::parse(path, *line, format!("invalid lookup time {raw:?}"))
            })?;
            records.push(Record::Success(ms));
        } else {
            records.push(Record::Failure);
        }
    }

    let summary = stats::aggregate(target, Some(source), &records);
    debug!(
        path = %path.display(),
        attempts = summary.attempts(),
        "parsed dns log"
    );
    Ok(summary)
}
