//! Record-file parsing: one module per log layout, over a shared strict
//! line-oriented CSV reader.
//!
//! Parsing is all-or-nothing per file. A malformed row or a short row is
//! a [`SourceError::Parse`] for the whole file, never a partial summary.

pub mod dns;
pub mod ping;

use crate::errors::SourceError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A record file split into a header and raw field rows.
#[derive(Debug)]
pub(crate) struct Table {
    columns: Vec<String>,
    /// (line number, fields); line numbers are 1-based, header included.
    pub(crate) rows: Vec<(usize, Vec<String>)>,
}

impl Table {
    /// Read and split a CSV file. Blank lines are skipped and a trailing
    /// CR is tolerated. A file with no lines at all parses to an empty
    /// table.
    pub(crate) fn read(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|source| SourceError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);

        let mut columns: Option<Vec<String>> = None;
        let mut rows = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| SourceError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let fields: Vec<String> = line.split(',').map(str::to_string).collect();
            match columns {
                None => columns = Some(fields),
                Some(_) => rows.push((idx + 1, fields)),
            }
        }

        Ok(Self {
            columns: columns.unwrap_or_default(),
            rows,
        })
    }

    pub(crate) fn column(&self, name: &str, path: &Path) -> Result<usize, SourceError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| SourceError::parse(path, 1, format!("missing column {name:?}")))
    }
}

pub(crate) fn field<'a>(
    fields: &'a [String],
    idx: usize,
    path: &Path,
    line: usize,
) -> Result<&'a str, SourceError> {
    fields
        .get(idx)
        .map(String::as_str)
        .ok_or_else(|| SourceError::parse(path, line, "row has too few fields"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("temp file");
        f.write_all(content.as_bytes()).expect("write");
        f
    }

    #[test]
    fn reads_header_and_rows() {
        let f = write_file("A,B\n1,2\n3,4\n");
        let t = Table::read(f.path()).unwrap();
        assert_eq!(t.column("B", f.path()).unwrap(), 1);
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0].0, 2); // header is line 1
        assert_eq!(t.rows[1].1, vec!["3".to_string(), "4".to_string()]);
    }

    #[test]
    fn skips_blank_lines_and_tolerates_crlf() {
        let f = write_file("A,B\r\n\r\n1,2\r\n");
        let t = Table::read(f.path()).unwrap();
        assert_eq!(t.rows.len(), 1);
        assert_eq!(t.rows[0].1, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn empty_file_is_an_empty_table() {
        let f = write_file("");
        let t = Table::read(f.path()).unwrap();
        assert!(t.rows.is_empty());
    }

    #[test]
    fn missing_column_is_a_parse_error() {
        let f = write_file("A,B\n1,2\n");
        let err = Table::read(f.path())
            .unwrap()
            .column("C", f.path())
            .unwrap_err();
        assert!(matches!(err, SourceError::Parse { row: 1, .. }));
    }

    #[test]
    fn missing_file_is_a_file_access_error() {
        let err = Table::read(Path::new("/nonexistent/Ping_x.csv")).unwrap_err();
        assert!(matches!(err, SourceError::FileAccess { .. }));
    }
}
