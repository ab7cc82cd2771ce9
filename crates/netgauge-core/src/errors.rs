use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading or parsing one record file.
///
/// Both variants are fatal for the file: a malformed row never degrades
/// into a partial summary.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: row {row}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        /// 1-based line number in the file (the header is line 1).
        row: usize,
        reason: String,
    },
}

impl SourceError {
    pub(crate) fn parse(path: &std::path::Path, row: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            row,
            reason: reason.into(),
        }
    }
}
