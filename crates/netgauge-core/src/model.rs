use serde::Serialize;

/// Outcome of a single diagnostic attempt, parsed from one log row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    /// The attempt succeeded, with the measured duration in milliseconds.
    Success(f64),
    /// The attempt timed out or returned an error.
    Failure,
}

/// Summary statistics for one sample set: a single input file, or the
/// global reduction over all files of a source type.
///
/// Metric fields are `None` when no qualifying successful sample exists.
/// `success_rate` is `None` only when there were no attempts at all.
/// A success with a recorded duration of exactly 0 counts toward
/// `success` (and therefore `success_rate`) but is excluded from the
/// min/max/average/median/stdev inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Measured endpoint. Empty for the global reduction.
    pub target: String,
    /// Resolver queried; present for DNS summaries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub average: Option<f64>,
    pub median: Option<f64>,
    pub stdev: Option<f64>,
    pub success: u64,
    pub failures: u64,
    pub success_rate: Option<f64>,
}

impl Summary {
    pub fn attempts(&self) -> u64 {
        self.success + self.failures
    }
}
