//! Three-tier grading of summary metrics against calibrated thresholds.

use crate::model::Summary;
use serde::Serialize;
use std::fmt;

/// Verdict for one metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Pass,
    Warning,
    Fail,
    /// The metric had no data to grade.
    Unknown,
}

impl Status {
    /// Report tag, e.g. `(WARNING)`. Empty for [`Status::Unknown`]: a
    /// metric without data carries no verdict in report text.
    pub fn tag(&self) -> &'static str {
        match self {
            Status::Pass => "(PASS)",
            Status::Warning => "(WARNING)",
            Status::Fail => "(FAIL)",
            Status::Unknown => "",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Pass => "PASS",
            Status::Warning => "WARNING",
            Status::Fail => "FAIL",
            Status::Unknown => "UNKNOWN",
        })
    }
}

/// Which side of a boundary denotes degraded health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Latency and jitter: exceeding a boundary is worse.
    HigherWorse,
    /// Success rate: falling below a boundary is worse.
    LowerWorse,
}

/// A pass/fail boundary pair for one metric.
#[derive(Debug, Clone, Copy)]
pub struct Threshold {
    pub pass: f64,
    pub fail: f64,
    pub direction: Direction,
}

impl Threshold {
    pub const fn higher_worse(pass: f64, fail: f64) -> Self {
        Self {
            pass,
            fail,
            direction: Direction::HigherWorse,
        }
    }

    pub const fn lower_worse(pass: f64, fail: f64) -> Self {
        Self {
            pass,
            fail,
            direction: Direction::LowerWorse,
        }
    }

    /// Strict comparisons on both boundaries: a value exactly equal to a
    /// boundary stays in the better tier.
    pub fn classify(&self, value: Option<f64>) -> Status {
        let Some(v) = value else {
            return Status::Unknown;
        };
        match self.direction {
            Direction::HigherWorse if v > self.fail => Status::Fail,
            Direction::HigherWorse if v > self.pass => Status::Warning,
            Direction::HigherWorse => Status::Pass,
            Direction::LowerWorse if v < self.fail => Status::Fail,
            Direction::LowerWorse if v < self.pass => Status::Warning,
            Direction::LowerWorse => Status::Pass,
        }
    }
}

/// Fixed calibration constants. Fail boundaries come from a reference run
/// against a known-bad access point.
pub mod thresholds {
    use super::Threshold;

    pub const PING_SUCCESS_RATE: Threshold = Threshold::lower_worse(0.97, 0.69);
    pub const PING_AVERAGE_MS: Threshold = Threshold::higher_worse(107.1, 1894.2);
    pub const PING_MEDIAN_MS: Threshold = Threshold::higher_worse(96.5, 1633.75);
    pub const PING_STDEV: Threshold = Threshold::higher_worse(102.0, 1384.8);

    pub const DNS_SUCCESS_RATE: Threshold = Threshold::lower_worse(0.98, 0.80);
    pub const DNS_AVERAGE_MS: Threshold = Threshold::higher_worse(1544.1, 2736.8);
    pub const DNS_MEDIAN_MS: Threshold = Threshold::higher_worse(518.618_65, 1_088.629_35);
    pub const DNS_STDEV: Threshold = Threshold::higher_worse(695.7, 2645.1);
}

/// Per-metric verdicts for one global summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricTags {
    pub success_rate: Status,
    pub average: Status,
    pub median: Status,
    pub stdev: Status,
}

pub fn grade_ping(summary: &Summary) -> MetricTags {
    MetricTags {
        success_rate: thresholds::PING_SUCCESS_RATE.classify(summary.success_rate),
        average: thresholds::PING_AVERAGE_MS.classify(summary.average),
        median: thresholds::PING_MEDIAN_MS.classify(summary.median),
        stdev: thresholds::PING_STDEV.classify(summary.stdev),
    }
}

pub fn grade_dns(summary: &Summary) -> MetricTags {
    MetricTags {
        success_rate: thresholds::DNS_SUCCESS_RATE.classify(summary.success_rate),
        average: thresholds::DNS_AVERAGE_MS.classify(summary.average),
        median: thresholds::DNS_MEDIAN_MS.classify(summary.median),
        stdev: thresholds::DNS_STDEV.classify(summary.stdev),
    }
}
