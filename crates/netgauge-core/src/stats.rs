//! Per-file aggregation and cross-file reduction.
//!
//! Both are pure functions over immutable inputs; nothing here keeps
//! running state between calls.

use crate::model::{Record, Summary};

/// Reduce the records of one input file into a [`Summary`].
///
/// Used identically for ping and DNS sources: only the parsing that
/// produced the records differs. A success with a duration of exactly 0
/// counts as an attempt but contributes no sample.
pub fn aggregate(target: String, source: Option<String>, records: &[Record]) -> Summary {
    let mut success = 0u64;
    let mut failures = 0u64;
    let mut minimum: Option<f64> = None;
    let mut maximum: Option<f64> = None;
    let mut samples: Vec<f64> = Vec::with_capacity(records.len());

    for record in records {
        match *record {
            Record::Success(ms) => {
                success += 1;
                // A zero reading means the probe reported no usable duration.
                if ms == 0.0 {
                    continue;
                }
                minimum = Some(minimum.map_or(ms, |m| m.min(ms)));
                maximum = Some(maximum.map_or(ms, |m| m.max(ms)));
                samples.push(ms);
            }
            Record::Failure => failures += 1,
        }
    }

    let (average, median, stdev) = if samples.is_empty() {
        (None, None, None)
    } else {
        (
            Some(round1(mean(&samples))),
            median_of(&samples),
            Some(round1(sample_stdev(&samples))),
        )
    };

    let attempts = success + failures;
    let success_rate = (attempts > 0).then(|| round2(success as f64 / attempts as f64));

    Summary {
        target,
        source,
        minimum,
        maximum,
        average,
        median,
        stdev,
        success,
        failures,
        success_rate,
    }
}

/// Combine per-file summaries into one cross-file summary.
///
/// Success and failure counts are pooled, so the global success rate is
/// computed over raw attempt counts rather than averaged across files.
/// Average and stdev are means of the per-file values, the median is the
/// median of per-file medians; files with no value for a metric are
/// skipped. Input order is irrelevant.
pub fn merge(summaries: &[Summary]) -> Summary {
    let success: u64 = summaries.iter().map(|s| s.success).sum();
    let failures: u64 = summaries.iter().map(|s| s.failures).sum();
    let attempts = success + failures;

    let averages: Vec<f64> = summaries.iter().filter_map(|s| s.average).collect();
    let medians: Vec<f64> = summaries.iter().filter_map(|s| s.median).collect();
    let stdevs: Vec<f64> = summaries.iter().filter_map(|s| s.stdev).collect();

    Summary {
        target: String::new(),
        source: None,
        minimum: summaries.iter().filter_map(|s| s.minimum).reduce(f64::min),
        maximum: summaries.iter().filter_map(|s| s.maximum).reduce(f64::max),
        average: (!averages.is_empty()).then(|| round1(mean(&averages))),
        median: median_of(&medians),
        stdev: (!stdevs.is_empty()).then(|| round1(mean(&stdevs))),
        success,
        failures,
        success_rate: (attempts > 0).then(|| round2(success as f64 / attempts as f64)),
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Statistical median; `None` for an empty slice.
fn median_of(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}

/// Sample standard deviation (Bessel's correction, n-1). A single sample
/// has a deviation of exactly 0.0, not an undefined one.
fn sample_stdev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}

pub(crate) fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_of(records: &[Record]) -> Summary {
        aggregate("gw".into(), None, records)
    }

    #[test]
    fn counts_cover_every_record() {
        let records = [
            Record::Success(12.0),
            Record::Failure,
            Record::Success(0.0),
            Record::Failure,
            Record::Success(30.0),
        ];
        let s = summary_of(&records);
        assert_eq!(s.success + s.failures, records.len() as u64);
    }

    #[test]
    fn zero_duration_counts_as_success_but_not_as_sample() {
        let s = summary_of(&[
            Record::Success(50.0),
            Record::Success(60.0),
            Record::Success(0.0),
            Record::Failure,
        ]);
        assert_eq!(s.success, 3);
        assert_eq!(s.failures, 1);
        assert_eq!(s.success_rate, Some(0.75));
        assert_eq!(s.minimum, Some(50.0));
        assert_eq!(s.maximum, Some(60.0));
        assert_eq!(s.average, Some(55.0));
        assert_eq!(s.median, Some(55.0));
        // sample stdev of {50, 60} is 7.07..., rounded to one decimal
        assert_eq!(s.stdev, Some(7.1));
    }

    #[test]
    fn single_sample_has_zero_stdev() {
        let s = summary_of(&[Record::Success(42.0)]);
        assert_eq!(s.stdev, Some(0.0));
        assert_eq!(s.average, Some(42.0));
        assert_eq!(s.median, Some(42.0));
    }

    #[test]
    fn no_records_yields_no_metrics() {
        let s = summary_of(&[]);
        assert_eq!(s.success, 0);
        assert_eq!(s.failures, 0);
        assert_eq!(s.success_rate, None);
        assert_eq!(s.minimum, None);
        assert_eq!(s.maximum, None);
        assert_eq!(s.average, None);
        assert_eq!(s.median, None);
        assert_eq!(s.stdev, None);
    }

    #[test]
    fn only_zero_successes_define_rate_but_no_stats() {
        let s = summary_of(&[Record::Success(0.0), Record::Success(0.0)]);
        assert_eq!(s.success, 2);
        assert_eq!(s.success_rate, Some(1.0));
        assert_eq!(s.average, None);
        assert_eq!(s.median, None);
        assert_eq!(s.stdev, None);
        assert_eq!(s.minimum, None);
    }

    #[test]
    fn median_of_even_sample_count_is_midpoint() {
        let s = summary_of(&[
            Record::Success(10.0),
            Record::Success(20.0),
            Record::Success(30.0),
            Record::Success(40.0),
        ]);
        assert_eq!(s.median, Some(25.0));
    }

    #[test]
    fn merged_rate_is_pooled_not_averaged() {
        let perfect = summary_of(&[Record::Success(10.0); 10]);
        let broken = summary_of(&[Record::Failure, Record::Failure]);
        assert_eq!(perfect.success_rate, Some(1.0));
        assert_eq!(broken.success_rate, Some(0.0));

        let global = merge(&[perfect, broken]);
        // 10 successes over 12 attempts, not (1.0 + 0.0) / 2
        assert_eq!(global.success_rate, Some(0.83));
        assert_eq!(global.success, 10);
        assert_eq!(global.failures, 2);
    }

    #[test]
    fn merge_takes_average_of_averages_and_median_of_medians() {
        let a = summary_of(&[Record::Success(100.0), Record::Success(200.0)]);
        let b = summary_of(&[Record::Success(10.0)]);
        let c = summary_of(&[Record::Failure]); // no metrics, skipped

        let global = merge(&[a, b, c]);
        assert_eq!(global.average, Some(80.0)); // (150.0 + 10.0) / 2
        assert_eq!(global.median, Some(80.0)); // median of [150.0, 10.0]
        assert_eq!(global.minimum, Some(10.0));
        assert_eq!(global.maximum, Some(200.0));
    }

    #[test]
    fn merge_of_nothing_is_empty() {
        let global = merge(&[]);
        assert_eq!(global.success_rate, None);
        assert_eq!(global.average, None);
        assert_eq!(global.median, None);
        assert_eq!(global.stdev, None);
        assert_eq!(global.minimum, None);
        assert_eq!(global.maximum, None);
    }

    #[test]
    fn merge_skips_files_without_metrics() {
        let empty = summary_of(&[]);
        let real = summary_of(&[Record::Success(30.0), Record::Success(50.0)]);
        let global = merge(&[empty, real.clone()]);
        assert_eq!(global.average, real.average);
        assert_eq!(global.median, real.median);
        assert_eq!(global.stdev, real.stdev);
    }
}
