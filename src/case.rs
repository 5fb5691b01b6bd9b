use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::record::{RawCaseRecord, RunOptions};
use crate::rounding::round_to;

/// Full-precision statistics carried alongside the rounded display figures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseDetails {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub standard_deviation: f64,
    pub margin_of_error: f64,
    pub relative_margin_of_error: f64,
    pub standard_error_of_mean: f64,
    pub sample_variance: f64,
    pub sample_results: Vec<f64>,
}

/// Normalized result for one benchmark case. Built once, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseResult {
    pub id: u64,
    pub name: String,
    pub ops: f64,
    pub margin: f64,
    pub options: RunOptions,
    pub samples: usize,
    pub deferred: bool,
    pub details: CaseDetails,
    pub completed: bool,
}

/// Normalize one raw case record. Infallible: an empty sample yields NaN for
/// min/max/median and `completed = false`.
pub fn build_case_result(record: &RawCaseRecord) -> CaseResult {
    let sample = &record.stats.sample;
    CaseResult {
        id: record.id,
        name: record.name.clone(),
        ops: record.ops_per_sec,
        margin: round_to(record.stats.relative_margin_of_error, 2),
        options: record.options.clone(),
        samples: sample.len(),
        deferred: record.deferred,
        details: CaseDetails {
            min: sample_extreme(sample, Ordering::Less),
            max: sample_extreme(sample, Ordering::Greater),
            mean: record.stats.mean,
            median: median(sample),
            standard_deviation: record.stats.deviation,
            margin_of_error: record.stats.margin_of_error,
            relative_margin_of_error: record.stats.relative_margin_of_error,
            standard_error_of_mean: record.stats.standard_error,
            sample_variance: record.stats.variance,
            sample_results: sample.clone(),
        },
        completed: !sample.is_empty(),
    }
}

/// Median over an owned copy of the sample: the caller's sequence is never
/// reordered. Even counts average the two central elements, odd counts take
/// the middle one.
pub fn median(sample: &[f64]) -> f64 {
    if sample.is_empty() {
        return f64::NAN;
    }
    let mut sorted = sample.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

fn sample_extreme(sample: &[f64], direction: Ordering) -> f64 {
    sample
        .iter()
        .copied()
        .reduce(|best, value| {
            match value.partial_cmp(&best) {
                Some(ord) if ord == direction => value,
                _ => best,
            }
        })
        .unwrap_or(f64::NAN)
}
