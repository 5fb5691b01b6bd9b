use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::record::{CaseStats, RawCaseRecord, RunOptions, SuiteRun};

const SAMPLE_LEN: usize = 30;

/// Throughput profile of a generated suite.
#[derive(Clone, Debug)]
pub enum SuiteShape {
    /// Ops spaced evenly between a base rate and `spread` times the base.
    Uniform { spread: f64 },
    /// Cases bunched into groups with near-equal throughput per group.
    Clustered { clusters: usize },
    /// Every case within `separation` relative distance of the base rate;
    /// stresses the distinct-rounding escalation.
    NearTies { separation: f64 },
}

/// Generate a deterministic synthetic suite run with internally consistent
/// statistics and engine-style fastest/slowest classification.
pub fn generate_suite(shape: SuiteShape, case_count: usize, seed: u64) -> SuiteRun {
    assert!(case_count > 0, "case_count must be positive");
    let mut rng = StdRng::seed_from_u64(seed);
    let base_ops = 10_000.0;
    let cases: Vec<RawCaseRecord> = (0..case_count)
        .map(|idx| {
            let ops = case_ops(&shape, idx, case_count, base_ops);
            build_case(idx as u64, ops, &mut rng)
        })
        .collect();

    let fastest_ids = classify(&cases, |ops, best| ops > best);
    let slowest_ids = classify(&cases, |ops, best| ops < best);

    SuiteRun {
        name: format!("generated_{case_count}"),
        timestamp_ms: 1_700_000_000_000,
        cases,
        fastest_ids,
        slowest_ids,
    }
}

fn case_ops(shape: &SuiteShape, idx: usize, count: usize, base: f64) -> f64 {
    let step = idx as f64 / count.max(2).saturating_sub(1) as f64;
    match shape {
        SuiteShape::Uniform { spread } => base * (1.0 + step * (spread - 1.0)),
        SuiteShape::Clustered { clusters } => {
            let group = idx % (*clusters).max(1);
            base * (1.0 + group as f64) + idx as f64 * 0.001
        }
        SuiteShape::NearTies { separation } => base * (1.0 + step * separation),
    }
}

fn build_case(id: u64, ops: f64, rng: &mut StdRng) -> RawCaseRecord {
    let period = 1.0 / ops;
    let sample: Vec<f64> = (0..SAMPLE_LEN)
        .map(|_| period * (1.0 + rng.gen_range(-0.02..0.02)))
        .collect();
    let mean = sample.iter().sum::<f64>() / sample.len() as f64;
    let variance = sample.iter().map(|s| (s - mean).powi(2)).sum::<f64>()
        / (sample.len() - 1) as f64;
    let deviation = variance.sqrt();
    let standard_error = deviation / (sample.len() as f64).sqrt();
    let margin_of_error = standard_error * 1.96;
    RawCaseRecord {
        id,
        name: format!("case_{id}"),
        ops_per_sec: ops,
        stats: CaseStats {
            mean,
            deviation,
            margin_of_error,
            relative_margin_of_error: margin_of_error / mean * 100.0,
            standard_error,
            variance,
            sample,
        },
        options: RunOptions {
            delay: 0.005,
            init_count: 1,
            min_time: 0.05,
            max_time: 5.0,
            min_samples: 5,
        },
        deferred: false,
    }
}

fn classify(cases: &[RawCaseRecord], beats: impl Fn(f64, f64) -> bool) -> Vec<u64> {
    let mut best = match cases.first() {
        Some(case) => case.ops_per_sec,
        None => return Vec::new(),
    };
    for case in cases {
        if beats(case.ops_per_sec, best) {
            best = case.ops_per_sec;
        }
    }
    cases
        .iter()
        .filter(|case| case.ops_per_sec == best)
        .map(|case| case.id)
        .collect()
}
