use serde::{Deserialize, Serialize};

/// Run configuration echoed from the benchmarking engine, per case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunOptions {
    pub delay: f64,
    pub init_count: u64,
    pub min_time: f64,
    pub max_time: f64,
    pub min_samples: usize,
}

/// Engine-computed statistics for one case, plus the raw timing sample.
/// Estimation of these figures is owned by the engine; they arrive here
/// already materialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseStats {
    pub mean: f64,
    pub deviation: f64,
    pub margin_of_error: f64,
    pub relative_margin_of_error: f64,
    pub standard_error: f64,
    pub variance: f64,
    pub sample: Vec<f64>,
}

/// One measured benchmark case as delivered by the engine. `id` is unique
/// within a suite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawCaseRecord {
    pub id: u64,
    pub name: String,
    pub ops_per_sec: f64,
    pub stats: CaseStats,
    pub options: RunOptions,
    pub deferred: bool,
}

/// Suite-completion notification: the ordered case records plus the engine's
/// fastest/slowest classifications, resolved to case ids. Case order here is
/// the index space the summary's fastest/slowest positions refer to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuiteRun {
    pub name: String,
    pub timestamp_ms: u64,
    pub cases: Vec<RawCaseRecord>,
    pub fastest_ids: Vec<u64>,
    pub slowest_ids: Vec<u64>,
}

impl SuiteRun {
    pub fn fastest(&self) -> &[u64] {
        &self.fastest_ids
    }

    pub fn slowest(&self) -> &[u64] {
        &self.slowest_ids
    }
}
