//! Suite-level summarization for micro-benchmark runs.
//! Run Criterion benchmarks with `cargo bench` to inspect reports under `target/criterion`.

pub mod case;
pub mod errors;
pub mod record;
pub mod report;
pub mod rounding;
pub mod sample_data;
pub mod summary;

pub use crate::case::{CaseDetails, CaseResult, build_case_result};
pub use crate::errors::BenchSummaryError;
pub use crate::record::{CaseStats, RawCaseRecord, RunOptions, SuiteRun};
pub use crate::summary::{
    CaseRank, DEFAULT_PRECISION, RankedResult, SuiteSummary, build_suite_summary,
};
