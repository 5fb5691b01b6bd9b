use std::{
    env, fs,
    path::{Path, PathBuf},
};

use parking_lot::Mutex;

use crate::BenchSummaryError;
use crate::summary::SuiteSummary;

static REPORT_FILE_OVERRIDE: Mutex<Option<PathBuf>> = Mutex::new(None);

pub fn set_report_file_path(path: PathBuf) {
    *REPORT_FILE_OVERRIDE.lock() = Some(path);
}

/// Upsert a summary into the report file, keyed by suite name. The file holds
/// a JSON array sorted by name.
pub fn write_summary_report(summary: &SuiteSummary) -> Result<(), BenchSummaryError> {
    if summary.name.is_empty() {
        return Err(BenchSummaryError::invalid_input(
            "suite summary must carry a name",
        ));
    }
    let path = report_file();
    let mut summaries = load_summaries_from(&path)?;
    summaries.retain(|s| s.name != summary.name);
    summaries.push(summary.clone());
    summaries.sort_by(|a, b| a.name.cmp(&b.name));
    let data = serde_json::to_vec_pretty(&summaries)
        .map_err(|e| BenchSummaryError::invalid_input(e.to_string()))?;
    fs::write(path, data).map_err(|e| BenchSummaryError::report(e.to_string()))
}

pub fn load_summary_reports() -> Result<Vec<SuiteSummary>, BenchSummaryError> {
    let path = report_file();
    load_summaries_from(&path)
}

pub fn find_summary_report(name: &str) -> Result<SuiteSummary, BenchSummaryError> {
    load_summary_reports()?
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| BenchSummaryError::not_found(format!("suite summary {name}")))
}

fn report_file() -> PathBuf {
    if let Some(path) = REPORT_FILE_OVERRIDE.lock().clone() {
        return path;
    }
    if let Ok(path) = env::var("BENCHSUMMARY_REPORT_FILE") {
        return PathBuf::from(path);
    }
    Path::new("benchsummary_report.json").to_path_buf()
}

fn load_summaries_from(path: &Path) -> Result<Vec<SuiteSummary>, BenchSummaryError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read(path).map_err(|e| BenchSummaryError::report(e.to_string()))?;
    if data.is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_slice(&data).map_err(|e| BenchSummaryError::invalid_input(e.to_string()))
}
