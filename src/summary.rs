use serde::{Deserialize, Serialize};

use crate::case::{CaseResult, build_case_result};
use crate::record::SuiteRun;
use crate::rounding::{round_to, round_to_distinct};

pub const DEFAULT_PRECISION: u32 = 2;

/// Position lookups that miss produce this instead of failing the summary;
/// it signals a data-consistency fault in the upstream engine.
pub const NOT_FOUND: i64 = -1;

/// A case result augmented with its slowdown relative to the fastest case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub case: CaseResult,
    pub percent_slower: f64,
}

/// One fastest/slowest classification entry, by position in the results
/// sequence. `index` is [`NOT_FOUND`] when the classified id has no matching
/// result, in which case `name` is empty.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseRank {
    pub name: String,
    pub index: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuiteSummary {
    pub name: String,
    pub timestamp_ms: u64,
    pub results: Vec<RankedResult>,
    pub fastest: Vec<CaseRank>,
    pub slowest: Vec<CaseRank>,
}

/// Summarize a completed suite: normalize every case in the run's enumeration
/// order, round the ops column without collapsing distinct values, resolve
/// the fastest/slowest classifications to positions, and compute each case's
/// slowdown against the first fastest case.
///
/// `precision` is the starting decimal-place count for the distinct-rounding
/// search; [`DEFAULT_PRECISION`] matches typical report output.
pub fn build_suite_summary(run: &SuiteRun, precision: u32) -> SuiteSummary {
    let mut cases: Vec<CaseResult> = run.cases.iter().map(build_case_result).collect();

    let ops: Vec<f64> = cases.iter().map(|c| c.ops).collect();
    for (case, rounded) in cases.iter_mut().zip(round_to_distinct(&ops, precision)) {
        case.ops = rounded;
    }

    let fastest_ids = run.fastest();
    let fastest_indexes: Vec<i64> = fastest_ids
        .iter()
        .map(|id| position_of(&cases, *id))
        .collect();
    // A total tie can classify every case as both fastest and slowest; such
    // cases are reported only as fastest.
    let slowest_indexes: Vec<i64> = run
        .slowest()
        .iter()
        .copied()
        .filter(|id| !fastest_ids.contains(id))
        .map(|id| position_of(&cases, id))
        .collect();

    let baseline = fastest_indexes
        .first()
        .and_then(|&index| usize::try_from(index).ok())
        .and_then(|index| cases.get(index).map(|c| (index, c.ops)));

    let results: Vec<RankedResult> = cases
        .into_iter()
        .enumerate()
        .map(|(index, case)| {
            let percent_slower = match baseline {
                Some((fastest, _)) if index == fastest => 0.0,
                Some((_, fastest_ops)) => round_to((1.0 - case.ops / fastest_ops) * 100.0, 2),
                None => 0.0,
            };
            RankedResult {
                case,
                percent_slower,
            }
        })
        .collect();

    let fastest = ranks(&results, &fastest_indexes);
    let slowest = ranks(&results, &slowest_indexes);

    SuiteSummary {
        name: run.name.clone(),
        timestamp_ms: run.timestamp_ms,
        results,
        fastest,
        slowest,
    }
}

fn position_of(cases: &[CaseResult], id: u64) -> i64 {
    cases
        .iter()
        .position(|case| case.id == id)
        .map(|index| index as i64)
        .unwrap_or(NOT_FOUND)
}

fn ranks(results: &[RankedResult], indexes: &[i64]) -> Vec<CaseRank> {
    indexes
        .iter()
        .map(|&index| CaseRank {
            name: usize::try_from(index)
                .ok()
                .and_then(|i| results.get(i))
                .map(|r| r.case.name.clone())
                .unwrap_or_default(),
            index,
        })
        .collect()
}
