use std::{env, fs};

use benchsummary::errors::BenchSummaryError;
use benchsummary::report::{
    find_summary_report, load_summary_reports, set_report_file_path, write_summary_report,
};
use benchsummary::sample_data::{SuiteShape, generate_suite};
use benchsummary::summary::{DEFAULT_PRECISION, build_suite_summary};

#[test]
fn test_report_round_trip() {
    let path = env::temp_dir().join(format!("benchsummary_report_{}.json", std::process::id()));
    let _ = fs::remove_file(&path);
    set_report_file_path(path.clone());

    let run = generate_suite(SuiteShape::Uniform { spread: 4.0 }, 3, 0xA17C);
    let mut summary = build_suite_summary(&run, DEFAULT_PRECISION);
    summary.name = "alpha".into();
    write_summary_report(&summary).expect("write report");

    let mut other = summary.clone();
    other.name = "beta".into();
    write_summary_report(&other).expect("write second report");

    let loaded = load_summary_reports().expect("load reports");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].name, "alpha");
    assert_eq!(loaded[1].name, "beta");
    assert_eq!(loaded[0], summary);

    // Writing the same suite again replaces its entry rather than appending.
    write_summary_report(&summary).expect("rewrite report");
    assert_eq!(load_summary_reports().expect("reload").len(), 2);

    assert_eq!(find_summary_report("beta").expect("find beta"), other);
    assert!(matches!(
        find_summary_report("gamma"),
        Err(BenchSummaryError::NotFound(_))
    ));

    let _ = fs::remove_file(&path);
}

#[test]
fn test_report_rejects_unnamed_summary() {
    let run = generate_suite(SuiteShape::Uniform { spread: 2.0 }, 2, 0xB25F);
    let mut summary = build_suite_summary(&run, DEFAULT_PRECISION);
    summary.name.clear();
    assert!(matches!(
        write_summary_report(&summary),
        Err(BenchSummaryError::InvalidInput(_))
    ));
}
