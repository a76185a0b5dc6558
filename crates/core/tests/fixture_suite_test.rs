use anyhow::Result;
use disk_sched_core::eval::evaluate_suite_file;
use std::path::PathBuf;

#[test]
fn test_fixture_suite_passes() -> Result<()> {
    // cargo test runs from the package root (crates/core); fixtures live at the workspace root.
    let mut suite_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    suite_path.pop(); // crates
    suite_path.pop(); // workspace root
    suite_path.push("fixtures");
    suite_path.push("eval-suite.json");

    if !suite_path.exists() {
        suite_path = PathBuf::from("fixtures/eval-suite.json");
    }
    assert!(suite_path.exists(), "Suite not found at {:?}", suite_path);

    let result = evaluate_suite_file(&suite_path)?;

    for case in result.case_results.iter().filter(|case| !case.passed) {
        println!("{}: {}", case.name, case.mismatches.join("; "));
    }
    assert_eq!(result.total_cases, 10);
    assert_eq!(result.passed_cases, result.total_cases);

    Ok(())
}

#[test]
fn test_missing_suite_reports_path() {
    let err = evaluate_suite_file(&PathBuf::from("does/not/exist.json"))
        .expect_err("missing file fails");
    assert!(err.to_string().contains("does/not/exist.json"));
}
