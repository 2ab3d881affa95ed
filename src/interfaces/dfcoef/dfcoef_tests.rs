use std::path::Path;

use crate::interfaces::dfcoef::run_summariser;

#[test]
#[cfg(unix)]
fn test_interfaces_dfcoef_successful_summariser() {
    let summary = run_summariser("true", Path::new("h2o.out"), "H2O").unwrap();
    assert_eq!(summary, Path::new("H2O.out"));
}

#[test]
#[cfg(unix)]
fn test_interfaces_dfcoef_failing_summariser() {
    let err = run_summariser("false", Path::new("h2o.out"), "H2O").unwrap_err();
    assert!(err.to_string().contains("Please check"));
    assert!(err.to_string().contains("h2o.out"));
}

#[test]
fn test_interfaces_dfcoef_missing_summariser() {
    let err = run_summariser(
        "definitely-not-a-real-summariser",
        Path::new("h2o.out"),
        "H2O",
    )
    .unwrap_err();
    assert!(err.to_string().contains("Unable to invoke"));
}
