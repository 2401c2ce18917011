//! End-to-end tests of the `nphys` binary

use std::process::{Command, Output};

use rstest::rstest;

fn nphys(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nphys"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn plane_reference_points() {
    let output = nphys(&[
        "plane", "--p1", "-4.1", "60", "-0.25", "--p2", "-11.7", "50", "-0.25", "--p3", "-4.1",
        "60", "0.25", "--test", "0", "50", "0", "--id", "12",
    ]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("A: 5.000000, B: -3.800000, C: 0.000000, D: -248.500000"));
    assert!(text.contains("12 P 5.00000e+00 -3.80000e+00 0.00000e+00 -2.48500e+02"));
    assert!(text.contains("The surface has + sign"));
}

#[test]
fn plane_collinear_points_fail() {
    let output = nphys(&[
        "plane", "--p1", "0", "0", "0", "--p2", "1", "1", "1", "--p3", "2", "2", "2",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("collinear"));
}

#[test]
fn salt_composition() {
    let output = nphys(&["salt", "0", "100"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim(),
        "Na   0.000000\nCl   0.750000\nU235 0.250000\nU238 0.000000"
    );
}

#[rstest]
#[case("120", "5")]
#[case("50", "-1")]
fn salt_out_of_range(#[case] nacl: &str, #[case] enrichment: &str) {
    let output = nphys(&["salt", "--", nacl, enrichment]);
    assert!(!output.status.success());
}

#[test]
fn average_of_constant_table() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flat.txt");
    std::fs::write(
        &path,
        "# Energy(eV) XS(b)\n1e-5 2.0\n1.0 2.0\n1e3 2.0\n1e5 2.0\n1e6 2.0\n2e7 2.0\n",
    )
    .unwrap();

    let output = nphys(&["average", "--json", path.to_str().unwrap()]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert!((value["fast"].as_f64().unwrap() - 2.0).abs() < 1e-9);
    assert!((value["ratio"].as_f64().unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn average_missing_file() {
    let output = nphys(&["-q", "average", "does/not/exist.txt"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error:"));
}

#[test]
fn offline_survey_with_missing_tables() {
    let dir = tempfile::tempdir().unwrap();
    let output = nphys(&["survey", "--offline", dir.path().to_str().unwrap()]);
    assert!(!output.status.success());
}
