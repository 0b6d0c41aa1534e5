//! End-to-end tests of the `nonlin` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn nonlin() -> Command {
    let mut cmd = Command::cargo_bin("nonlin").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("NONLIN_RESULTS_DIR");
    cmd
}

#[test]
fn newton_prints_summary() {
    nonlin()
        .arg("newton")
        .assert()
        .success()
        .stdout(predicate::str::contains("NEWTON-RAPHSON METHOD"))
        .stdout(predicate::str::contains("Converged successfully"))
        .stdout(predicate::str::contains("1.4142135624"));
}

#[test]
fn newton_json_output() {
    let output = nonlin()
        .args(["newton", "--function", "transcendental", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["method"], "Newton-Raphson");
    assert_eq!(json["converged"], true);
    assert_eq!(json["result"]["termination"]["status"], "converged");
    let root = json["result"]["root"].as_f64().unwrap();
    approx::assert_abs_diff_eq!(root, 0.739_085_133_215_160_7, epsilon = 1e-10);
}

#[test]
fn bisection_trace_lists_steps() {
    nonlin()
        .args(["bisection", "--epsilon", "0.25", "--trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1.250000000000, 1.500000000000]"));
}

#[test]
fn bisection_csv_has_header() {
    nonlin()
        .args(["--format", "csv", "bisection", "-e", "0.25"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("a,b,midpoint\n"));
}

#[test]
fn bisection_same_sign_bracket_fails() {
    nonlin()
        .args(["bisection", "-a", "2", "-b", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid bracket"));
}

#[test]
fn unknown_function_is_rejected() {
    nonlin()
        .args(["newton", "--function", "quartic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown test function"));
}

#[test]
fn compare_saves_results() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("results");

    nonlin()
        .args(["compare", "--save", "--results-dir"])
        .arg(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("COMPARISON OF METHODS"))
        .stdout(predicate::str::contains("Results saved to"));

    let saved = std::fs::read_to_string(dir.join("comparison.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["Bisection"]["iterations"], 21);
    assert_eq!(json["Fixed point"]["converged"], true);
    assert_eq!(json["Newton-Raphson"]["converged"], true);
}

#[test]
fn results_dir_from_env() {
    let tmp = tempfile::tempdir().unwrap();

    nonlin()
        .env("NONLIN_RESULTS_DIR", tmp.path())
        .args(["fixed-point", "--save"])
        .assert()
        .success();

    assert!(tmp.path().join("comparison.json").is_file());
}

#[test]
fn menu_recovers_from_invalid_choice() {
    nonlin()
        .write_stdin("1\n9\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("BISECTION METHOD"))
        .stdout(predicate::str::contains("Invalid choice: \"9\". Please try again."))
        .stdout(predicate::str::contains("End of program."));
}

#[test]
fn menu_exits_on_end_of_input() {
    nonlin()
        .arg("menu")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("End of program."));
}
