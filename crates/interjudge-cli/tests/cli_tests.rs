//! CLI integration tests using assert_cmd.
//!
//! The solution-under-test is simulated by piping its whole output into
//! stdin up front; the judge still consumes it one line at a time.

use assert_cmd::Command;
use interjudge_core::report::SessionReport;
use interjudge_core::Verdict;
use predicates::prelude::*;
use tempfile::TempDir;

fn interjudge(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("interjudge").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn correct_guess_is_accepted() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .arg("run")
        .write_stdin("42\n")
        .assert()
        .code(0)
        .stdout("正解です\n");
}

#[test]
fn wrong_guesses_get_feedback_until_input_ends() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .arg("run")
        .write_stdin("50\n70\n60\n")
        .assert()
        .code(1)
        .stdout("もっと小さいです\nもっと小さいです\nもっと小さいです\n")
        .stderr(predicate::str::contains("WrongAnswer: unexpected end of input"));
}

#[test]
fn query_limit_rejects_before_reading_more() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .args(["run", "--limit", "2"])
        .write_stdin("10\n20\n42\n")
        .assert()
        .code(1)
        .stdout("もっと大きいです\nもっと大きいです\n")
        .stderr(predicate::str::contains("query limit exceeded"));
}

#[test]
fn non_numeric_input_is_rejected() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .arg("run")
        .write_stdin("abc\n")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid input"));
}

#[test]
fn reasons_never_reach_stdout() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .args(["run", "--target", "7"])
        .write_stdin("3\nxyz\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("invalid").not())
        .stdout(predicate::str::contains("WrongAnswer").not());
}

#[test]
fn target_and_locale_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("interjudge.toml"),
        "query_limit = 5\n\n[guess]\ntarget = 3\nmax = 10\nlocale = \"en\"\n",
    )
    .unwrap();

    interjudge(&dir)
        .arg("run")
        .write_stdin("5\n2\n3\n")
        .assert()
        .code(0)
        .stdout("smaller\nlarger\ncorrect\n");
}

#[test]
fn cli_flags_override_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("judge.toml");
    std::fs::write(&config, "[guess]\ntarget = 3\nlocale = \"en\"\n").unwrap();

    interjudge(&dir)
        .arg("run")
        .arg("--config")
        .arg(&config)
        .args(["--target", "9", "--limit", "1"])
        .write_stdin("3\n9\n")
        .assert()
        .code(1)
        .stdout("larger\n")
        .stderr(predicate::str::contains("query limit exceeded"));
}

#[test]
fn locale_flag_selects_feedback_language() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .args(["run", "--locale", "EN"])
        .write_stdin("50\n42\n")
        .assert()
        .code(0)
        .stdout("smaller\ncorrect\n");
}

#[test]
fn unknown_locale_is_refused() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .args(["run", "--locale", "fr"])
        .write_stdin("42\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unknown locale: fr"));
}

#[test]
fn report_is_written() {
    let dir = TempDir::new().unwrap();
    let report_path = dir.path().join("out").join("session.json");

    interjudge(&dir)
        .arg("run")
        .arg("--report")
        .arg(&report_path)
        .write_stdin("10\n42\n")
        .assert()
        .code(0);

    let report = SessionReport::load_json(&report_path).unwrap();
    assert_eq!(report.problem, "guess-number");
    assert_eq!(report.verdict, Verdict::Accepted);
    assert_eq!(report.queries_used, 2);
    assert_eq!(report.query_limit, 100);
    assert_eq!(report.transcript.len(), 4);
}

#[test]
fn zero_limit_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .args(["run", "--limit", "0"])
        .write_stdin("42\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("query_limit must be greater than 0"));
}

#[test]
fn missing_config_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .args(["run", "--config", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn validate_defaults() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("built-in defaults"))
        .stdout(predicate::str::contains("Config valid."));
}

#[test]
fn validate_reports_problems() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("bad.toml");
    std::fs::write(&config, "query_limit = 0\n[guess]\ntarget = 200\n").unwrap();

    interjudge(&dir)
        .arg("validate")
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("query_limit must be greater than 0"))
        .stdout(predicate::str::contains("guess.target (200) is outside [1, 100]"))
        .stderr(predicate::str::contains("2 problem(s) found"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    interjudge(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created interjudge.toml"));
    assert!(dir.path().join("interjudge.toml").exists());

    // The starter config is valid as written.
    interjudge(&dir)
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Config: interjudge.toml"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir).arg("init").assert().success();
    interjudge(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive-problem judge"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();
    interjudge(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("interjudge"));
}
