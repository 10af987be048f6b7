use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_run_basic() {
    let mut cmd = Command::cargo_bin("panmixia").unwrap();
    cmd.arg("run")
        .arg("--founder")
        .arg("1/1:23")
        .arg("--founder")
        .arg("2/2:11")
        .arg("--generations")
        .arg("3")
        .arg("--trials")
        .arg("2")
        .arg("--seed")
        .arg("42")
        .assert()
        .success()
        .stdout(predicate::str::contains("Founding population: 34 individuals"))
        .stdout(predicate::str::contains("Trial 0"))
        .stdout(predicate::str::contains("Trial 1"))
        .stdout(predicate::str::contains("Allele frequencies at locus 0"));
}

#[test]
fn test_run_json_format() {
    let mut cmd = Command::cargo_bin("panmixia").unwrap();
    cmd.arg("run")
        .arg("--founder")
        .arg("1/1:2")
        .arg("--founder")
        .arg("2/2:2")
        .arg("--generations")
        .arg("1")
        .arg("--trials")
        .arg("1")
        .arg("--seed")
        .arg("7")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"founding_population\": 4"))
        .stdout(predicate::str::contains("\"allele_frequencies\""));
}

#[test]
fn test_run_unknown_format() {
    let mut cmd = Command::cargo_bin("panmixia").unwrap();
    cmd.arg("run")
        .arg("--founder")
        .arg("1/1:2")
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format"));
}

#[test]
fn test_freqs_reports_initial_tables() {
    let mut cmd = Command::cargo_bin("panmixia").unwrap();
    cmd.arg("freqs")
        .arg("--founder")
        .arg("1/1:1")
        .arg("--founder")
        .arg("2/2:1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Population size: 2"))
        .stdout(predicate::str::contains("1/1: 0.5000"))
        .stdout(predicate::str::contains("1: 0.5000"));
}

#[test]
fn test_invalid_founder_spec() {
    let mut cmd = Command::cargo_bin("panmixia").unwrap();
    cmd.arg("freqs")
        .arg("--founder")
        .arg("1/1")
        // Missing the :COUNT suffix
        .assert()
        .failure()
        .stderr(predicate::str::contains("GENOME:COUNT"));
}

#[test]
fn test_mismatched_founder_loci() {
    let mut cmd = Command::cargo_bin("panmixia").unwrap();
    cmd.arg("freqs")
        .arg("--founder")
        .arg("1/1:1")
        .arg("--founder")
        .arg("1/1,2/2:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("same locus count"));
}
