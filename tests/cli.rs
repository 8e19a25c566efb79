//! CLI smoke tests for the non-interactive subcommands

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("finances.csv"),
        "Date,Item,Price,Notes\n\
         2021-06-01,Tesco,23.50,\n\
         ,Nando's,15.00,\n\
         2021-06-03,Hotel Roma,120.00,Rome\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("categories.json"),
        r#"{"Eating out": ["Nando's"], "Groceries": ["Tesco"], "Transport": [], "Entertainment": [], "Misc.": [], "Holiday": ["Hotel Roma"]}"#,
    )
    .unwrap();
    dir
}

fn findash(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("findash").unwrap();
    cmd.env("FINDASH_DIR", dir.path());
    cmd
}

#[test]
fn test_report_for_a_period() {
    let dir = fixture();
    findash(&dir)
        .args(["report", "--period", "June 2021"])
        .assert()
        .success()
        .stdout(predicate::str::contains("June 2021"))
        .stdout(predicate::str::contains("of your budget"))
        .stdout(predicate::str::contains("Tesco"));
}

#[test]
fn test_report_no_holiday_drops_tagged_rows() {
    let dir = fixture();
    findash(&dir)
        .args(["report", "--period", "June 2021", "--no-holiday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hotel Roma").not());
}

#[test]
fn test_report_rejects_bad_period() {
    let dir = fixture();
    findash(&dir)
        .args(["report", "--period", "Junetember 2021"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn test_check_reports_clean_data() {
    let dir = fixture();
    findash(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All merchants accounted for"));
}

#[test]
fn test_check_flags_new_merchant() {
    let dir = fixture();
    let ledger = fs::read_to_string(dir.path().join("finances.csv")).unwrap();
    fs::write(
        dir.path().join("finances.csv"),
        format!("{}2021-06-04,Mystery Shop,9.99,\n", ledger),
    )
    .unwrap();

    findash(&dir)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "warning: Mystery Shop is a new merchant",
        ));
}

#[test]
fn test_malformed_ledger_exits_nonzero() {
    let dir = fixture();
    fs::write(
        dir.path().join("finances.csv"),
        "Date,Item,Price,Notes\n2021-06-01,Tesco,ten,\n",
    )
    .unwrap();

    findash(&dir)
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Ledger error at row 2"));
}

#[test]
fn test_ledger_override_wins_over_base_dir() {
    let dir = fixture();
    let other = TempDir::new().unwrap();
    let ledger = other.path().join("other.csv");
    fs::write(
        &ledger,
        "Date,Item,Price,Notes\n2021-06-01,Nando's,99.00,\n",
    )
    .unwrap();

    findash(&dir)
        .args(["report", "--period", "June 2021"])
        .arg("--ledger")
        .arg(&ledger)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nando's"))
        .stdout(predicate::str::contains("Tesco").not());
}
