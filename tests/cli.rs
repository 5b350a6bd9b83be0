//! End-to-end tests of the `household` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn household(base: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("household").unwrap();
    cmd.env("HOUSEHOLD_BUDGET_DIR", base.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn split_by_income() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["split", "1234.57", "--policy", "revenus", "--income1", "3000", "--income2", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("740.74"))
        .stdout(predicate::str::contains("493.83"));
}

#[test]
fn split_negative_amount_as_json() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["split", "--format", "json", "--", "-1.01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"member1\": -50"))
        .stdout(predicate::str::contains("\"member2\": -51"));
}

#[test]
fn split_rejects_bad_amount() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["split", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn init_then_summary() {
    let base = TempDir::new().unwrap();
    household(&base)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));

    assert!(base.path().join("config.json").exists());
    assert!(base.path().join("scenarios").join("household.json").exists());

    household(&base)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Household Budget"))
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("Financial Health"));
}

#[test]
fn summary_of_yaml_scenario_for_a_month() {
    let base = TempDir::new().unwrap();
    let scenario = base.path().join("march.yaml");
    std::fs::write(
        &scenario,
        r#"
config: { member1: Alex, member2: Sam, rev1: "3000", rev2: "2000", split_mode: revenus }
fixed_lines:
  - { label: Rent, amount: 1000, freq: mensuelle }
transactions:
  - { date_op: "2024-03-02", label: Bakery, amount: "-12,50" }
  - { date_op: "2024-04-02", label: Bakery, amount: -99 }
account_balance: 400
"#,
    )
    .unwrap();

    household(&base)
        .arg("summary")
        .arg(&scenario)
        .args(["--month", "2024-03", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"month\": \"2024-03\""))
        .stdout(predicate::str::contains("\"needed\": 60000"));
}

#[test]
fn summary_missing_scenario_fails() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["summary", "nowhere.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Scenario error"));
}

#[test]
fn ratios_report() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["ratios", "5000", "3000", "--debt", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("90/100 (Excellent)"));
}

#[test]
fn loan_projection() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["project", "loan", "200000", "6", "360"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1199.10"));
}

#[test]
fn config_shows_base_dir() {
    let base = TempDir::new().unwrap();
    household(&base)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains(base.path().to_str().unwrap()));
}

#[test]
fn loan_rejects_oversized_term() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["project", "loan", "1000", "5", "4294967295", "--schedule"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Loan term must be between 1 and 1200 months"));
}

#[test]
fn compound_rejects_long_horizon() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["project", "compound", "1000", "5", "5000", "--monthly", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at most 100 years"));
}

#[test]
fn split_rejects_out_of_range_amount() {
    let base = TempDir::new().unwrap();
    household(&base)
        .args(["split", "1e17"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount out of range"));
}
