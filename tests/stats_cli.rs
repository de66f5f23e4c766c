mod support;

use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

use support::TestDir;

fn tm_cmd(dir: &TestDir) -> Command {
    let mut cmd = support::taskmaster_cmd();
    cmd.env("TASKMASTER_DATA_DIR", dir.path());
    cmd
}

fn add_task(dir: &TestDir, title: &str, due: &str, priority: &str) -> u64 {
    let output = tm_cmd(dir)
        .args(["add", title, "--due", due, "--priority", priority, "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output).expect("add json");
    value["data"]["task"]["id"].as_u64().expect("task id")
}

fn stats_json(dir: &TestDir, extra: &[&str]) -> Value {
    let mut args = vec!["stats", "--json"];
    args.extend_from_slice(extra);
    let output = tm_cmd(dir)
        .args(&args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("stats json")
}

fn upcoming_titles(stats: &Value) -> Vec<String> {
    stats["data"]["upcoming"]
        .as_array()
        .expect("upcoming array")
        .iter()
        .map(|task| task["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

/// Four tasks: three pending with scrambled due dates, one completed
/// with the earliest due date of all.
fn seed(dir: &TestDir) {
    add_task(dir, "Later", "2025-03-01", "low");
    add_task(dir, "Soonest", "2025-01-10", "high");
    add_task(dir, "Middle", "2025-02-15", "medium");
    let done = add_task(dir, "Done", "2025-01-01", "high");
    tm_cmd(dir)
        .args(["toggle", &done.to_string()])
        .assert()
        .success();
}

#[test]
fn stats_counts_and_sorts_upcoming() {
    let dir = TestDir::new();
    seed(&dir);

    let stats = stats_json(&dir, &[]);
    assert_eq!(stats["command"].as_str(), Some("stats"));
    assert_eq!(stats["data"]["total"].as_u64(), Some(4));
    assert_eq!(stats["data"]["completed"].as_u64(), Some(1));

    // Completed tasks never count as upcoming, however soon they are due.
    assert_eq!(upcoming_titles(&stats), vec!["Soonest", "Middle", "Later"]);
}

#[test]
fn upcoming_flag_truncates() {
    let dir = TestDir::new();
    seed(&dir);

    let stats = stats_json(&dir, &["--upcoming", "1"]);
    assert_eq!(upcoming_titles(&stats), vec!["Soonest"]);
}

#[test]
fn upcoming_zero_is_rejected() {
    let dir = TestDir::new();
    seed(&dir);

    tm_cmd(&dir)
        .args(["stats", "--upcoming", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(contains("upcoming must be >= 1"));
}

#[test]
fn config_controls_default_upcoming_count() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_config("[dashboard]\nupcoming = 1")?;
    seed(&dir);

    let stats = stats_json(&dir, &[]);
    assert_eq!(upcoming_titles(&stats), vec!["Soonest"]);
    Ok(())
}

#[test]
fn config_controls_default_priority() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    dir.write_config("[tasks]\ndefault_priority = \"high\"")?;

    let output = tm_cmd(&dir)
        .args(["add", "Buy milk", "--due", "2025-06-01", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["data"]["task"]["priority"].as_str(), Some("high"));
    Ok(())
}

#[test]
fn report_tallies_priorities_and_completion() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TestDir::new();
    seed(&dir);

    let output = tm_cmd(&dir)
        .args(["report", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["command"].as_str(), Some("report"));

    let priorities = &value["data"]["priorities"];
    assert_eq!(priorities["high"].as_u64(), Some(2));
    assert_eq!(priorities["medium"].as_u64(), Some(1));
    assert_eq!(priorities["low"].as_u64(), Some(1));

    let completion = &value["data"]["completion"];
    assert_eq!(completion["completed"].as_u64(), Some(1));
    assert_eq!(completion["pending"].as_u64(), Some(3));
    Ok(())
}

#[test]
fn report_lists_priorities_high_to_low() {
    let dir = TestDir::new();
    seed(&dir);

    let output = tm_cmd(&dir)
        .args(["report"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rendered = String::from_utf8(output).expect("utf8");

    let high = rendered.find("High: 2").expect("high line");
    let medium = rendered.find("Medium: 1").expect("medium line");
    let low = rendered.find("Low: 1").expect("low line");
    let completed = rendered.find("Completed: 1").expect("completed line");
    assert!(high < medium && medium < low && low < completed);
}

#[test]
fn empty_collection_reports_zeroes() {
    let dir = TestDir::new();

    let stats = stats_json(&dir, &[]);
    assert_eq!(stats["data"]["total"].as_u64(), Some(0));
    assert_eq!(stats["data"]["completed"].as_u64(), Some(0));
    assert!(stats["data"]["upcoming"]
        .as_array()
        .expect("upcoming array")
        .is_empty());
}
