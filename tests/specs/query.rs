//! Query specs: `lc get` and `lc tail`

use crate::prelude::*;

#[test]
fn get_returns_the_posted_record() {
    let chain = Chain::new();
    chain.post("x", "ab12", Some("hello"));
    let hash = chain.first_hash("x");

    chain
        .lc()
        .args(["get", "x", &hash, "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"transaction\": \"ab12\""))
        .stdout(predicate::str::contains(&hash));
}

#[test]
fn get_unknown_hash_fails() {
    let chain = Chain::new();
    chain.post("x", "ab12", None);

    chain
        .lc_fast()
        .args(["get", "x", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn get_missing_topic_fails() {
    let chain = Chain::new();
    chain
        .lc_fast()
        .args(["get", "", "deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic"));
}

#[test]
fn tail_returns_the_most_recent_records_in_log_order() {
    let chain = Chain::new();
    chain.post("x", "aa11", Some("m1"));
    chain.post("x", "bb22", Some("m2"));
    chain.post("x", "cc33", Some("m3"));

    let output = chain
        .lc()
        .args(["tail", "x", "-n", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("m2"));
    assert!(lines[1].ends_with("m3"));
}

#[test]
fn tail_window_larger_than_log_returns_everything() {
    let chain = Chain::new();
    chain.post("x", "aa11", None);

    let output = chain
        .lc()
        .args(["tail", "x", "-n", "50"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 1);
}

#[test]
fn tail_wildcard_reads_the_global_tape() {
    let chain = Chain::new();
    chain.post("a/b", "aa11", Some("nested"));
    chain.post("c", "bb22", Some("flat"));

    let output = chain
        .lc()
        .args(["tail", "*", "-n", "10"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("a/b"));
    assert!(lines[1].starts_with("c"));
}

#[test]
fn tail_of_unwritten_topic_prints_nothing() {
    let chain = Chain::new();
    chain
        .lc()
        .args(["tail", "ghost", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
