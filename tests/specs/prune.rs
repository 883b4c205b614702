//! Prune specs: truncation, rotation, and archive retention

use crate::prelude::*;

fn archive_count(chain: &Chain, topic: &str) -> usize {
    std::fs::read_dir(chain.path().join(topic))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|n| n.starts_with("tape-") && n.ends_with(".txt"))
        .count()
}

#[test]
fn prune_truncates_the_live_tape_in_place() {
    let chain = Chain::new();
    chain.post("x", "ab12", None);
    let hash = chain.first_hash("x");

    chain.lc().args(["prune", "x"]).assert().success();

    assert!(chain.read("x/tape.txt").is_empty());
    // records survive truncation
    assert!(chain.exists(&format!("x/{}", hash)));
    assert_eq!(archive_count(&chain, "x"), 0);
}

#[test]
fn prune_with_archive_rotates_the_tape() {
    let chain = Chain::new();
    chain.post("x", "ab12", None);
    let before = chain.read("x/tape.txt");

    chain
        .lc()
        .args(["prune", "x", "--archive", "3"])
        .assert()
        .success();

    assert!(chain.read("x/tape.txt").is_empty());
    assert_eq!(archive_count(&chain, "x"), 1);

    // the frozen archive holds the old tape contents
    let archive = std::fs::read_dir(chain.path().join("x"))
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| {
            let name = p.file_name().unwrap().to_string_lossy().to_string();
            name.starts_with("tape-") && name.ends_with(".txt")
        })
        .unwrap();
    assert_eq!(std::fs::read_to_string(archive).unwrap(), before);
}

#[test]
fn repeated_rotation_keeps_at_most_the_retention_count() {
    let chain = Chain::new();
    for round in 0..4 {
        chain.post("x", &format!("ab{}{}", round, round), None);
        chain
            .lc()
            .args(["prune", "x", "--archive", "2"])
            .assert()
            .success();
    }

    assert!(archive_count(&chain, "x") <= 2);
    assert!(chain.read("x/tape.txt").is_empty());
}

#[test]
fn posting_after_rotation_starts_from_line_one() {
    let chain = Chain::new();
    chain.post("x", "ab12", None);
    chain
        .lc()
        .args(["prune", "x", "--archive", "5"])
        .assert()
        .success();

    chain.post("x", "cd34", None);
    assert_eq!(chain.read("x/tape.txt").lines().count(), 1);
}

#[test]
fn prune_with_empty_topic_fails() {
    let chain = Chain::new();
    chain
        .lc()
        .args(["prune", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("topic"));
}

#[test]
fn prune_archive_without_a_tape_fails() {
    let chain = Chain::new();
    chain
        .lc()
        .args(["prune", "never-posted", "--archive", "2"])
        .assert()
        .failure();
}
