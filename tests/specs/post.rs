//! Posting specs
//!
//! Verify the on-disk layout produced by `lc post`: one record file per
//! hash, a local tape line, and a topic-qualified global tape line.

use crate::prelude::*;

#[test]
fn post_writes_record_and_both_tape_lines() {
    let chain = Chain::new();
    chain.post("x", "ab12", None);

    let local = chain.read("x/tape.txt");
    let global = chain.read("tape.txt");

    let local_line = local.lines().next().unwrap();
    let global_line = global.lines().next().unwrap();
    assert!(local_line.starts_with("LOCALCHAIN "));
    assert!(global_line.starts_with("LOCALCHAIN /x "));

    // both lines reference the same hash and carry the same timestamp
    let hash = Chain::hash_on_line(local_line);
    assert_eq!(hash, Chain::hash_on_line(global_line));
    assert_eq!(
        local_line.split_whitespace().last(),
        global_line.split_whitespace().last()
    );

    // the record file holds the payment JSON
    let record: serde_json::Value =
        serde_json::from_str(&chain.read(&format!("x/{}", hash))).unwrap();
    assert_eq!(record["transaction"], "ab12");
}

#[test]
fn post_to_nested_topic_creates_nested_directories() {
    let chain = Chain::new();
    chain.post("a/b", "ab12", None);

    let hash = chain.first_hash("a/b");
    assert!(chain.exists(&format!("a/b/{}", hash)));

    let global = chain.read("tape.txt");
    assert!(global.starts_with("LOCALCHAIN /a/b "));
}

#[test]
fn post_without_transaction_fails_and_writes_nothing() {
    let chain = Chain::new();
    chain
        .lc()
        .args(["post", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--transaction or --file"));

    assert!(!chain.exists("x"));
    assert!(!chain.exists("tape.txt"));
}

#[test]
fn post_file_without_transaction_fails_and_writes_nothing() {
    let chain = Chain::new();
    let payment = chain.path().join("payment.json");
    std::fs::write(&payment, r#"{"memo":"no payload"}"#).unwrap();

    chain
        .lc()
        .args(["post", "x", "--file"])
        .arg(&payment)
        .assert()
        .failure()
        .stderr(predicate::str::contains("transaction payload"));

    assert!(!chain.exists("x"));
    assert!(!chain.exists("tape.txt"));
}

#[test]
fn post_with_invalid_hex_fails_and_writes_nothing() {
    let chain = Chain::new();
    chain
        .lc()
        .args(["post", "x", "--transaction", "zz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid transaction"));

    assert!(!chain.exists("x"));
    assert!(!chain.exists("tape.txt"));
}

#[test]
fn post_from_json_file_carries_optional_fields() {
    let chain = Chain::new();
    let payment = chain.path().join("payment.json");
    std::fs::write(
        &payment,
        r#"{"transaction":"ab12","merchantData":"order-7","memo":"hello"}"#,
    )
    .unwrap();

    chain
        .lc()
        .args(["post", "x", "--file"])
        .arg(&payment)
        .assert()
        .success();

    let hash = chain.first_hash("x");
    let record: serde_json::Value =
        serde_json::from_str(&chain.read(&format!("x/{}", hash))).unwrap();
    assert_eq!(record["merchantData"], "order-7");
    assert_eq!(record["memo"], "hello");
}

#[test]
fn reposting_same_payload_overwrites_the_record() {
    let chain = Chain::new();
    chain.post("x", "ab12", Some("first"));
    chain.post("x", "ab12", Some("second"));

    let local = chain.read("x/tape.txt");
    assert_eq!(local.lines().count(), 2);

    let hash = chain.first_hash("x");
    let record: serde_json::Value =
        serde_json::from_str(&chain.read(&format!("x/{}", hash))).unwrap();
    assert_eq!(record["memo"], "second");
}
