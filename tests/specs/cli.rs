//! CLI surface specs

use crate::prelude::*;

#[test]
fn help_lists_every_subcommand() {
    Chain::new()
        .lc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("post"))
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("tail"))
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("prune"));
}

#[test]
fn completions_write_a_script_to_stdout() {
    Chain::new()
        .lc()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lc"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    Chain::new()
        .lc()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
