//! Binary-level tests.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_config(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("holesync")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("status"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn check_accepts_a_valid_config() {
    let config = write_config(
        "master:\n  host: http://pi-master.lan\n  password: secret\nslaves:\n  - host: http://pi-slave.lan\n    password: secret\n    sync_items:\n      adlists: true\n",
    );

    Command::cargo_bin("holesync")
        .unwrap()
        .args(["--config"])
        .arg(config.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("configuration ok"))
        .stdout(predicate::str::contains("1 categories selected"));
}

#[test]
fn check_rejects_a_config_without_master() {
    let config = write_config("slaves: []\n");

    Command::cargo_bin("holesync")
        .unwrap()
        .args(["--config"])
        .arg(config.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("master.host"));
}

#[test]
fn missing_config_file_fails() {
    Command::cargo_bin("holesync")
        .unwrap()
        .args(["--config", "/nonexistent/holesync.yaml", "status"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read config file"));
}
