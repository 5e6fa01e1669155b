// host-hunter/tests/cli_integration.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::net::TcpListener;
use tempfile::NamedTempFile;

/// Helper to create a test domains file
fn create_test_domains_file(domains: &[&str]) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    let content = domains.join("\n");
    fs::write(file.path(), content).expect("Failed to write to temp file");
    file
}

/// A local URL with nothing listening behind it
fn closed_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}

#[test]
fn test_missing_argument_fails() {
    let mut cmd = Command::cargo_bin("host-hunter").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("HOSTFILE"));
}

#[test]
fn test_unreadable_file_fails() {
    let mut cmd = Command::cargo_bin("host-hunter").unwrap();
    cmd.arg("/definitely/not/a/real/hosts.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unable to open file"));
}

#[test]
fn test_empty_file_fails_before_prompt() {
    let file = create_test_domains_file(&["", "   ", "\t"]);

    let mut cmd = Command::cargo_bin("host-hunter").unwrap();
    cmd.arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No domains found in the file."))
        .stdout(predicate::str::contains("Enter Scan Speed").not());
}

#[test]
fn test_invalid_config_fails() {
    let hosts = create_test_domains_file(&["a.example"]);
    let config = NamedTempFile::new().unwrap();
    fs::write(config.path(), "[probe]\nbuffer_size = 0\n").unwrap();

    let mut cmd = Command::cargo_bin("host-hunter").unwrap();
    cmd.arg(hosts.path()).arg("--config").arg(config.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_reprompts_then_runs_with_valid_speed() {
    let url = closed_local_url();
    let file = create_test_domains_file(&[&url]);

    let mut cmd = Command::cargo_bin("host-hunter").unwrap();
    cmd.arg(file.path())
        .write_stdin("-3\nabc\n5\n")
        .timeout(std::time::Duration::from_secs(30));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Enter Scan Speed [example 50]:"))
        .stdout(predicate::str::contains("Invalid input. Enter a positive number:").count(2))
        .stdout(predicate::str::contains("000 Failed"))
        .stdout(predicate::str::contains("100.0%"))
        .stdout(predicate::str::contains("Total domains checked: 1"))
        .stdout(predicate::str::contains("Successful domains: 0"))
        .stdout(predicate::str::contains("Failed domains: 1"))
        .stdout(predicate::str::contains("----● Successful Domains ●----"));
}

#[test]
fn test_verbose_logs_worker_pool_start() {
    let url = closed_local_url();
    let file = create_test_domains_file(&[&url]);

    let mut cmd = Command::cargo_bin("host-hunter").unwrap();
    cmd.arg("-v")
        .arg(file.path())
        .env_remove("RUST_LOG")
        .write_stdin("-3\nabc\n5\n")
        .timeout(std::time::Duration::from_secs(30));

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("starting worker pool"))
        .stderr(predicate::str::contains("workers=5"))
        .stderr(predicate::str::contains("total=1"));
}

#[test]
fn test_stdin_closed_before_speed_fails() {
    let file = create_test_domains_file(&["a.example"]);

    let mut cmd = Command::cargo_bin("host-hunter").unwrap();
    cmd.arg(file.path()).write_stdin("abc\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("scan speed"));
}
