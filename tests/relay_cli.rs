use std::time::{Duration, Instant};

use assert_cmd::Command;
use predicates::prelude::*;
use test_support::InputDir;

fn pv_like() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pv-like"))
}

#[test]
fn stdin_is_relayed_verbatim() {
    pv_like()
        .write_stdin("a\nb\n")
        .assert()
        .success()
        .stdout("a\nb\n")
        .stderr(predicate::str::starts_with("\r2 bytes ("))
        .stderr(predicate::str::ends_with(" KB/s)\n"));
}

#[test]
fn piped_stdin_gets_no_prompt() {
    pv_like()
        .write_stdin("x\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Waiting for line input").not());
}

#[test]
fn quiet_run_prints_nothing_but_data() {
    pv_like()
        .arg("-q")
        .write_stdin("one\ntwo\nno newline")
        .assert()
        .success()
        .stdout("one\ntwo\nno newline")
        .stderr(predicate::str::is_empty());
}

#[test]
fn binary_data_passes_through_untouched() {
    let data: Vec<u8> = (0..=255u8).chain([b'\n', 0, 0xff, b'\n']).collect();
    let output = pv_like()
        .arg("--quiet")
        .write_stdin(data.clone())
        .output()
        .expect("run pv-like");
    assert!(output.status.success());
    assert_eq!(output.stdout, data);
}

#[test]
fn files_are_concatenated_in_order() {
    let mut inputs = InputDir::new();
    let first = inputs.add("first.txt", b"1\n2\n");
    let second = inputs.add("second.txt", b"3\n");

    pv_like()
        .arg("-q")
        .arg(&second)
        .arg(&first)
        .assert()
        .success()
        .stdout("3\n1\n2\n");
}

#[test]
fn missing_file_is_reported_but_run_succeeds() {
    let mut inputs = InputDir::new();
    let missing = inputs.missing("absent.txt");
    let present = inputs.add("present.txt", b"still relayed\n");

    pv_like()
        .arg(&missing)
        .arg(&present)
        .assert()
        .success()
        .code(0)
        .stdout("still relayed\n")
        .stderr(predicate::str::contains(format!("{}: ", missing.display())))
        .stderr(predicate::str::contains("\r14 bytes ("));
}

#[test]
fn malformed_rate_means_unlimited() {
    pv_like()
        .args(["-q", "-L", "fast"])
        .write_stdin("line\n")
        .assert()
        .success()
        .stdout("line\n");
}

#[test]
fn rate_limit_slows_the_stream() {
    // One 15-byte line at 10 B/s owes half a second before it is written.
    let input = format!("{}\n", "x".repeat(14));

    let started = Instant::now();
    pv_like()
        .args(["-q", "-L", "10"])
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(input);
    assert!(
        started.elapsed() >= Duration::from_millis(400),
        "run finished in {:?}",
        started.elapsed()
    );
}
