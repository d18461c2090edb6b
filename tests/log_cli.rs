use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const LINE_PATTERN: &str = r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\] ";

fn line_matching(message: &str) -> impl Predicate<str> {
    predicate::str::is_match(format!("{LINE_PATTERN}{message}$")).unwrap()
}

#[test]
fn appends_to_default_log_file() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    temp.child("logs").create_dir_all().expect("logs dir");
    let log = temp.child("logs/tune.log");
    log.write_str("[2020-01-01 00:00:00] earlier\n")
        .expect("seed log");

    let mut cmd = cargo_bin_cmd!("tune-kit");
    cmd.arg("--base-dir").arg(temp.path());
    cmd.args(["log", "hello"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tune.log"));

    let contents = fs::read_to_string(log.path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[2020-01-01 00:00:00] earlier");
    assert!(line_matching("hello").eval(lines[1]), "bad line {:?}", lines[1]);
}

#[test]
fn custom_file_keeps_call_order() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    temp.child("logs").create_dir_all().expect("logs dir");

    for message in ["a", "b"] {
        let mut cmd = cargo_bin_cmd!("tune-kit");
        cmd.arg("--base-dir").arg(temp.path());
        cmd.args(["log", message, "--file", "custom.log"]);
        cmd.assert().success();
    }

    let contents =
        fs::read_to_string(temp.child("logs/custom.log").path()).expect("read log");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(line_matching("a").eval(lines[0]));
    assert!(line_matching("b").eval(lines[1]));
    temp.child("logs/tune.log").assert(predicate::path::missing());
}

#[test]
fn empty_message_writes_bare_prefix() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    temp.child("logs").create_dir_all().expect("logs dir");

    let mut cmd = cargo_bin_cmd!("tune-kit");
    cmd.arg("--base-dir").arg(temp.path());
    cmd.args(["log", ""]);
    cmd.assert().success();

    let contents = fs::read_to_string(temp.child("logs/tune.log").path()).expect("read log");
    assert!(contents.ends_with("] \n"), "unexpected contents {contents:?}");
    assert!(line_matching("").eval(contents.trim_end_matches('\n')));
}

#[test]
fn fails_when_log_directory_is_missing() {
    let temp = assert_fs::TempDir::new().expect("temp dir");

    let mut cmd = cargo_bin_cmd!("tune-kit");
    cmd.arg("--base-dir").arg(temp.path());
    cmd.args(["log", "hello"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Failed to append to"));
    temp.child("logs").assert(predicate::path::missing());
}

#[test]
fn rejects_path_like_file_names() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    temp.child("logs").create_dir_all().expect("logs dir");

    let mut cmd = cargo_bin_cmd!("tune-kit");
    cmd.arg("--base-dir").arg(temp.path());
    cmd.args(["log", "hello", "--file", "../outside.log"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log file name '../outside.log'"));
    temp.child("outside.log").assert(predicate::path::missing());
}

#[test]
fn paths_lists_derived_directories() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let base = temp.path().display().to_string();

    let mut cmd = cargo_bin_cmd!("tune-kit");
    cmd.arg("--base-dir").arg(temp.path());
    cmd.arg("paths");

    let data = temp.path().join("data");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("base: {base}\n")))
        .stdout(predicate::str::contains(format!("data: {}\n", data.display())))
        .stdout(predicate::str::contains(format!(
            "logs: {}\n",
            temp.path().join("logs").display()
        )))
        .stdout(predicate::str::contains(format!(
            "test: {}\n",
            data.join("test").display()
        )));
}
