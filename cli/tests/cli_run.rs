#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

/// A `logcli` command isolated from the user's config and environment.
fn logcli(home: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("logcli");
    cmd.env("HOME", home.path())
        .current_dir(home.path())
        .env_remove("LOGCLI_MODE")
        .env_remove("LOGCLI_LINE_CHANNEL_CAPACITY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn echo_hello_is_prefixed() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["--", "echo", "hello"])
        .assert()
        .success()
        .stdout("[stdout] hello\n")
        .stderr(predicate::str::contains("Command finished successfully"));
}

#[test]
fn stderr_lines_are_tagged() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["--", "sh", "-c", "echo bad >&2"])
        .assert()
        .success()
        .stdout("[stderr] bad\n");
}

#[test]
fn child_exit_code_is_mirrored() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["--", "sh", "-c", "echo partial; exit 3"])
        .assert()
        .code(3)
        .stdout("[stdout] partial\n")
        .stderr(predicate::str::contains("Command finished with error"));
}

#[test]
fn missing_command_is_a_usage_error() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["-m", "dim", "--"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no command to execute"));
}

#[test]
fn unknown_binary_fails_with_setup_code() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["--", "logcli-no-such-binary-here"])
        .assert()
        .code(20)
        .stdout("")
        .stderr(predicate::str::contains("spawn failed"));
}

#[test]
fn unknown_mode_prints_like_normal() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["-m", "rainbow", "--", "echo", "hi"])
        .assert()
        .success()
        .stdout("[stdout] hi\n");
}

#[test]
fn prefix_and_spacing_flags_apply() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["-p", "|", "-s", "2", "--", "echo", "x"])
        .assert()
        .success()
        .stdout("|  x\n");
}

#[test]
fn color_mode_has_no_leading_space() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["-m", "color", "--", "echo", "green"])
        .assert()
        .success()
        .stdout("\x1b[32mgreen\x1b[0m\n");
}

#[test]
fn demo_runs_without_a_command() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .arg("--demo")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("logcli - all modes of styling:"))
        .stdout(predicate::str::contains("'normal'"))
        .stdout(predicate::str::contains("'dimred'"));
}

#[test]
fn child_reads_inherited_stdin() {
    let home = tempfile::tempdir().unwrap();
    logcli(&home)
        .args(["--", "cat"])
        .write_stdin("piped in\n")
        .assert()
        .success()
        .stdout("[stdout] piped in\n");
}

#[test]
fn config_file_sets_default_mode() {
    let home = tempfile::tempdir().unwrap();
    let mut f = std::fs::File::create(home.path().join("logcli.toml")).unwrap();
    writeln!(f, "[style]\nmode = \"color\"").unwrap();

    logcli(&home)
        .args(["--", "echo", "cfg"])
        .assert()
        .success()
        .stdout("\x1b[32mcfg\x1b[0m\n");
}

#[test]
fn broken_config_exits_with_config_code() {
    let home = tempfile::tempdir().unwrap();
    let path = home.path().join("broken.toml");
    std::fs::write(&path, "[runner\n").unwrap();

    logcli(&home)
        .arg("--config")
        .arg(&path)
        .args(["--", "echo", "never"])
        .assert()
        .code(11)
        .stdout("")
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn missing_command_wins_over_broken_config() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join(".logcli");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[style\n").unwrap();

    logcli(&home)
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("no command to execute"));
}
