//! Integration tests for the scallop shell.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use anyhow::Context;
use assert_fs::prelude::*;
use predicates::prelude::*;

fn scallop(home: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("scallop").expect("missing scallop binary");
    cmd.env("HOME", home);
    cmd
}

fn make_executable(dir: &Path, name: &str, body: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[test]
fn batch_mode_executes_commands() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("echo hello\n")
        .assert()
        .success()
        .stdout("hello\n");

    Ok(())
}

#[test]
fn chain_operators_gate_on_preceding_status() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("false && echo A\ntrue || echo B\nfalse; echo C\n")
        .assert()
        .success()
        .stdout("C\n");

    Ok(())
}

#[test]
fn exit_terminates_with_explicit_code() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("exit 42\necho after\n")
        .assert()
        .code(42)
        .stdout("");

    Ok(())
}

#[test]
fn exit_with_illegal_number_keeps_shell_running() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("exit abc\necho alive\n")
        .assert()
        .success()
        .stdout("alive\n")
        .stderr(predicate::str::contains("Illegal number: abc"));

    Ok(())
}

#[test]
fn batch_mode_propagates_last_status() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path()).write_stdin("false\n").assert().code(1);

    Ok(())
}

#[test]
fn unknown_command_yields_127() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("definitely-not-a-command-xyz\n")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("not found"));

    Ok(())
}

#[test]
fn path_resolution_honors_listed_order_and_live_updates() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;
    let first = assert_fs::TempDir::new()?;
    let second = assert_fs::TempDir::new()?;

    make_executable(first.path(), "probe", "echo one")?;
    make_executable(second.path(), "probe", "echo two")?;

    let input = format!(
        "setenv PATH {}:{}\nprobe\nsetenv PATH {}\nprobe\n",
        first.path().display(),
        second.path().display(),
        second.path().display()
    );

    scallop(home.path())
        .write_stdin(input)
        .assert()
        .success()
        .stdout("one\ntwo\n");

    Ok(())
}

#[test]
fn variable_expansion_round_trip() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("setenv X 1\necho $X\nunsetenv X\necho $X\n")
        .assert()
        .success()
        .stdout("1\n\n");

    Ok(())
}

#[test]
fn last_status_is_readable_through_expansion() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("false\necho $?\ntrue\necho $?\n")
        .assert()
        .success()
        .stdout("1\n0\n");

    Ok(())
}

#[test]
fn alias_expands_exactly_once() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("alias greet='echo hello'\ngreet world\n")
        .assert()
        .success()
        .stdout("hello world\n");

    Ok(())
}

#[test]
fn alias_listing_and_lookup() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("alias greet='echo hi'\nalias\nalias greet\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("greet='echo hi'"));

    scallop(home.path())
        .write_stdin("alias nope\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope: not found"));

    Ok(())
}

#[test]
fn script_file_runs_in_batch_mode() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    let dir = tempfile::tempdir()?;
    let script = dir.path().join("script.sh");
    std::fs::write(&script, "echo from-script\nexit 7\necho never\n")?;

    scallop(home.path())
        .arg(script.display().to_string())
        .assert()
        .code(7)
        .stdout("from-script\n");

    Ok(())
}

#[test]
fn missing_script_yields_127() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .arg("no-such-script-file")
        .assert()
        .code(127)
        .stderr(predicate::str::contains("Can't open no-such-script-file"));

    Ok(())
}

#[test]
fn history_is_persisted_and_renumbered_on_reload() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("echo one\necho two\n")
        .assert()
        .success();

    home.child(".scallop_history")
        .assert("echo one\necho two\n");

    // A second session reloads the entries, renumbered from 1.
    scallop(home.path())
        .write_stdin("history\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("1  echo one")
                .and(predicate::str::contains("2  echo two"))
                .and(predicate::str::contains("3  history")),
        );

    Ok(())
}

#[test]
fn cd_updates_pwd_and_oldpwd() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("cd /\necho $PWD\ncd /tmp\necho $OLDPWD\n")
        .assert()
        .success()
        .stdout("/\n/\n");

    Ok(())
}

#[test]
fn cd_without_argument_targets_home() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;
    let canonical_home = std::fs::canonicalize(home.path())?;

    scallop(home.path())
        .write_stdin("cd\necho $PWD\n")
        .assert()
        .success()
        .stdout(format!("{}\n", canonical_home.display()));

    Ok(())
}

#[test]
fn cd_to_missing_directory_reports_and_continues() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("cd /definitely/not/a/dir\necho still-here\n")
        .assert()
        .success()
        .stdout("still-here\n")
        .stderr(predicate::str::contains("can't cd to /definitely/not/a/dir"));

    Ok(())
}

#[test]
fn help_lists_builtins_and_flags_unknown_topics() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("help\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("shell built-ins"));

    scallop(home.path())
        .write_stdin("help bogus-topic\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no help topics match"));

    Ok(())
}

#[test]
fn comments_truncate_lines() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;

    scallop(home.path())
        .write_stdin("# echo hidden\necho shown # echo hidden\n")
        .assert()
        .success()
        .stdout("shown\n");

    Ok(())
}

#[test]
fn shell_starts_with_unreadable_history_file() -> anyhow::Result<()> {
    let home = assert_fs::TempDir::new()?;
    let history_path = home.path().join(".scallop_history");
    std::fs::write(&history_path, "old entry\n")?;
    std::fs::set_permissions(&history_path, std::fs::Permissions::from_mode(0o000))?;

    scallop(home.path())
        .write_stdin("echo ok\n")
        .assert()
        .success()
        .stdout("ok\n");

    Ok(())
}
