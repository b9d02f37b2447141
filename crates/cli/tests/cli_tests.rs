//! End-to-end tests of the `mdexpand` binary.

use std::io::Write;
use std::process::{Command, Output};
use std::str;

use tempfile::NamedTempFile;

const NO_SETTINGS: &str = "/this/path/does/not/exist.yml";

fn mdexpand(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mdexpand"))
        .args(["--config-path", NO_SETTINGS])
        .args(args)
        .output()
        .expect("Failed to execute mdexpand")
}

fn stdout_of(output: &Output) -> &str {
    str::from_utf8(&output.stdout).expect("Invalid UTF-8")
}

#[test]
fn test_cli_view_range() {
    let mut temp_file = tempfile::Builder::new().suffix(".rs").tempfile().unwrap();
    write!(temp_file, "fn a() {{}}\nfn b() {{}}\nfn c() {{}}\n").unwrap();
    let file_argument = format!("file={}", temp_file.path().display());

    let output = mdexpand(&["view", &file_argument, "start=2", "end=3"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "```rs\nfn b() {}\nfn c() {}\n\n```\n");
}

#[test]
fn test_cli_execute_blockquote() {
    let output = mdexpand(&["execute", "cmd=echo hello", "attach_cmd=t", "fmt=blockquote"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "> $ echo hello\n> hello\n> \n");
}

#[test]
fn test_cli_execute_raw() {
    let output = mdexpand(&["--raw", "execute", "cmd=printf 'x\\ny\\n' | sort -r"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "y\nx\n\n");
}

#[test]
fn test_cli_failing_command_still_succeeds() {
    let output = mdexpand(&["execute", "cmd=echo broken 1>&2; exit 2"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "```\nbroken\n\n```\n");
}

#[test]
fn test_cli_unknown_action() {
    let output = mdexpand(&["include", "file=a.md"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Action=include\n");
}

#[test]
fn test_cli_settings_file_shell_and_flag_override() {
    let mut settings = NamedTempFile::new().unwrap();
    write!(settings, "shell: /this/shell/does/not/exist\n").unwrap();
    let settings_path = settings.path().to_str().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mdexpand"))
        .args(["--config-path", settings_path, "execute", "cmd=echo hi"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let output = Command::new(env!("CARGO_BIN_EXE_mdexpand"))
        .args(["--config-path", settings_path, "--shell", "/bin/sh", "execute", "cmd=echo hi"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "```\nhi\n\n```\n");
}

#[test]
fn test_cli_timeout() {
    let output = mdexpand(&["--timeout", "1", "execute", "cmd=exec sleep 10"]);

    assert!(!output.status.success());
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("did not finish within 1s"));
}

#[test]
fn test_cli_missing_file_fails() {
    let output = mdexpand(&["view", "file=/no/such/file.txt"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("/no/such/file.txt"));
}

#[test]
fn test_cli_bad_argument_format_fails() {
    let output = mdexpand(&["view", "file"]);

    assert!(!output.status.success());
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("key=value"));
}

#[test]
fn test_cli_non_numeric_line_fails() {
    let output = mdexpand(&["view", "file=a.txt", "start=first"]);

    assert!(!output.status.success());
    let stderr = str::from_utf8(&output.stderr).unwrap();
    assert!(stderr.contains("start"));
}
