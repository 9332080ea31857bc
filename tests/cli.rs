//! Integration tests for the vidforge binary's startup short-circuits.
//!
//! Anything past these paths needs a real terminal, so the dependency
//! resolver and the TUI are covered by unit tests instead.

use std::process::Command;

fn vidforge() -> Command {
    Command::new(env!("CARGO_BIN_EXE_vidforge"))
}

#[test]
fn test_version_flag_prints_version_and_exits() {
    let output = vidforge().arg("--version").env_remove("CI").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_ci_mode_skips_dependencies_and_ui() {
    let output = vidforge()
        .env("CI", "true")
        .env("PATH", "")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "VidForge CI mode: startup OK"
    );
}

#[test]
fn test_unknown_flag_fails() {
    let output = vidforge().arg("--bogus").env_remove("CI").output().unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_strict_mode_without_tools_fails_with_guidance() {
    let home = tempfile::tempdir().unwrap();

    // Empty PATH, empty home and no terminal on stdin: nothing can be resolved
    let output = vidforge()
        .args(["--policy", "strict"])
        .env_remove("CI")
        .env("PATH", "")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .stdin(std::process::Stdio::null())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("yt-dlp not found. Please install it:"));
    assert!(stderr.contains("macOS: brew install yt-dlp"));
}
