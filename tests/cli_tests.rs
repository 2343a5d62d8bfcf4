//! CLI integration tests

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Binary with config and data directories redirected into `home`
fn lingo_lens_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lingo-lens"));
    cmd.env_remove("GEMINI_API_KEY")
        .env_remove("RUST_LOG")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"));
    cmd
}

#[test]
fn help_output() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--audio"));
    assert!(stdout.contains("--target"));
    assert!(stdout.contains("--speak"));
    assert!(stdout.contains("--clipboard"));
    assert!(stdout.contains("--json"));
    assert!(stdout.contains("history"));
    assert!(stdout.contains("languages"));
}

#[test]
fn version_output() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lingo-lens"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn languages_are_grouped_by_region() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .arg("languages")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Global Hub"));
    assert!(stdout.contains("Asia & Indo-Pacific"));
    assert!(stdout.contains("bengali"));
    assert!(stdout.contains("Chinese (Simplified)"));
}

#[test]
fn config_path_command() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lingo-lens"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    let set = lingo_lens_bin(home.path())
        .args(["config", "set", "target_language", "Spanish"])
        .output()
        .expect("Failed to execute command");
    assert!(set.status.success());

    let get = lingo_lens_bin(home.path())
        .args(["config", "get", "target_language"])
        .output()
        .expect("Failed to execute command");
    assert!(get.status.success());
    assert_eq!(String::from_utf8_lossy(&get.stdout).trim(), "spanish");
}

#[test]
fn config_help() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn empty_history_lists_nothing() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .args(["history", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).trim().is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No history yet"));
}

#[test]
fn history_clear_on_empty_succeeds() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .args(["history", "clear"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
}

#[test]
fn text_conflicts_with_audio() {
    let home = TempDir::new().unwrap();
    let output = lingo_lens_bin(home.path())
        .args(["Adda", "--audio", "clip.wav"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cannot be used with"),
        "Expected conflict error, got: {}",
        stderr
    );
}
