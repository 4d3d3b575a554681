//! File-level config loading: layering, explicit paths, parse failures.
//! Merge mechanics on in-memory patches are covered next to the config
//! types themselves.

use std::fs;
use std::path::Path;
use std::time::Duration;

use nova::config::Config;
use nova::error::NovaError;
use tempfile::tempdir;

fn write_config(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn explicit_path_bypasses_root_config() {
    let dir = tempdir().unwrap();
    write_config(dir.path(), "config.toml", "[display]\nwrap = 60\n");
    let explicit = write_config(dir.path(), "explicit.toml", "[display]\nwrap = 100\n");

    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.display.wrap, 100);
}

#[test]
fn root_config_applies_without_explicit_path() {
    let dir = tempdir().unwrap();
    write_config(
        dir.path(),
        "config.toml",
        "[remote]\nendpoint = \"https://answers.example.com/hook\"\n\n[display]\nwrap = 72\n",
    );

    let config = Config::load(None, dir.path()).unwrap();
    assert_eq!(config.display.wrap, 72);
    assert_eq!(
        config.remote.endpoint.as_deref(),
        Some("https://answers.example.com/hook")
    );
}

#[test]
fn absent_files_leave_defaults() {
    let dir = tempdir().unwrap();
    let explicit = dir.path().join("nowhere.toml");

    // An explicit path that does not exist is not an error, just empty.
    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.display.wrap, 80);
    assert!(config.display.celebrate);
    assert_eq!(config.remote.timeout, Duration::from_secs(30));
}

#[test]
fn timeout_accepts_humantime_strings() {
    let dir = tempdir().unwrap();
    let explicit = write_config(dir.path(), "explicit.toml", "[remote]\ntimeout = \"2m\"\n");

    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.remote.timeout, Duration::from_secs(120));
}

#[test]
fn invalid_toml_is_a_config_error_naming_the_file() {
    let dir = tempdir().unwrap();
    let explicit = write_config(dir.path(), "broken.toml", "[remote\nendpoint=");

    let err = Config::load(Some(&explicit), dir.path()).unwrap_err();
    assert!(matches!(err, NovaError::Config(_)));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn unknown_keys_are_tolerated() {
    // Older or newer configs may carry sections this build does not know.
    let dir = tempdir().unwrap();
    let explicit = write_config(
        dir.path(),
        "explicit.toml",
        "[display]\nwrap = 64\n\n[experimental]\nshiny = true\n",
    );

    let config = Config::load(Some(&explicit), dir.path()).unwrap();
    assert_eq!(config.display.wrap, 64);
}
