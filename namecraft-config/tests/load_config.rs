use std::{fs, path::PathBuf, sync::Mutex};

use namecraft_config::{RenamerConfig, RenamerConfigSource};
use namecraft_core::{DEFAULT_SCRIPT, RenamerSettings};
use once_cell::sync::Lazy;
use tempfile::tempdir;

static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

const VARS: [&str; 5] = [
    "NAMECRAFT_CONFIG_PATH",
    "NAMECRAFT_CONFIG_JSON",
    "NAMECRAFT_SCRIPT_PATH",
    "NAMECRAFT_MAX_EPISODE_TITLE_LENGTH",
    "NAMECRAFT_REPLACE_INVALID_PATH_CHARACTERS",
];

fn clear_overrides() {
    for key in VARS {
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn defaults_without_any_source() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    let (config, source) = RenamerConfig::load_from_env().expect("load defaults");
    assert_eq!(source, RenamerConfigSource::Default);
    assert_eq!(config.settings, RenamerSettings::default());
    assert_eq!(config.load_script().expect("stock script"), DEFAULT_SCRIPT);
}

#[test]
fn config_path_wins_over_inline_json() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    let dir = tempdir().expect("tempdir");
    let config_path = dir.path().join("namecraft.toml");
    fs::write(
        &config_path,
        "max_episode_title_length = 50\nscript_path = \"rename.txt\"\n",
    )
    .expect("write config");
    fs::write(dir.path().join("rename.txt"), "DO ADD '%ann - %enr'\n").expect("write script");

    unsafe { std::env::set_var("NAMECRAFT_CONFIG_PATH", &config_path) };
    unsafe { std::env::set_var("NAMECRAFT_CONFIG_JSON", r#"{"max_episode_title_length": 10}"#) };

    let (config, source) = RenamerConfig::load_from_env().expect("load from path");
    clear_overrides();

    assert_eq!(source, RenamerConfigSource::EnvPath(config_path));
    assert_eq!(config.settings.max_episode_title_length, 50);
    assert_eq!(config.script_path, Some(dir.path().join("rename.txt")));
    assert_eq!(config.load_script().expect("read script"), "DO ADD '%ann - %enr'\n");

    let (_, script) = config.build().expect("build");
    assert_eq!(script.lines().len(), 1);
}

#[test]
fn inline_json_with_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    unsafe { std::env::set_var("NAMECRAFT_CONFIG_JSON", r#"{"max_episode_title_length": 10}"#) };
    unsafe { std::env::set_var("NAMECRAFT_REPLACE_INVALID_PATH_CHARACTERS", "off") };
    unsafe { std::env::set_var("NAMECRAFT_SCRIPT_PATH", "/srv/scripts/rename.txt") };

    let (config, source) = RenamerConfig::load_from_env().expect("load inline");
    clear_overrides();

    assert_eq!(source, RenamerConfigSource::EnvInline);
    assert_eq!(config.settings.max_episode_title_length, 10);
    assert!(!config.settings.replace_invalid_path_characters);
    assert_eq!(config.script_path, Some(PathBuf::from("/srv/scripts/rename.txt")));
}

#[test]
fn invalid_overrides_are_reported() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_overrides();

    unsafe { std::env::set_var("NAMECRAFT_MAX_EPISODE_TITLE_LENGTH", "long") };
    let err = RenamerConfig::load_from_env().expect_err("bad number");
    clear_overrides();
    assert!(err.to_string().contains("NAMECRAFT_MAX_EPISODE_TITLE_LENGTH"));

    unsafe { std::env::set_var("NAMECRAFT_REPLACE_INVALID_PATH_CHARACTERS", "sometimes") };
    let err = RenamerConfig::load_from_env().expect_err("bad bool");
    clear_overrides();
    assert!(err.to_string().contains("must be a boolean"));

    unsafe { std::env::set_var("NAMECRAFT_CONFIG_JSON", "{ not json") };
    let err = RenamerConfig::load_from_env().expect_err("bad json");
    clear_overrides();
    assert!(err.to_string().contains("NAMECRAFT_CONFIG_JSON"));
}

#[test]
fn json_file_and_missing_script() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("namecraft.json");
    fs::write(
        &path,
        r#"{ "replace_invalid_path_characters": false, "script_path": "missing.txt" }"#,
    )
    .expect("write config");

    let config = RenamerConfig::load_from_file(&path).expect("load json");
    assert!(!config.settings.replace_invalid_path_characters);

    let err = config.load_script().expect_err("script file is missing");
    assert!(err.to_string().contains("missing.txt"));
}

#[test]
fn script_without_statements_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let script_path = dir.path().join("empty.txt");
    fs::write(&script_path, "// nothing here\nIF Q(1) DO FAIL\n").expect("write script");

    let config = RenamerConfig {
        script_path: Some(script_path),
        ..RenamerConfig::default()
    };
    assert!(config.build().is_err());
}
