use std::fs;

use detailing_strategist::domain::models::BackendProvider;
use detailing_strategist::infrastructure::config::{ConfigError, ConfigLoader};

fn write_project_config(dir: &std::path::Path, file: &str, contents: &str) {
    let config_dir = dir.join(".strategist");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join(file), contents).unwrap();
}

#[test]
fn test_defaults_without_files() {
    let dir = tempfile::tempdir().unwrap();
    temp_env::with_vars_unset(["STRATEGIST_BACKEND__MODEL", "STRATEGIST_LOGGING__LEVEL"], || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.backend.provider, BackendProvider::Anthropic);
        assert_eq!(config.backend.model, "claude-3-5-sonnet-20241022");
        assert_eq!(config.logging.level, "warn");
    });
}

#[test]
fn test_local_overrides_project_and_env_overrides_both() {
    let dir = tempfile::tempdir().unwrap();
    write_project_config(
        dir.path(),
        "config.yaml",
        "backend:\n  provider: mock\n  model: claude-project\n  timeout_secs: 60\n",
    );
    write_project_config(dir.path(), "local.yaml", "backend:\n  model: claude-local\n");

    temp_env::with_var_unset("STRATEGIST_BACKEND__MODEL", || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.backend.provider, BackendProvider::Mock);
        assert_eq!(config.backend.model, "claude-local");
        assert_eq!(config.backend.timeout_secs, 60);
    });

    temp_env::with_var("STRATEGIST_BACKEND__MODEL", Some("claude-env"), || {
        let config = ConfigLoader::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.backend.model, "claude-env");
    });
}

#[test]
fn test_invalid_values_fail_validation() {
    let dir = tempfile::tempdir().unwrap();
    write_project_config(dir.path(), "config.yaml", "logging:\n  format: xml\n");

    let err = ConfigLoader::load_from_dir(dir.path()).unwrap_err();
    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::InvalidLogFormat("xml".to_string()))
    );
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "backend: [unclosed").unwrap();
    assert!(ConfigLoader::load_from_file(&path).is_err());
}

#[test]
fn test_explicit_config_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("strategist.yaml");

    let err = ConfigLoader::load_from_file(&missing).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
    assert!(err.to_string().contains("strategist.yaml"));

    fs::write(&missing, "backend:\n  model: claude-explicit\n").unwrap();
    temp_env::with_var_unset("STRATEGIST_BACKEND__MODEL", || {
        let config = ConfigLoader::load_from_file(&missing).unwrap();
        assert_eq!(config.backend.model, "claude-explicit");
    });
}
