//! Tests for engine configuration.

use std::io::Write;

use super::*;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        lookback = 3
        random_seed = 42
        deterministic_fallback = false
        require_messages = true

        [termination]
        restart_limit = 10
        repair_passes = 25
        seconds_spent_limit = 30
    "#;

    let config = EngineConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.lookback, 3);
    assert_eq!(config.random_seed, Some(42));
    assert!(!config.deterministic_fallback);
    assert!(config.require_messages);
    assert_eq!(config.restart_limit(), 10);
    assert_eq!(config.repair_passes(100), 25);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        lookback: 1
        random_seed: 42
        history_rounds: [2023, 2025]
        termination:
          restart_limit: 5
    "#;

    let config = EngineConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.random_seed, Some(42));
    assert_eq!(config.restart_limit(), 5);
    assert_eq!(
        config.history_window(),
        HistoryWindow::Rounds(vec![2023, 2025])
    );
}

#[test]
fn test_empty_toml_uses_defaults() {
    let config = EngineConfig::from_toml_str("").unwrap();
    assert_eq!(config, EngineConfig::default());
    assert_eq!(config.lookback, DEFAULT_LOOKBACK);
    assert!(config.deterministic_fallback);
    assert_eq!(config.restart_limit(), DEFAULT_RESTART_LIMIT);
    assert_eq!(config.repair_passes(7), 70);
    assert_eq!(config.time_limit(), None);
}

#[test]
fn test_zero_restart_limit_rejected() {
    let err = EngineConfig::from_toml_str("[termination]\nrestart_limit = 0").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn test_builders_do_not_validate() {
    let config = EngineConfig::new().with_restart_limit(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    let config = EngineConfig::new().with_termination_seconds(0);
    assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

    assert!(EngineConfig::new().with_restart_limit(1).validate().is_ok());
}

#[test]
fn test_unparseable_toml() {
    let err = EngineConfig::from_toml_str("lookback = \"two\"").unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = EngineConfig::new()
        .with_random_seed(123)
        .with_lookback(4)
        .with_restart_limit(9)
        .with_repair_passes(3)
        .with_termination_seconds(60)
        .with_deterministic_fallback(false)
        .with_require_messages(true);

    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.history_window(), HistoryWindow::Lookback(4));
    assert_eq!(config.restart_limit(), 9);
    assert_eq!(config.repair_passes(50), 3);
    assert_eq!(config.time_limit(), Some(Duration::from_secs(60)));
    assert!(!config.deterministic_fallback);
    assert!(config.require_messages);
}

#[test]
fn test_load_by_extension() {
    let dir = tempfile::tempdir().unwrap();

    let toml_path = dir.path().join("santa.toml");
    let mut file = std::fs::File::create(&toml_path).unwrap();
    writeln!(file, "lookback = 5").unwrap();
    assert_eq!(EngineConfig::load(&toml_path).unwrap().lookback, 5);

    let yaml_path = dir.path().join("santa.yaml");
    let mut file = std::fs::File::create(&yaml_path).unwrap();
    writeln!(file, "lookback: 6").unwrap();
    assert_eq!(EngineConfig::load(&yaml_path).unwrap().lookback, 6);
}

#[test]
fn test_load_missing_file() {
    let err = EngineConfig::load("/nonexistent/santa.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
