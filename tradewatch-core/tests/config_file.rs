use std::io::Write;

use tradewatch_core::{ConfigError, DashboardConfig, InvestigationStep};

#[test]
fn missing_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = DashboardConfig::load(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.initial_step, InvestigationStep::RiskAssessment);
}

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "initial_step = \"data_gathering\"").unwrap();
    writeln!(file, "master_seed = 77").unwrap();
    writeln!(file, "log_level = \"tradewatch=debug\"").unwrap();

    let config = DashboardConfig::load(file.path()).unwrap();
    assert_eq!(config.initial_step, InvestigationStep::DataGathering);
    assert_eq!(config.master_seed, 77);
    assert_eq!(config.log_level, "tradewatch=debug");
    assert_eq!(config.tick_rate_ms, 50);
}

#[test]
fn malformed_file_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not valid toml {{{{").unwrap();

    let err = DashboardConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn written_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let config = DashboardConfig {
        master_seed: 5,
        ..DashboardConfig::default()
    };
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();
    assert_eq!(DashboardConfig::load(&path).unwrap(), config);
}
