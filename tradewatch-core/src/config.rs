//! Dashboard configuration: TOML file with defaults for every field.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::step::InvestigationStep;

/// Startup settings for the dashboard.
///
/// Every field has a default, so a partial file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Step shown before the analyst selects anything.
    pub initial_step: InvestigationStep,
    /// Master seed for chart tables; 0 derives one from the clock at startup.
    pub master_seed: u64,
    /// Input poll timeout per frame.
    pub tick_rate_ms: u64,
    /// Log file; `None` uses the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_step: InvestigationStep::RiskAssessment,
            master_seed: 0,
            tick_rate_ms: 50,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Seed actually used for chart generation.
    ///
    /// A configured seed of 0 is replaced by `fallback` (typically clock-derived),
    /// itself bumped to 1 if it is also 0.
    pub fn effective_seed(&self, fallback: u64) -> u64 {
        match self.master_seed {
            0 => fallback.max(1),
            seed => seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_fills_defaults() {
        let config: DashboardConfig = toml::from_str("initial_step = \"recommendation\"").unwrap();
        assert_eq!(config.initial_step, InvestigationStep::Recommendation);
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn unknown_step_is_rejected() {
        let result: Result<DashboardConfig, _> = toml::from_str("initial_step = \"triage\"");
        assert!(result.is_err());
    }

    #[test]
    fn effective_seed() {
        let mut config = DashboardConfig::default();
        assert_eq!(config.effective_seed(99), 99);
        assert_eq!(config.effective_seed(0), 1);
        config.master_seed = 7;
        assert_eq!(config.effective_seed(99), 7);
    }

    #[test]
    fn toml_round_trip() {
        let config = DashboardConfig {
            initial_step: InvestigationStep::PatternAnalysis,
            master_seed: 1234,
            tick_rate_ms: 100,
            log_file: Some(PathBuf::from("/tmp/tw.log")),
            log_level: "debug".into(),
        };
        let text = config.to_toml_string().unwrap();
        let back: DashboardConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
