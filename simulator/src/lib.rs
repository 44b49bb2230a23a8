//! Local driver for the arcade engine.
//!
//! Loads a YAML [Config], validates it into a [ValidatedConfig] and hands the
//! engine settings to [arcade_execution::Arcade].

use arcade_execution::{engine, withdrawal::Policy};
use arcade_types::casino::{
    COIN_VALUE_CENTS, DEFAULT_WIN_PROBABILITY, MIN_WITHDRAWAL, WITHDRAWAL_FEE_BPS,
};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::Level;

/// Configuration for the simulator, as read from disk.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Directory holding the wallet store.
    pub directory: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,

    #[serde(default = "default_win_probability")]
    pub win_probability: f64,
    #[serde(default = "default_resolve_delay_ms")]
    pub resolve_delay_ms: u64,
    #[serde(default = "default_natural_delay_ms")]
    pub natural_delay_ms: u64,
    /// Replays a deterministic draw sequence when set.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default)]
    pub withdrawal: WithdrawalConfig,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct WithdrawalConfig {
    #[serde(default = "default_minimum")]
    pub minimum: u64,
    #[serde(default = "default_coin_value_cents")]
    pub coin_value_cents: u64,
    #[serde(default = "default_fee_bps")]
    pub fee_bps: u64,
}

impl Default for WithdrawalConfig {
    fn default() -> Self {
        Self {
            minimum: default_minimum(),
            coin_value_cents: default_coin_value_cents(),
            fee_bps: default_fee_bps(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_worker_threads() -> usize {
    2
}

fn default_win_probability() -> f64 {
    DEFAULT_WIN_PROBABILITY
}

fn default_resolve_delay_ms() -> u64 {
    2_000
}

fn default_natural_delay_ms() -> u64 {
    1_000
}

fn default_minimum() -> u64 {
    MIN_WITHDRAWAL
}

fn default_coin_value_cents() -> u64 {
    COIN_VALUE_CENTS
}

fn default_fee_bps() -> u64 {
    WITHDRAWAL_FEE_BPS
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: usize },
    #[error("win_probability must be within [0, 1] (got {value})")]
    InvalidProbability { value: f64 },
    #[error("withdrawal.fee_bps must be <= 10000 (got {value})")]
    InvalidFee { value: u64 },
    #[error("directory must not be empty")]
    MissingDirectory,
}

/// Configuration checked and converted into the types the engine consumes.
#[derive(Clone, Debug)]
pub struct ValidatedConfig {
    pub directory: PathBuf,
    pub log_level: Level,
    pub worker_threads: usize,
    pub seed: Option<u64>,
    pub engine: engine::Config,
}

impl Config {
    /// Parse a YAML document.
    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.directory.trim().is_empty() {
            return Err(ConfigError::MissingDirectory);
        }
        if self.worker_threads == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "worker_threads",
                value: self.worker_threads,
            });
        }
        if !(0.0..=1.0).contains(&self.win_probability) {
            return Err(ConfigError::InvalidProbability {
                value: self.win_probability,
            });
        }
        if self.withdrawal.fee_bps > 10_000 {
            return Err(ConfigError::InvalidFee {
                value: self.withdrawal.fee_bps,
            });
        }
        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;

        Ok(ValidatedConfig {
            directory: PathBuf::from(self.directory),
            log_level,
            worker_threads: self.worker_threads,
            seed: self.seed,
            engine: engine::Config {
                resolve_delay: Duration::from_millis(self.resolve_delay_ms),
                natural_delay: Duration::from_millis(self.natural_delay_ms),
                win_probability: self.win_probability,
                withdrawal: Policy {
                    minimum: self.withdrawal.minimum,
                    coin_value_cents: self.withdrawal.coin_value_cents,
                    fee_bps: self.withdrawal.fee_bps,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml("directory: /tmp/arcade\n").unwrap();
        let validated = config.validate().unwrap();
        assert_eq!(validated.directory, PathBuf::from("/tmp/arcade"));
        assert_eq!(validated.log_level, Level::INFO);
        assert_eq!(validated.seed, None);
        assert_eq!(validated.engine.resolve_delay, Duration::from_secs(2));
        assert_eq!(validated.engine.natural_delay, Duration::from_secs(1));
        assert_eq!(validated.engine.win_probability, DEFAULT_WIN_PROBABILITY);
        assert_eq!(validated.engine.withdrawal, Policy::default());
    }

    #[test]
    fn test_full_document() {
        let raw = r#"
directory: wallet
log_level: debug
worker_threads: 4
win_probability: 0.5
resolve_delay_ms: 10
natural_delay_ms: 5
seed: 42
withdrawal:
  minimum: 50
  fee_bps: 0
"#;
        let validated = Config::from_yaml(raw).unwrap().validate().unwrap();
        assert_eq!(validated.log_level, Level::DEBUG);
        assert_eq!(validated.worker_threads, 4);
        assert_eq!(validated.seed, Some(42));
        assert_eq!(validated.engine.resolve_delay, Duration::from_millis(10));
        assert_eq!(validated.engine.withdrawal.minimum, 50);
        assert_eq!(validated.engine.withdrawal.fee_bps, 0);
        assert_eq!(validated.engine.withdrawal.coin_value_cents, COIN_VALUE_CENTS);
    }

    #[test]
    fn test_missing_directory() {
        assert!(Config::from_yaml("log_level: info\n").is_err());
        let config = Config::from_yaml("directory: \"  \"\n").unwrap();
        assert_eq!(config.validate().unwrap_err(), ConfigError::MissingDirectory);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = Config::from_yaml("directory: d\nwin_probability: 1.5\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidProbability { value: 1.5 }
        );

        let config = Config::from_yaml("directory: d\nwithdrawal:\n  fee_bps: 10001\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidFee { value: 10_001 }
        );

        let config = Config::from_yaml("directory: d\nlog_level: loud\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidLogLevel {
                value: "loud".to_string()
            }
        );

        let config = Config::from_yaml("directory: d\nworker_threads: 0\n").unwrap();
        assert_eq!(
            config.validate().unwrap_err(),
            ConfigError::InvalidNonZero {
                field: "worker_threads",
                value: 0
            }
        );
    }
}
