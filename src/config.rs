//! Run configuration.
//!
//! Read from `SUBNET_*` environment variables (a `.env` file is loaded by
//! `main` through `dotenv` first). Every key is optional.

use log::LevelFilter;
use std::str::FromStr;
use thiserror::Error;

/// Input used when `SUBNET_INPUT` is not set.
pub const DEFAULT_SINGLE_INPUT: &str = "192.0.2.10/27";

/// Separator for the `SUBNET_INPUTS` list.
pub const INPUT_LIST_SEPARATOR: char = ';';

/// Built-in demo list used when `SUBNET_INPUTS` is not set.
pub fn default_inputs() -> Vec<String> {
    [
        // normal CIDR
        "59.89.212.216/14",
        "192.168.1.10/24",
        "10.0.0.1/8",
        "172.16.5.10/16",
        // full masks
        "192.168.1.10 255.255.255.0",
        "10.0.0.1 255.0.0.0",
        "172.16.5.10 255.255.0.0",
        // alternative separators
        "192.168.1.50-24",
        "192.168.1.50:24",
        "10.0.0.1-255.0.0.0",
        // edge cases
        "0.0.0.0/0",
        "255.255.255.255/32",
        "10.0.0.0/31",
        "10.0.0.0/32",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}, expected one of: {expected}")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Which inputs a run processes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    #[default]
    Single,
    List,
    Both,
}

impl RunMode {
    pub fn includes_list(&self) -> bool {
        matches!(self, RunMode::List | RunMode::Both)
    }

    pub fn includes_single(&self) -> bool {
        matches!(self, RunMode::Single | RunMode::Both)
    }
}

impl FromStr for RunMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "single" => Ok(RunMode::Single),
            "list" => Ok(RunMode::List),
            "both" => Ok(RunMode::Both),
            _ => Err(ConfigError::InvalidValue {
                key: "SUBNET_RUN_MODE",
                value: s.to_string(),
                expected: "single, list, both",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: "SUBNET_OUTPUT",
                value: s.to_string(),
                expected: "text, json",
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub run_mode: RunMode,
    /// `None` skips the single-input run.
    pub single_input: Option<String>,
    pub inputs: Vec<String>,
    /// Print the byte-by-byte explanation after each summary.
    pub explain: bool,
    pub output: OutputFormat,
    /// Ceiling for log output, applied on top of `log4rs.yml` when present.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            run_mode: RunMode::default(),
            single_input: Some(DEFAULT_SINGLE_INPUT.to_string()),
            inputs: default_inputs(),
            explain: true,
            output: OutputFormat::default(),
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(mode) = lookup("SUBNET_RUN_MODE") {
            config.run_mode = mode.parse()?;
        }
        if let Some(input) = lookup("SUBNET_INPUT") {
            let input = input.trim();
            config.single_input = (!input.is_empty()).then(|| input.to_string());
        }
        if let Some(inputs) = lookup("SUBNET_INPUTS") {
            config.inputs = split_input_list(&inputs);
        }
        if let Some(explain) = lookup("SUBNET_EXPLAIN") {
            config.explain = parse_bool("SUBNET_EXPLAIN", &explain)?;
        }
        if let Some(output) = lookup("SUBNET_OUTPUT") {
            config.output = output.parse()?;
        }
        if let Some(level) = lookup("SUBNET_LOG_LEVEL") {
            config.log_level =
                LevelFilter::from_str(level.trim()).map_err(|_| ConfigError::InvalidValue {
                    key: "SUBNET_LOG_LEVEL",
                    value: level.clone(),
                    expected: "off, error, warn, info, debug, trace",
                })?;
        }

        log::debug!("config: {:?}", config);
        Ok(config)
    }

    /// Replace the configured inputs with an explicit list and run only that list.
    pub fn with_inputs(mut self, inputs: Vec<String>) -> Config {
        self.inputs = inputs;
        self.run_mode = RunMode::List;
        self
    }
}

fn split_input_list(value: &str) -> Vec<String> {
    value
        .split(INPUT_LIST_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
            expected: "true, false",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.run_mode, RunMode::Single);
        assert_eq!(config.single_input.as_deref(), Some("192.0.2.10/27"));
        assert_eq!(config.inputs.len(), 14);
        assert!(config.explain);
        assert_eq!(config.output, OutputFormat::Text);
        assert_eq!(config.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("SUBNET_RUN_MODE", "Both"),
            ("SUBNET_INPUT", " 10.0.0.1-8 "),
            ("SUBNET_INPUTS", "192.168.1.10/24; abcd ;;10.0.0.0/31"),
            ("SUBNET_EXPLAIN", "no"),
            ("SUBNET_OUTPUT", "json"),
            ("SUBNET_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert_eq!(config.run_mode, RunMode::Both);
        assert_eq!(config.single_input.as_deref(), Some("10.0.0.1-8"));
        assert_eq!(config.inputs, vec!["192.168.1.10/24", "abcd", "10.0.0.0/31"]);
        assert!(!config.explain);
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_empty_single_input_skips_single_run() {
        let config = config_from(&[("SUBNET_INPUT", "  ")]).unwrap();
        assert_eq!(config.single_input, None);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            config_from(&[("SUBNET_RUN_MODE", "all")]).unwrap_err(),
            ConfigError::InvalidValue {
                key: "SUBNET_RUN_MODE",
                value: "all".to_string(),
                expected: "single, list, both",
            }
        );
        assert!(config_from(&[("SUBNET_OUTPUT", "yaml")]).is_err());
        assert!(config_from(&[("SUBNET_EXPLAIN", "maybe")]).is_err());
        assert!(config_from(&[("SUBNET_LOG_LEVEL", "loud")]).is_err());
    }

    #[test]
    fn test_run_mode_selection() {
        assert!(RunMode::Single.includes_single());
        assert!(!RunMode::Single.includes_list());
        assert!(RunMode::List.includes_list());
        assert!(!RunMode::List.includes_single());
        assert!(RunMode::Both.includes_list() && RunMode::Both.includes_single());
    }

    #[test]
    fn test_with_inputs() {
        let config = Config::default().with_inputs(vec!["10.0.0.1/8".to_string()]);
        assert_eq!(config.run_mode, RunMode::List);
        assert_eq!(config.inputs, vec!["10.0.0.1/8"]);
    }
}
