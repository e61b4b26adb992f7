//! Accessor configuration.

use std::env;
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::Error;

/// Accessor settings, usually left at their defaults.
///
/// Loaded from TOML. Boolean settings can be overridden from the
/// environment (`ROWFIELD_TRIM_TEXT`, `ROWFIELD_LOG_RECOVERED`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Trim surrounding whitespace from values read as text.
    ///
    /// _Default:_ `true`
    #[serde(default = "Config::trim_text")]
    pub trim_text: bool,

    /// Emit a debug event when a failed conversion is replaced
    /// by a default value.
    ///
    /// _Default:_ `true`
    #[serde(default = "Config::log_recovered")]
    pub log_recovered: bool,

    /// Layouts tried, in order, when converting text to a timestamp.
    /// Bare dates (`2024-01-31`) are always accepted.
    #[serde(default = "Config::timestamp_formats")]
    pub timestamp_formats: Vec<String>,

    /// Layouts tried when converting text to a timestamp with offset,
    /// after RFC 3339.
    #[serde(default = "Config::timestamptz_formats")]
    pub timestamptz_formats: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trim_text: Self::trim_text(),
            log_recovered: Self::log_recovered(),
            timestamp_formats: Self::timestamp_formats(),
            timestamptz_formats: Self::timestamptz_formats(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let source = read_to_string(path)?;
        let config = source.parse()?;
        info!("loaded \"{}\"", path.display());
        Ok(config)
    }

    fn env_bool_or_default(env_var: &str, default: bool) -> bool {
        env::var(env_var)
            .ok()
            .and_then(|v| match v.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Some(true),
                "false" | "0" | "no" | "off" => Some(false),
                _ => None,
            })
            .unwrap_or(default)
    }

    fn trim_text() -> bool {
        Self::env_bool_or_default("ROWFIELD_TRIM_TEXT", true)
    }

    fn log_recovered() -> bool {
        Self::env_bool_or_default("ROWFIELD_LOG_RECOVERED", true)
    }

    fn timestamp_formats() -> Vec<String> {
        vec![
            "%Y-%m-%d %H:%M:%S%.f".into(),
            "%Y-%m-%dT%H:%M:%S%.f".into(),
        ]
    }

    fn timestamptz_formats() -> Vec<String> {
        vec![
            "%Y-%m-%d %H:%M:%S%.f%#z".into(),
            "%Y-%m-%d %H:%M:%S%.f %:z".into(),
        ]
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}
