use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_CURRENCY: &str = "USD";
/// Plano, TX.
pub const DEFAULT_LAT: f64 = 33.0217;
pub const DEFAULT_LONG: f64 = -96.6980;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Unit system for weather and distances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Units {
    #[default]
    Imperial,
    Metric,
}

impl Units {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_uppercase().as_str() {
            "IMPERIAL" => Some(Units::Imperial),
            "METRIC" => Some(Units::Metric),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_base_currency")]
    pub base_currency: String,
    #[serde(default)]
    pub units: Units,
    #[serde(default = "default_lat")]
    pub default_lat: f64,
    #[serde(default = "default_long")]
    pub default_long: f64,
}

fn default_base_currency() -> String {
    DEFAULT_BASE_CURRENCY.to_string()
}

fn default_lat() -> f64 {
    DEFAULT_LAT
}

fn default_long() -> f64 {
    DEFAULT_LONG
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_currency: default_base_currency(),
            units: Units::default(),
            default_lat: DEFAULT_LAT,
            default_long: DEFAULT_LONG,
        }
    }
}

fn trip_planner_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".trip-planner")
}

pub fn default_config_path() -> PathBuf {
    trip_planner_dir().join("config.json")
}

impl Settings {
    /// Defaults, then `~/.trip-planner/config.json` if it exists and parses,
    /// then environment overrides.
    pub fn load() -> Self {
        let path = default_config_path();
        let mut settings = if path.exists() {
            Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("ignoring config file: {}", e);
                Settings::default()
            })
        } else {
            Settings::default()
        };
        settings.apply_env_overrides(|key| std::env::var(key).ok());
        settings
    }

    /// Like [`Settings::load`] but the given file must exist and parse.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut settings = Self::from_file(path)?;
        settings.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Reads JSON, or TOML when the extension is `.toml`.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_toml = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("toml"))
            .unwrap_or(false);

        let parsed = if is_toml {
            toml::from_str::<Settings>(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<Settings>(&content).map_err(|e| e.to_string())
        };

        parsed.map_err(|reason| ConfigError::Parse {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Applies `BASE_CURRENCY`, `UNITS`, `DEFAULT_LAT` and `DEFAULT_LONG`.
    /// Values that do not parse are skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(currency) = lookup("BASE_CURRENCY") {
            let currency = currency.trim();
            if !currency.is_empty() {
                self.base_currency = currency.to_ascii_uppercase();
            }
        }
        if let Some(units) = lookup("UNITS") {
            match Units::parse(&units) {
                Some(units) => self.units = units,
                None => log::warn!("ignoring UNITS={:?}, expected METRIC or IMPERIAL", units),
            }
        }
        if let Some(lat) = lookup("DEFAULT_LAT") {
            match parse_coordinate(&lat, 90.0) {
                Some(lat) => self.default_lat = lat,
                None => log::warn!("ignoring DEFAULT_LAT={:?}", lat),
            }
        }
        if let Some(long) = lookup("DEFAULT_LONG") {
            match parse_coordinate(&long, 180.0) {
                Some(long) => self.default_long = long,
                None => log::warn!("ignoring DEFAULT_LONG={:?}", long),
            }
        }
    }
}

fn parse_coordinate(value: &str, limit: f64) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|coordinate| coordinate.is_finite() && coordinate.abs() <= limit)
}
