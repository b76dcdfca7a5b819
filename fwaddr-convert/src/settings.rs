use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::mask::MaskPolicy;

/// CSV header names for each inventory field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub hostname: String,
    pub ip: String,
    pub mask: String,
    pub comment: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            hostname: "hostname".to_string(),
            ip: "ip address".to_string(),
            mask: "Subnetmask".to_string(),
            comment: "comment".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MaskSettings {
    pub unknown: MaskPolicy,
}

/// Conversion settings, usually loaded from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub columns: ColumnNames,
    pub masks: MaskSettings,
}

/// Errors returned when loading settings files.
#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read settings file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// Load settings from a TOML file. Keys left out keep their defaults.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsLoadError> {
    let raw = fs::read_to_string(path).map_err(|source| SettingsLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_settings(&raw, path.display().to_string())
}

/// Built-in settings shipped with the binary.
pub fn default_settings() -> Settings {
    let embedded = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/settings/default.toml"
    ));
    parse_settings(embedded, "embedded settings".to_string()).unwrap_or_default()
}

fn parse_settings(raw: &str, path: String) -> Result<Settings, SettingsLoadError> {
    toml::from_str(raw).map_err(|source| SettingsLoadError::Parse { path, source })
}
