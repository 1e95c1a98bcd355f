use std::path::{Path, PathBuf};

use fixtura_core::DEFAULT_LOCALE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_SETTINGS_FILE: &str = "fixtura.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locale: String,
    pub seed: Option<u64>,
    /// Directory of `<locale>/<domain>.json` bundles used instead of the
    /// embedded ones.
    pub assets_dir: Option<PathBuf>,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
            assets_dir: None,
            log_level: "warn".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

/// Read settings from `explicit`, or from `fixtura.toml` in the working
/// directory. Only an explicitly named file has to exist.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, SettingsError> {
    let path = match explicit {
        Some(path) if !path.exists() => return Err(SettingsError::NotFound(path.to_path_buf())),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(DEFAULT_SETTINGS_FILE),
    };
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fixtura.toml");
        std::fs::write(&path, "locale = \"ru\"\nseed = 7\nlog_format = \"json\"\n")
            .expect("write settings");

        let settings = load_settings(Some(&path)).expect("settings");
        assert_eq!(settings.locale, "ru");
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.assets_dir, None);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            load_settings(Some(&path)),
            Err(SettingsError::NotFound(_))
        ));
    }

    #[test]
    fn unknown_log_format_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fixtura.toml");
        std::fs::write(&path, "log_format = \"xml\"\n").expect("write settings");
        assert!(matches!(load_settings(Some(&path)), Err(SettingsError::Toml(_))));
    }
}
