use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::CliError;

pub const SETTINGS_FILE: &str = "metricboard.toml";

/// CLI settings, loaded from `metricboard.toml` when present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Settings {
    /// Event poll interval for the interactive view.
    pub tick_rate_ms: u64,
    /// Default output directory for report artifacts.
    pub out_dir: PathBuf,
    /// Show numeric weights next to chart legends.
    pub arc_labels: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            out_dir: PathBuf::from("reports"),
            arc_labels: true,
        }
    }
}

pub fn load_settings() -> Result<Settings, CliError> {
    let path = PathBuf::from(SETTINGS_FILE);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let settings =
        toml::from_str(&content).map_err(|err| CliError::InvalidConfig(err.to_string()))?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let settings = Settings::default();
        assert_eq!(settings.tick_rate_ms, 100);
        assert_eq!(settings.out_dir, PathBuf::from("reports"));
        assert!(settings.arc_labels);
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let settings: Settings = toml::from_str("tick_rate_ms = 250").expect("parse settings");
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.out_dir, PathBuf::from("reports"));
    }
}
