use crate::model::{ScalarSettings, SettingsError};
use config::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// user preferences for an OSM import, restored when a settings session starts and
/// written back when it ends.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ImportSettingsConfig {
    pub input_file: String,
    pub traffic_light_penalty: u32,
    pub default_city_speed: bool,
    pub ignore_oneway: bool,
    pub ignore_maxspeed: bool,
    /// last speed profile file loaded or saved
    pub speed_profile: Option<String>,
    pub access_type: String,
}

impl Default for ImportSettingsConfig {
    fn default() -> Self {
        Self {
            input_file: String::new(),
            traffic_light_penalty: 1,
            default_city_speed: true,
            ignore_oneway: false,
            ignore_maxspeed: false,
            speed_profile: None,
            access_type: String::from("motorcar"),
        }
    }
}

impl ImportSettingsConfig {
    pub fn scalar_settings(&self) -> ScalarSettings {
        ScalarSettings {
            input: self.input_file.clone(),
            default_city_speed: self.default_city_speed,
            traffic_light_penalty: self.traffic_light_penalty,
            ignore_oneway: self.ignore_oneway,
            ignore_maxspeed: self.ignore_maxspeed,
        }
    }

    /// writes these preferences as TOML.
    pub fn write_file(&self, path: &Path) -> Result<(), SettingsError> {
        let s = toml::to_string(self).map_err(|e| {
            SettingsError::ConfigurationError(format!("failure encoding {path:?}: {e}"))
        })?;
        std::fs::write(path, s).map_err(|source| SettingsError::IoError {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl TryFrom<&String> for ImportSettingsConfig {
    type Error = SettingsError;

    /// reads preferences from a .toml or .json file. missing keys take their defaults.
    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if !(f.ends_with(".toml") || f.ends_with(".json")) {
            return Err(SettingsError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        }
        let config = Config::builder()
            .add_source(config::File::with_name(f))
            .build()
            .map_err(|e| SettingsError::ConfigurationError(format!("failure reading {f}: {e}")))?;
        config
            .try_deserialize::<ImportSettingsConfig>()
            .map_err(|e| SettingsError::ConfigurationError(format!("failure decoding {f}: {e}")))
    }
}
