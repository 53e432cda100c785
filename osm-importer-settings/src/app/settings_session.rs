use crate::config::ImportSettingsConfig;
use crate::model::{
    access::AccessTree,
    speed_profile::{speed_profile_ops, SpeedProfile, SpeedProfileTable},
    ImportSettings, ScalarSettings, SettingsError,
};
use std::path::{Path, PathBuf};

/// state of an import settings editor between construction and teardown. it owns the
/// editable speed table and access tree; a host UI renders them and calls back in here.
#[derive(Debug, Clone)]
pub struct SettingsSession {
    config: ImportSettingsConfig,
    pub flags: ScalarSettings,
    pub table: SpeedProfileTable,
    pub access_tree: AccessTree,
    last_profile: Option<PathBuf>,
}

impl SettingsSession {
    /// restores a session from stored preferences. the remembered speed profile is loaded
    /// if it exists, otherwise the built-in default profile is used.
    pub fn new(config: ImportSettingsConfig) -> SettingsSession {
        let mut access_tree = AccessTree::default();
        if access_tree.select_label(&config.access_type).is_none() {
            log::warn!("unknown access type '{}'", config.access_type);
        }

        let last_profile = config.speed_profile.as_ref().map(PathBuf::from);
        let mut session = SettingsSession {
            flags: config.scalar_settings(),
            config,
            table: SpeedProfile::default_table(),
            access_tree,
            last_profile,
        };

        if let Some(path) = session.last_profile.clone().filter(|p| p.exists()) {
            if let Err(e) = session.load_profile(&path) {
                log::error!("failed restoring speed profile, using default: {e}");
            }
        }
        session
    }

    pub fn last_profile(&self) -> Option<&Path> {
        self.last_profile.as_deref()
    }

    /// replaces the speed table with the contents of a profile file.
    pub fn load_profile(&mut self, path: &Path) -> Result<(), SettingsError> {
        self.table = speed_profile_ops::read_table_file(path)?;
        log::debug!("read speed profile from: {path:?}");
        self.last_profile = Some(path.to_path_buf());
        Ok(())
    }

    /// writes the complete rows of the speed table to a profile file.
    pub fn save_profile(&mut self, path: &Path) -> Result<(), SettingsError> {
        speed_profile_ops::write_table_file(path, &self.table)?;
        self.last_profile = Some(path.to_path_buf());
        Ok(())
    }

    pub fn reset_default_profile(&mut self) {
        self.table = SpeedProfile::default_table();
    }

    pub fn extract_settings(&self) -> Result<ImportSettings, SettingsError> {
        ImportSettings::extract(&self.table, &self.access_tree, &self.flags)
    }

    /// preferences to store at teardown. the access type is only updated when exactly
    /// one category is selected.
    pub fn into_config(self) -> ImportSettingsConfig {
        let access_type = self
            .access_tree
            .selected_label()
            .map(String::from)
            .unwrap_or(self.config.access_type);
        ImportSettingsConfig {
            input_file: self.flags.input,
            traffic_light_penalty: self.flags.traffic_light_penalty,
            default_city_speed: self.flags.default_city_speed,
            ignore_oneway: self.flags.ignore_oneway,
            ignore_maxspeed: self.flags.ignore_maxspeed,
            speed_profile: self
                .last_profile
                .map(|p| p.to_string_lossy().to_string())
                .or(self.config.speed_profile),
            access_type,
        }
    }
}
