use super::{speed_profile_ops, SpeedProfileRow, SpeedProfileTable};
use crate::model::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// built-in profile used when no profile file has been chosen.
const DEFAULT_PROFILE: &str = include_str!("../../resources/default.spp");

/// ordered road classification speeds. row order follows the source file and names
/// are not required to be unique.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SpeedProfile {
    rows: Vec<SpeedProfileRow>,
}

impl SpeedProfile {
    pub fn new(rows: Vec<SpeedProfileRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SpeedProfileRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// first row with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&SpeedProfileRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// the text of the built-in default profile.
    pub fn default_profile_text() -> &'static str {
        DEFAULT_PROFILE
    }

    /// the built-in default profile as an editable table.
    pub fn default_table() -> SpeedProfileTable {
        speed_profile_ops::read_table(DEFAULT_PROFILE)
    }

    /// parses speed profile text. lines with the wrong number of fields are skipped,
    /// but a numeric field that is not an unsigned integer is an error.
    pub fn parse(text: &str) -> Result<SpeedProfile, SettingsError> {
        let table = speed_profile_ops::read_table(text);
        speed_profile_ops::to_speed_profile(&table)
    }

    pub fn read_file(path: &Path) -> Result<SpeedProfile, SettingsError> {
        let table = speed_profile_ops::read_table_file(path)?;
        speed_profile_ops::to_speed_profile(&table)
    }

    pub fn serialize(&self) -> String {
        speed_profile_ops::serialize_table(&SpeedProfileTable::from(self))
    }

    pub fn write_file(&self, path: &Path) -> Result<(), SettingsError> {
        speed_profile_ops::write_table_file(path, &SpeedProfileTable::from(self))
    }
}
