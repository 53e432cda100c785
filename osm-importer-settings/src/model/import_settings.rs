use super::{
    access::AccessSelection,
    speed_profile::{speed_profile_ops, SpeedProfile, TableSource},
    SettingsError,
};
use serde::{Deserialize, Serialize};

/// flags passed through to the import unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScalarSettings {
    /// path to the OSM data file to import
    pub input: String,
    pub default_city_speed: bool,
    /// penalty applied per traffic light node
    pub traffic_light_penalty: u32,
    pub ignore_oneway: bool,
    pub ignore_maxspeed: bool,
}

/// complete configuration for an OSM road network import.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImportSettings {
    pub input: String,
    pub default_city_speed: bool,
    pub traffic_light_penalty: u32,
    pub ignore_oneway: bool,
    pub ignore_maxspeed: bool,
    pub speed_profile: SpeedProfile,
    /// selected access category followed by its ancestors, e.g. motorcar, motor_vehicle, vehicle
    pub access_list: Vec<String>,
}

impl ImportSettings {
    /// builds import settings from the speed table and access selection of a host UI.
    /// the table is validated first, then the selection. the first failure is returned
    /// and nothing is modified.
    pub fn extract<S: AccessSelection>(
        table: &impl TableSource,
        selection: &S,
        flags: &ScalarSettings,
    ) -> Result<ImportSettings, SettingsError> {
        let speed_profile = speed_profile_ops::to_speed_profile(table).inspect_err(|e| {
            log::error!("invalid speed profile table: {e}");
        })?;

        let access_list = match selection.selected().as_slice() {
            [node] => selection.path_to_root(*node),
            nodes => {
                log::error!("no access type selected");
                return Err(SettingsError::NoAccessTypeSelected(nodes.len()));
            }
        };
        log::debug!("access list: {}", access_list.join(", "));

        Ok(ImportSettings {
            input: flags.input.clone(),
            default_city_speed: flags.default_city_speed,
            traffic_light_penalty: flags.traffic_light_penalty,
            ignore_oneway: flags.ignore_oneway,
            ignore_maxspeed: flags.ignore_maxspeed,
            speed_profile,
            access_list,
        })
    }
}
