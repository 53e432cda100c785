use serde::{Deserialize, Serialize};

/// speed assumptions for a single road classification, such as an OSM highway tag
/// value like "motorway" or "residential".
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SpeedProfileRow {
    pub name: String,
    /// free-flow speed
    pub speed: u32,
    /// speed used when the way lies within a city or urban area
    pub speed_in_city: u32,
    /// assumed average fraction (0-100) of the posted speed actually driven
    pub average_percentage: u32,
}

impl SpeedProfileRow {
    pub fn new(name: &str, speed: u32, speed_in_city: u32, average_percentage: u32) -> Self {
        Self {
            name: String::from(name),
            speed,
            speed_in_city,
            average_percentage,
        }
    }

    /// the textual cells of this row in file column order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.name.clone(),
            self.speed.to_string(),
            self.speed_in_city.to_string(),
            self.average_percentage.to_string(),
        ]
    }
}
