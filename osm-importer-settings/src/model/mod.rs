pub mod access;
mod import_settings;
mod settings_error;
pub mod speed_profile;

pub use import_settings::{ImportSettings, ScalarSettings};
pub use settings_error::SettingsError;
