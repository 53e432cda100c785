mod import_settings_config;

pub use import_settings_config::ImportSettingsConfig;
