mod settings_app;
mod settings_session;

pub use settings_app::{SettingsApp, SettingsAppArguments};
pub use settings_session::SettingsSession;
