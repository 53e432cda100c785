use super::SettingsSession;
use crate::{
    config::ImportSettingsConfig,
    model::{speed_profile::SpeedProfile, SettingsError},
};
use clap::{Parser, Subcommand};
use std::path::Path;

/// command line tool for checking speed profiles and producing OSM import settings
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct SettingsAppArguments {
    #[command(subcommand)]
    pub app: SettingsApp,
}

#[derive(Subcommand)]
pub enum SettingsApp {
    /// parse a speed profile file, failing on invalid numbers
    Check {
        #[arg(long, help = "path to .spp speed profile file")]
        profile_file: String,
    },
    /// write the built-in default speed profile
    DefaultProfile {
        #[arg(long, help = "output path for the .spp file")]
        output_file: String,
    },
    /// build import settings from stored preferences and print them as JSON
    Extract {
        #[arg(long, help = "path to .toml or .json file with importer preferences")]
        configuration_file: Option<String>,
        #[arg(long, help = "path to OSM file for import, overrides the preferences")]
        input: Option<String>,
        #[arg(long, help = "path to .spp speed profile file, overrides the preferences")]
        profile_file: Option<String>,
        #[arg(long, help = "access type such as motorcar or bicycle, overrides the preferences")]
        access_type: Option<String>,
        #[arg(long, help = "write settings JSON here instead of stdout")]
        output_file: Option<String>,
    },
}

impl SettingsApp {
    pub fn run(&self) -> Result<(), SettingsError> {
        match self {
            SettingsApp::Check { profile_file } => {
                let profile = SpeedProfile::read_file(Path::new(profile_file))?;
                log::info!("{profile_file} contains {} valid rows", profile.len());
                Ok(())
            }
            SettingsApp::DefaultProfile { output_file } => {
                let path = Path::new(output_file);
                std::fs::write(path, SpeedProfile::default_profile_text()).map_err(|source| {
                    SettingsError::IoError {
                        path: path.to_path_buf(),
                        source,
                    }
                })?;
                log::info!("wrote default speed profile to {output_file}");
                Ok(())
            }
            SettingsApp::Extract {
                configuration_file,
                input,
                profile_file,
                access_type,
                output_file,
            } => {
                let mut conf = match configuration_file {
                    None => Ok(ImportSettingsConfig::default()),
                    Some(f) => {
                        log::info!("reading importer preferences from {f}");
                        ImportSettingsConfig::try_from(f)
                    }
                }?;
                if let Some(i) = input {
                    conf.input_file = i.clone();
                }
                if let Some(a) = access_type {
                    conf.access_type = a.clone();
                }
                let mut session = SettingsSession::new(conf);
                if let Some(p) = profile_file {
                    session.load_profile(Path::new(p))?;
                }
                let settings = session.extract_settings()?;
                let json = serde_json::to_string_pretty(&settings)?;
                match output_file {
                    None => println!("{json}"),
                    Some(f) => {
                        std::fs::write(f, json).map_err(|source| SettingsError::IoError {
                            path: Path::new(f).to_path_buf(),
                            source,
                        })?;
                        log::info!("wrote import settings to {f}");
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsApp;
    use crate::model::{speed_profile::SpeedProfile, ImportSettings, SettingsError};

    #[test]
    fn test_default_profile_then_extract() {
        let dir = tempfile::tempdir().expect("temp dir");
        let profile_file = dir.path().join("default.spp").to_string_lossy().to_string();
        let output_file = dir.path().join("settings.json").to_string_lossy().to_string();

        SettingsApp::DefaultProfile {
            output_file: profile_file.clone(),
        }
        .run()
        .expect("should write profile");

        SettingsApp::Extract {
            configuration_file: None,
            input: Some(String::from("region.osm")),
            profile_file: Some(profile_file),
            access_type: Some(String::from("bus")),
            output_file: Some(output_file.clone()),
        }
        .run()
        .expect("should extract");

        let json = std::fs::read_to_string(&output_file).expect("read settings");
        let settings: ImportSettings = serde_json::from_str(&json).expect("decode settings");
        assert_eq!(settings.input, "region.osm");
        assert_eq!(
            settings.access_list,
            vec!["bus", "psv", "motor_vehicle", "vehicle"]
        );
        let expected =
            SpeedProfile::parse(SpeedProfile::default_profile_text()).expect("default profile");
        assert_eq!(settings.speed_profile, expected);
    }

    #[test]
    fn test_check_invalid_profile() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bad.spp");
        std::fs::write(&path, "motorway\tfast\t80\t90\n").expect("write profile");
        let result = SettingsApp::Check {
            profile_file: path.to_string_lossy().to_string(),
        }
        .run();
        assert!(matches!(result, Err(SettingsError::InvalidNumber { .. })));
    }
}
