use clap::Parser;
use osm_importer_settings::app::SettingsAppArguments;

fn main() {
    env_logger::init();
    let args = SettingsAppArguments::parse();
    match args.app.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("osm-importer-settings failed: {e}");
            std::process::exit(1);
        }
    }
}
