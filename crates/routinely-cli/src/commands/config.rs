//! Configuration commands.

use clap::Subcommand;
use routinely_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (default_start_time, export.filename)
        key: String,
        /// New value
        value: String,
    },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("default_start_time = {}", config.default_start_time);
            println!("export.filename = {}", config.export.filename);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            match key.as_str() {
                "default_start_time" => config.set_default_start_time(&value)?,
                "export.filename" => config.export.filename = value,
                other => return Err(format!("unknown config key: {other}").into()),
            }
            config.save()?;
            println!("Config updated");
        }
    }

    Ok(())
}
