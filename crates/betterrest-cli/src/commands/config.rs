use std::path::PathBuf;

use clap::Subcommand;

use betterrest_core::error::Result;
use betterrest_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "display.clock", "defaults.sleep_amount")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value ("none" clears model.path)
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction, config_path: Option<PathBuf>) -> Result<()> {
    let path = config_path.as_deref();
    match action {
        ConfigAction::Get { key } => {
            let config = super::load_config(path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = super::load_config(path)?;
            config.set(&key, &value)?;
            super::save_config(&config, path)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = super::load_config(path)?;
            let json = serde_json::to_string_pretty(&config)?;
            println!("{json}");
        }
        ConfigAction::Reset => {
            super::save_config(&Config::default(), path)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
