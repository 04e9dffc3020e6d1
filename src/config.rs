//! Configuration loading
//!
//! The config file lives at `~/.config/typeahead/config.toml`. A broken file
//! at the default location is reported as a warning and defaults are used;
//! a path given explicitly on the command line must load.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{
    ComboboxConfig, Config, DEFAULT_MAX_VISIBLE, DEFAULT_PLACEHOLDER, ItemsConfig,
};

use crate::error::TypeaheadError;

const CONFIG_DIR: &str = "typeahead";
const CONFIG_FILE: &str = "config.toml";

/// Loaded configuration plus a warning to show the user, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config file from the default location
pub fn load_config() -> ConfigResult {
    let Some(path) = config_path() else {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    };

    load_config_from_path(&path)
}

/// Load from `path`, falling back to defaults on any problem
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    match fs::read_to_string(path) {
        Ok(content) => match parse_config(path, &content) {
            Ok(config) => ConfigResult {
                config,
                warning: None,
            },
            Err(e) => {
                log::warn!("{}", e);
                ConfigResult {
                    config: Config::default(),
                    warning: Some(format!("Config error, using defaults: {}", path.display())),
                }
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => ConfigResult {
            config: Config::default(),
            warning: None,
        },
        Err(e) => {
            log::warn!("Could not read {}: {}", path.display(), e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Could not read config: {}", path.display())),
            }
        }
    }
}

/// Load from a path the user asked for explicitly; every failure is an error
pub fn load_required_config(path: &Path) -> Result<Config, TypeaheadError> {
    let content = fs::read_to_string(path)?;
    parse_config(path, &content)
}

pub fn parse_config(path: &Path, content: &str) -> Result<Config, TypeaheadError> {
    toml::from_str(content).map_err(|e| TypeaheadError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}
