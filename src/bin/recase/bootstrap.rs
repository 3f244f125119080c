use chrono::prelude::*;
use std::io::prelude::*;
use std::path::PathBuf;
use std::{env, fs::File};

pub use recase::{
    config::{from_toml, parse as config_parse, MainConfig, DEFAULT_CONF_FILE, DEFAULT_SITE_FILE},
    error::*,
};

use crate::directories::PROJECT_DIRS;

static DEFAULT_CONF: &str = "# File automatically generated on ${date}\n\
                            [defaults]\n\
                            site  = \"${site_file}\"\n\
                            style = \"Sentence case\"\n\
                            event = \"before_save\"\n";

#[derive(Debug)]
pub struct BootStrap {
    config: MainConfig,
}

impl BootStrap {
    pub fn new() -> Result<Self> {
        Ok(BootStrap {
            config: parse_main_config()?,
        })
    }

    /// Retrieves the site file using the following order :
    ///
    /// - The path given in the command line
    /// - The path specified by the environment variable RECASE_SITE
    /// - The path specified in the main configuration file
    /// - The default site file inside the configuration directory
    ///
    /// # Returns
    /// The path to the site file
    ///
    /// # Errors
    /// Returns an error if the path cannot be interpolated
    pub fn site_file(&self, cli_site: Option<&String>) -> Result<PathBuf> {
        let site_path = cli_site
            .cloned()
            .or_else(|| env::var_os("RECASE_SITE").map(|p| p.to_string_lossy().to_string()))
            .or_else(|| self.config.defaults.site.clone());

        let site_path = match site_path {
            Some(path) => path,
            None => PROJECT_DIRS
                .config_dir()
                .join(DEFAULT_SITE_FILE)
                .to_string_lossy()
                .to_string(),
        };

        let site_file = match shellexpand::full(&site_path) {
            Ok(path) => path.to_string(),
            Err(e) => {
                return Err(Error::InterpolationError {
                    location: ConfigType::SITE,
                    cause: e.to_string(),
                });
            }
        };

        Ok(PathBuf::from(site_file))
    }

    pub fn get_config(&self) -> &MainConfig {
        &self.config
    }
}

/// Creates the default main configuration file in the config directory
/// # Arguments
/// * `config_file` - The path to the configuration file
///
/// # Returns
/// A `Result` containing the configuration data as a `String`
///
/// # Errors
/// * `ConfigError` - If the configuration file cannot be created
/// * `IoError` - If an I/O error occurs while creating the configuration file
fn create_default_config(config_file: &PathBuf) -> Result<String> {
    let parent_dir = config_file
        .parent()
        .ok_or_else(|| Error::ConfigError(config_file.to_string_lossy().into_owned()))?;
    std::fs::create_dir_all(parent_dir)?;
    let site_file = parent_dir
        .join(DEFAULT_SITE_FILE)
        .to_string_lossy()
        .into_owned();
    let current_date: DateTime<Local> = Local::now();
    let config_data = DEFAULT_CONF
        .replacen("${site_file}", &site_file, 1)
        .replacen("${date}", &current_date.to_string(), 1);

    File::create(config_file)?.write_all(config_data.as_bytes())?;
    Ok(config_data)
}

/// Processes the main configuration file retrieving the associated `MainConfig` structure
///
/// This function reads the configuration file and returns a `MainConfig` structure.
/// If the file does not exist, it creates a default configuration file.
///
/// # Errors
///
/// This function returns an error if the configuration file cannot be read or parsed.
pub fn parse_main_config() -> Result<MainConfig> {
    let conf_file = &PROJECT_DIRS.config_dir().clone().join(DEFAULT_CONF_FILE);
    let toml_data = match config_parse(conf_file) {
        Ok(data) => data,
        Err(Error::Io(e)) if e.kind() == ::std::io::ErrorKind::NotFound => {
            create_default_config(conf_file)?
        }
        Err(Error::Io(e)) => {
            return Err(Error::ConfigReadError {
                file: String::from(DEFAULT_CONF_FILE),
                cause: e.to_string(),
            });
        }
        Err(e) => return Err(e),
    };

    from_toml(&toml_data)
}
