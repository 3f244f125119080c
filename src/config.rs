use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::error::*;
use crate::style::Style;

pub const DEFAULT_CONF_FILE: &str = "recase.toml";
pub const DEFAULT_SITE_FILE: &str = "site.json";

#[derive(Deserialize, Debug, Default)]
pub struct MainConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

#[derive(Deserialize, Debug, Serialize)]
#[serde(default)]
pub struct Defaults {
    /// Path of the site file, environment variables are expanded
    pub site: Option<String>,
    /// Style used by the preview when none is given and the site has none
    pub style: String,
    /// Document event used when applying the hook from the command line
    pub event: String,
}

impl Default for Defaults {
    fn default() -> Defaults {
        Defaults {
            site: None,
            style: Style::SentenceCase.label(),
            event: crate::constants::host::BEFORE_SAVE_EVENT.to_string(),
        }
    }
}

impl MainConfig {
    /// Returns the configured preview style, falling back to sentence case
    /// when the configured one is unknown
    pub fn default_style(&self) -> Style {
        Style::from_tag(&self.defaults.style).unwrap_or_default()
    }
}

pub fn parse(file_path: &PathBuf) -> Result<String> {
    let mut config_content = String::new();
    File::open(file_path)?.read_to_string(&mut config_content)?;
    Ok(config_content)
}

/// Parses the main configuration from its TOML contents
///
/// # Examples
/// ```
/// use recase::config::from_toml;
/// use recase::style::Style;
///
/// let config = from_toml("[defaults]\nstyle = \"camelCase\"\n").unwrap();
/// assert_eq!(config.default_style(), Style::CamelCase);
/// assert_eq!(config.defaults.site, None);
/// ```
pub fn from_toml(toml_data: &str) -> Result<MainConfig> {
    toml::from_str(toml_data).map_err(|e: toml::de::Error| Error::SerdeTomlError {
        location: ConfigType::MAIN,
        file: String::from(DEFAULT_CONF_FILE),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = from_toml("").unwrap();
        assert_eq!(config.defaults.style, "Sentence case");
        assert_eq!(config.defaults.event, "before_save");
        assert_eq!(config.default_style(), Style::SentenceCase);
    }

    #[test]
    fn test_full_config() {
        let config = from_toml(
            "[defaults]\nsite = \"$HOME/site.json\"\nstyle = \"tOGGLE cASE\"\nevent = \"validate\"\n",
        )
        .unwrap();
        assert_eq!(config.defaults.site.as_deref(), Some("$HOME/site.json"));
        assert_eq!(config.default_style(), Style::ToggleCase);
        assert_eq!(config.defaults.event, "validate");
    }

    #[test]
    fn test_unknown_style_falls_back() {
        let config = from_toml("[defaults]\nstyle = \"kebab\"\n").unwrap();
        assert_eq!(config.default_style(), Style::SentenceCase);
    }

    #[test]
    fn test_invalid_toml() {
        let err = from_toml("[defaults\nstyle = 1").unwrap_err();
        assert!(matches!(err, Error::SerdeTomlError { .. }));
    }

    #[test]
    fn test_parse_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[defaults]\nstyle = \"lowercase\"\n").unwrap();
        let content = parse(&file.path().to_path_buf()).unwrap();
        assert_eq!(from_toml(&content).unwrap().default_style(), Style::Lowercase);
    }
}
