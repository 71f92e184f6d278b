//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the craftwiki application.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::html::HtmlConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};
use crate::wiki::WikiConfig;

/// The main configuration struct for the craftwiki application.
///
/// # Examples
///
/// ```
/// use craftwiki_config::{Config, WikiConfig};
///
/// // Create a default config
/// let config = Config::default();
/// assert!(config.catalog.is_none());
///
/// // Create a custom config
/// let config = Config {
///     wiki: WikiConfig { image_size: 32, ..Default::default() },
///     catalog: Some("catalog.json".into()),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Wiki markup output.
    #[serde(default)]
    pub wiki: WikiConfig,

    /// HTML output.
    #[serde(default)]
    pub html: HtmlConfig,

    /// Catalog dump used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./craftwiki.json5` or `./craftwiki.json`
    /// 2. User: `~/.config/craftwiki/config.json5` or `~/.config/craftwiki/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use craftwiki_config::Config;
    ///
    /// # fn example() -> craftwiki_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Images from {}", config.wiki.image_dir);
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                debug!(path = %path.display(), "found config file");
                Self::load_from(path)
            }
            None => {
                debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any section holds an out-of-range value.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.html.page_base_url = "https://example.org".to_string();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.wiki.validate()?;
        self.html.validate()?;
        Ok(())
    }
}
