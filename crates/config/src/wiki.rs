//! Wiki output configuration.
//!
//! This module provides the [`WikiConfig`] type which controls how image
//! directives are written and whether rows carry their kind code.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default directory of wiki images.
pub const DEFAULT_IMAGE_DIR: &str = "Ref_img";

/// Default icon size in pixels.
pub const DEFAULT_IMAGE_SIZE: u32 = 20;

/// Smallest accepted icon size.
pub const MIN_IMAGE_SIZE: u32 = 1;

/// Largest accepted icon size.
pub const MAX_IMAGE_SIZE: u32 = 512;

/// Configuration of wiki markup output.
///
/// # Examples
///
/// ```
/// use craftwiki_config::WikiConfig;
///
/// let config = WikiConfig::default();
/// assert_eq!(config.image_dir, "Ref_img");
/// assert_eq!(config.image_size, 20);
/// assert!(!config.row_kind_suffix);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Directory prefixed to image references.
    #[serde(default = "default_image_dir")]
    pub image_dir: String,

    /// Icon size used when an image does not carry its own.
    #[serde(default = "default_image_size")]
    pub image_size: u32,

    /// Whether each row is followed by its kind code (`c`, `h`, `f`).
    #[serde(default)]
    pub row_kind_suffix: bool,
}

fn default_image_dir() -> String {
    DEFAULT_IMAGE_DIR.to_string()
}

fn default_image_size() -> u32 {
    DEFAULT_IMAGE_SIZE
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            image_dir: default_image_dir(),
            image_size: DEFAULT_IMAGE_SIZE,
            row_kind_suffix: false,
        }
    }
}

impl WikiConfig {
    /// Validates the wiki configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the image size is outside
    /// `1..=512` or the image directory is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use craftwiki_config::WikiConfig;
    ///
    /// let config = WikiConfig { image_size: 0, ..Default::default() };
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if !(MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&self.image_size) {
            return Err(ConfigError::InvalidValue {
                key: "wiki.image_size",
                reason: format!(
                    "must be between {MIN_IMAGE_SIZE} and {MAX_IMAGE_SIZE}, got {}",
                    self.image_size
                ),
            });
        }
        if self.image_dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "wiki.image_dir",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(WikiConfig::default().validate().is_ok());
    }

    #[test]
    fn image_size_bounds() {
        for size in [MIN_IMAGE_SIZE, 64, MAX_IMAGE_SIZE] {
            let config = WikiConfig {
                image_size: size,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "{size}");
        }
        for size in [0, MAX_IMAGE_SIZE + 1] {
            let config = WikiConfig {
                image_size: size,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "{size}");
        }
    }

    #[test]
    fn empty_image_dir_is_rejected() {
        let config = WikiConfig {
            image_dir: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                key: "wiki.image_dir",
                ..
            })
        ));
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: WikiConfig = serde_json::from_str(r#"{"image_size": 32}"#).unwrap();
        assert_eq!(config.image_size, 32);
        assert_eq!(config.image_dir, DEFAULT_IMAGE_DIR);
        assert!(!config.row_kind_suffix);
    }
}
