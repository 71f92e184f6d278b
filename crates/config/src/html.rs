//! HTML output configuration.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default base URL of wiki pages.
pub const DEFAULT_PAGE_BASE_URL: &str = "https://wikiwiki.jp/sf-jp/";

/// Default base URL of wiki images.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://cdn.wikiwiki.jp/to/w/sf-jp/Ref_img/::ref/";

/// Base URLs that HTML links and images are resolved against.
///
/// # Examples
///
/// ```
/// use craftwiki_config::HtmlConfig;
///
/// let config = HtmlConfig::default();
/// assert!(config.page_base_url.ends_with('/'));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlConfig {
    /// Prefix of link targets.
    #[serde(default = "default_page_base_url")]
    pub page_base_url: String,

    /// Prefix of image sources.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
}

fn default_page_base_url() -> String {
    DEFAULT_PAGE_BASE_URL.to_string()
}

fn default_image_base_url() -> String {
    DEFAULT_IMAGE_BASE_URL.to_string()
}

impl Default for HtmlConfig {
    fn default() -> Self {
        Self {
            page_base_url: default_page_base_url(),
            image_base_url: default_image_base_url(),
        }
    }
}

impl HtmlConfig {
    /// Validates both base URLs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a URL is empty or does not
    /// end with `/`.
    pub fn validate(&self) -> Result<()> {
        validate_base_url("html.page_base_url", &self.page_base_url)?;
        validate_base_url("html.image_base_url", &self.image_base_url)
    }
}

fn validate_base_url(key: &'static str, url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(ConfigError::InvalidValue {
            key,
            reason: "must not be empty".to_string(),
        });
    }
    if !url.ends_with('/') {
        return Err(ConfigError::InvalidValue {
            key,
            reason: format!("must end with '/', got {url:?}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slash_is_rejected() {
        let config = HtmlConfig {
            image_base_url: "https://example.org/img".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("html.image_base_url"));
    }

    #[test]
    fn empty_url_is_rejected() {
        let config = HtmlConfig {
            page_base_url: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                key: "html.page_base_url",
                ..
            })
        ));
    }

    #[test]
    fn deserialize_partial() {
        let config: HtmlConfig =
            serde_json::from_str(r#"{"page_base_url": "https://example.org/"}"#).unwrap();
        assert_eq!(config.page_base_url, "https://example.org/");
        assert_eq!(config.image_base_url, DEFAULT_IMAGE_BASE_URL);
    }
}
