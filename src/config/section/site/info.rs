//! `[site.info]` configuration.
//!
//! Basic site metadata: title, canonical URL, language. The canonical URL is
//! what the framework uses for canonical links, sitemap entries, and for
//! deriving the base path of subdirectory deployments.

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::util::check_url;

/// Site metadata shown in the rendered site header and `<head>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.info")]
pub struct SiteInfoConfig {
    /// Site title.
    #[config(inline_doc)]
    pub title: String,

    /// Canonical site URL (e.g., "https://example.com").
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Language code (e.g., "en", "zh-Hans").
    #[config(default = "en", inline_doc)]
    pub language: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            url: None,
            language: "en".into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `url` must be set and be a valid absolute http(s) URL
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELDS.title, "site title must not be empty");
        }

        match &self.url {
            Some(url) => check_url(url, Self::FIELDS.url, "", diag),
            None => diag.error_with_hint(
                Self::FIELDS.url,
                "canonical site URL is required",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELDS.url),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use crate::config::{ConfigDiagnostics, SiteConfig};

    #[test]
    fn test_info_parsing() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.title, "Test Docs");
        assert_eq!(config.site.info.url.as_deref(), Some("https://example.com"));
        assert_eq!(config.site.info.language, "en");
    }

    #[test]
    fn test_info_language_override() {
        let config: SiteConfig = toml::from_str(
            "[site.info]\ntitle = \"T\"\nurl = \"https://example.com\"\nlanguage = \"zh-Hans\"",
        )
        .unwrap();
        assert_eq!(config.site.info.language, "zh-Hans");
    }

    #[test]
    fn test_missing_url_rejected() {
        let config: SiteConfig = toml::from_str("[site.info]\ntitle = \"T\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_empty_title_rejected() {
        let config: SiteConfig =
            toml::from_str("[site.info]\ntitle = \"\"\nurl = \"https://example.com\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_malformed_url_rejected() {
        let config: SiteConfig =
            toml::from_str("[site.info]\ntitle = \"T\"\nurl = \"not-a-url\"").unwrap();
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("not-a-url"));
    }
}
