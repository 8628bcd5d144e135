//! `[theme]` section configuration.
//!
//! Selects the documentation theme integration and the global style sheets
//! layered on top of it.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! name = "docs"
//! styles = ["src/styles/global.css"]
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::util::{check_identifier, check_relative_path};

/// Theme section configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Documentation theme integration id.
    #[config(default = "docs", inline_doc)]
    pub name: String,

    /// Global style sheets, cascade order (later entries override earlier).
    pub styles: Vec<PathBuf>,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            name: "docs".to_string(),
            styles: Vec::new(),
        }
    }
}

impl ThemeSectionConfig {
    /// Validate theme configuration.
    ///
    /// # Checks
    /// - `name` is a plain integration identifier
    /// - style paths are relative to the project root
    /// - a style path listed twice is a warning only: order and multiplicity
    ///   are semantic (cascade), so the list is never deduplicated
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        check_identifier(&self.name, Self::FIELDS.name, diag);

        for style in &self.styles {
            check_relative_path(style, Self::FIELDS.styles, diag);
        }

        for (i, style) in self.styles.iter().enumerate() {
            if self.styles[..i].contains(style) {
                diag.warn(
                    Self::FIELDS.styles,
                    format!("style sheet '{}' is listed more than once", style.display()),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.theme.name, "docs");
        assert!(config.theme.styles.is_empty());
    }

    #[test]
    fn test_styles_order_preserved() {
        let config = test_parse_config(
            "[theme]\nstyles = [\"styles/base.css\", \"styles/overrides.css\", \"styles/base.css\"]",
        );
        // Cascade order as declared, duplicates kept.
        assert_eq!(
            config.theme.styles,
            vec![
                PathBuf::from("styles/base.css"),
                PathBuf::from("styles/overrides.css"),
                PathBuf::from("styles/base.css"),
            ]
        );

        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 1);
    }

    #[test]
    fn test_absolute_style_rejected() {
        let config = test_parse_config("[theme]\nstyles = [\"/etc/style.css\"]");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_bad_theme_name_rejected() {
        let config = test_parse_config("[theme]\nname = \"Not A Theme\"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
