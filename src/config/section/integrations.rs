//! `[integrations]` section configuration.
//!
//! Integration activations: opaque identifiers handed to the framework,
//! which maps them to build-time plugins. The theme integration has its own
//! `[theme]` section since it carries options of its own.
//!
//! # Example
//!
//! ```toml
//! [integrations]
//! components = "vue"      # UI component framework
//! css = "tailwind"        # CSS transform plugin
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::util::check_identifier;

/// Integration activations beyond the theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "integrations")]
pub struct IntegrationsConfig {
    /// UI component framework integration id.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<String>,

    /// CSS transform plugin id.
    #[config(inline_doc)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
}

impl IntegrationsConfig {
    /// Validate integration identifiers.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        if let Some(components) = &self.components {
            check_identifier(components, Self::FIELDS.components, diag);
        }
        if let Some(css) = &self.css {
            check_identifier(css, Self::FIELDS.css, diag);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{ConfigDiagnostics, test_parse_config};

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.integrations.components.is_none());
        assert!(config.integrations.css.is_none());
    }

    #[test]
    fn test_activations() {
        let config = test_parse_config("[integrations]\ncomponents = \"vue\"\ncss = \"tailwind\"");
        assert_eq!(config.integrations.components.as_deref(), Some("vue"));
        assert_eq!(config.integrations.css.as_deref(), Some("tailwind"));
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let config = test_parse_config("[integrations]\ncomponents = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.integrations.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
