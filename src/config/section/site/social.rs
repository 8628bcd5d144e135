//! `[[site.social]]` configuration.
//!
//! Social links rendered in the site header, in declared order. Order is
//! display order; entries are never reordered or deduplicated.
//!
//! # Example
//!
//! ```toml
//! [[site.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/example"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::util::check_url;

/// A single social link entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.social")]
pub struct SocialLink {
    /// Icon identifier understood by the theme (e.g., "github", "discord").
    pub icon: String,

    /// Accessible label for the link.
    pub label: String,

    /// Link target, a well-formed absolute URL.
    pub href: String,
}

impl SocialLink {
    /// Validate one social link.
    ///
    /// # Checks
    /// - `icon` and `label` must not be empty
    /// - `href` must be a valid absolute http(s) URL
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        let subject = if self.label.is_empty() {
            "social link".to_string()
        } else {
            format!("social link `{}`", self.label)
        };

        if self.icon.trim().is_empty() {
            diag.error(Self::FIELDS.icon, format!("{subject}: icon must not be empty"));
        }
        if self.label.trim().is_empty() {
            diag.error(Self::FIELDS.label, "social link label must not be empty");
        }
        check_url(&self.href, Self::FIELDS.href, &subject, diag);
    }
}
