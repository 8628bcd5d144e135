//! `[site.logo]` configuration.
//!
//! Light/dark logo asset pair rendered in the site header. Paths are
//! project-root-relative; whether the files actually exist is checked by the
//! framework's asset resolution, not here.
//!
//! # Example
//!
//! ```toml
//! [site.logo]
//! light = "assets/logo-light.svg"
//! dark = "assets/logo-dark.svg"
//! replaces_title = false
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::util::check_relative_path;

/// Logo asset pair for light and dark color schemes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site.logo")]
pub struct LogoConfig {
    /// Logo shown on light backgrounds (relative to project root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light: Option<PathBuf>,

    /// Logo shown on dark backgrounds (relative to project root).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<PathBuf>,

    /// Hide the text title and show only the logo.
    pub replaces_title: bool,
}

impl LogoConfig {
    /// Whether a logo pair was configured at all.
    pub fn is_configured(&self) -> bool {
        self.light.is_some() || self.dark.is_some()
    }

    /// Validate logo configuration.
    ///
    /// # Checks
    /// - Both variants must be set together (a dark-only logo would vanish
    ///   on light backgrounds and vice versa)
    /// - Paths must be relative to the project root
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        match (&self.light, &self.dark) {
            (Some(light), Some(dark)) => {
                check_relative_path(light, Self::FIELDS.light, diag);
                check_relative_path(dark, Self::FIELDS.dark, diag);
            }
            (Some(_), None) => diag.error_with_hint(
                Self::FIELDS.dark,
                "logo has a light variant but no dark variant",
                "set both site.logo.light and site.logo.dark",
            ),
            (None, Some(_)) => diag.error_with_hint(
                Self::FIELDS.light,
                "logo has a dark variant but no light variant",
                "set both site.logo.light and site.logo.dark",
            ),
            (None, None) => {
                if self.replaces_title {
                    diag.error(
                        Self::FIELDS.replaces_title,
                        "replaces_title is set but no logo is configured",
                    );
                }
            }
        }
    }
}
