//! `[site]` section configuration.
//!
//! Contains site metadata, the logo pair, and social links.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "Example Docs"
//! url = "https://docs.example.com"
//!
//! [site.logo]
//! light = "assets/logo-light.svg"
//! dark = "assets/logo-dark.svg"
//! replaces_title = false
//!
//! [[site.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/example"
//! ```

mod info;
mod logo;
mod social;

pub use info::SiteInfoConfig;
pub use logo::LogoConfig;
pub use social::SocialLink;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Site section configuration containing metadata, logo, and social links.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site metadata (title, canonical URL, language).
    #[config(sub)]
    pub info: SiteInfoConfig,

    /// Light/dark logo pair.
    #[config(sub)]
    pub logo: LogoConfig,

    /// Social links, in display order.
    #[config(skip)]
    pub social: Vec<SocialLink>,
}

impl SiteSectionConfig {
    /// Validate the whole `[site]` section.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        self.info.validate(diag);
        self.logo.validate(diag);
        for link in &self.social {
            link.validate(diag);
        }
    }
}
