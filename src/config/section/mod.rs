//! Configuration section definitions.
//!
//! Each module corresponds to a section in `doclight.toml`:
//!
//! | Module         | TOML Section     | Purpose                              |
//! |----------------|------------------|--------------------------------------|
//! | `site`         | `[site]`         | Site info, logo, social links        |
//! | `sidebar`      | `[[sidebar]]`    | Navigation tree                      |
//! | `theme`        | `[theme]`        | Theme selection and style sheets     |
//! | `integrations` | `[integrations]` | Component framework, CSS plugin      |
//! | `deploy`       | `[deploy]`       | Deployment adapter selection         |

mod deploy;
mod integrations;
pub mod sidebar;
pub mod site;
mod theme;

// Re-export section configs
pub use deploy::DeployConfig;
pub use integrations::IntegrationsConfig;
pub use sidebar::{
    AutogenerateSource, DirectoryResolver, NavNode, NavPage, SidebarEntry,
};
pub use site::{LogoConfig, SiteInfoConfig, SiteSectionConfig, SocialLink};
pub use theme::ThemeSectionConfig;
