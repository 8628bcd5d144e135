//! Site configuration management for `doclight.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site] (info, logo, social)
//! │   ├── sidebar    # [[sidebar]] navigation tree + expansion
//! │   ├── theme      # [theme]
//! │   ├── integrations # [integrations]
//! │   └── deploy     # [deploy]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                        |
//! |------------------|------------------------------------------------|
//! | `[site.info]`    | Site metadata (title, canonical URL, language) |
//! | `[site.logo]`    | Light/dark logo pair                           |
//! | `[[site.social]]`| Social links, display order                    |
//! | `[[sidebar]]`    | Navigation tree, display order                 |
//! | `[theme]`        | Theme id and global style sheets               |
//! | `[integrations]` | Component framework and CSS plugin ids         |
//! | `[deploy]`       | Deployment adapter selection                   |
//!
//! The document has exactly one lifecycle state: loaded. It is parsed and
//! validated once, then read-only; `reload_config` replaces the whole
//! document atomically for the framework's watch mode.

pub mod section;
pub mod types;
pub mod util;

use util::{extract_url_path, find_config_file, normalize_path};

// Re-export from section/
pub use section::{
    AutogenerateSource, DeployConfig, DirectoryResolver, IntegrationsConfig, LogoConfig, NavNode,
    NavPage, SidebarEntry, SiteInfoConfig, SiteSectionConfig, SocialLink, ThemeSectionConfig,
};
pub use section::sidebar::expand;

// Re-export from types/
pub use types::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config,
};

use crate::log;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config filename, searched upward from the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "doclight.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing doclight.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata, logo, social links
    pub site: SiteSectionConfig,

    /// Navigation tree, display order
    pub sidebar: Vec<SidebarEntry>,

    /// Theme selection and global style sheets
    pub theme: ThemeSectionConfig,

    /// Integration activations (component framework, CSS plugin)
    pub integrations: IntegrationsConfig,

    /// Deployment adapter selection
    pub deploy: DeployConfig,
}

impl SiteConfig {
    /// Load configuration by name, searching upward from cwd.
    ///
    /// The project root is the config file's parent directory.
    pub fn load(config_name: &Path) -> Result<Self> {
        let path = find_config_file(config_name).with_context(|| {
            format!(
                "config file '{}' not found in this or any parent directory",
                config_name.display()
            )
        })?;
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file path.
    ///
    /// Reads, parses with unknown-field detection, finalizes paths, and
    /// validates the whole document. All-or-nothing: any validation error
    /// fails the load.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.finalize(path);
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the config is always at the site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Record config path and project root after parsing.
    fn finalize(&mut self, path: &Path) {
        self.config_path = normalize_path(path);
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
    }

    // ========================================================================
    // accessors
    // ========================================================================

    /// Get the project root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the project root directory.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    /// Get path relative to the project root
    pub fn root_relative(&self, path: impl AsRef<Path>) -> PathBuf {
        path.as_ref()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.as_ref().to_path_buf())
    }

    /// Base URL path of the site, derived from the canonical URL.
    ///
    /// `https://example.github.io/docs` → `docs`. Empty for root deployments.
    /// This is what the framework prefixes generated links with for
    /// subdirectory deployments.
    pub fn base_path(&self) -> String {
        self.site
            .info
            .url
            .as_deref()
            .and_then(extract_url_path)
            .unwrap_or_default()
    }

    /// Global style sheets resolved against the project root, cascade order.
    pub fn style_paths(&self) -> Vec<PathBuf> {
        self.theme
            .styles
            .iter()
            .map(|style| self.root_join(style))
            .collect()
    }

    /// Logo pair resolved against the project root (light, dark).
    pub fn logo_paths(&self) -> Option<(PathBuf, PathBuf)> {
        match (&self.site.logo.light, &self.site.logo.dark) {
            (Some(light), Some(dark)) => Some((self.root_join(light), self.root_join(dark))),
            _ => None,
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole document.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        section::sidebar::validate(&self.sidebar, &mut diag);
        self.theme.validate(&mut diag);
        self.integrations.validate(&mut diag);
        self.deploy.validate(&mut diag);

        // Advisory warnings never fail the load
        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// starter template
// ============================================================================

/// Generate a commented starter `doclight.toml`.
///
/// Sections with fixed shapes come from the `Config` derive templates;
/// array-of-tables sections (social links, sidebar) are spelled out here.
pub fn starter_template() -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "# Doclight configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    out.push_str(&SiteInfoConfig::template_with_header());
    out.push('\n');

    out.push_str(&LogoConfig::template_with_header());
    out.push('\n');

    out.push_str("# Social links, display order\n");
    out.push_str("# [[site.social]]\n");
    out.push_str("# icon = \"github\"\n");
    out.push_str("# label = \"GitHub\"\n");
    out.push_str("# href = \"https://github.com/example\"\n\n");

    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push('\n');

    out.push_str(&IntegrationsConfig::template_with_header());
    out.push('\n');

    out.push_str(&DeployConfig::template_with_header());
    out.push('\n');

    out.push_str("# Navigation tree, top to bottom\n");
    out.push_str("[[sidebar]]\n");
    out.push_str("label = \"Getting Started\"\n");
    out.push_str("items = [\n");
    out.push_str("    { label = \"Introduction\", slug = \"introduction\" },\n");
    out.push_str("]\n\n");
    out.push_str("[[sidebar]]\n");
    out.push_str("label = \"Guides\"\n");
    out.push_str("autogenerate = { directory = \"guides\" }\n");

    out
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!(
        "[site.info]\ntitle = \"Test Docs\"\nurl = \"https://example.com\"\n{extra}"
    );
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_DOC: &str = r#"[site.info]
title = "Example Docs"
url = "https://docs.example.com"

[site.logo]
light = "assets/logo-light.svg"
dark = "assets/logo-dark.svg"
replaces_title = false

[[site.social]]
icon = "github"
label = "GitHub"
href = "https://github.com/example"

[[sidebar]]
label = "Getting Started"
items = [
    { label = "Introduction", slug = "introduction" },
    { label = "Quick Start", slug = "quickstart" },
]

[[sidebar]]
label = "Guides"
autogenerate = { directory = "guides" }

[[sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }

[theme]
styles = ["src/styles/global.css"]

[integrations]
components = "vue"
css = "tailwind"

[deploy]
adapter = "cloudflare"
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[site\ntitle = \"Docs\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();

        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.site.info.title, "");
        assert!(config.sidebar.is_empty());
        assert_eq!(config.theme.name, "docs");
        assert_eq!(config.deploy.adapter, "static");
    }

    #[test]
    fn test_full_document_loads_and_validates() {
        let config = SiteConfig::from_str(FULL_DOC).unwrap();
        config.validate().unwrap();

        assert_eq!(config.site.info.title, "Example Docs");
        assert_eq!(config.sidebar.len(), 3);
        assert_eq!(config.site.social.len(), 1);
        assert_eq!(config.integrations.components.as_deref(), Some("vue"));
        assert_eq!(config.deploy.adapter, "cloudflare");
    }

    #[test]
    fn test_round_trip_is_identical() {
        let config = SiteConfig::from_str(FULL_DOC).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        let reparsed = SiteConfig::from_str(&serialized).unwrap();
        assert_eq!(config, reparsed);
    }

    #[test]
    fn test_duplicate_sibling_slug_fails_load() {
        let doc = r#"[site.info]
title = "Docs"
url = "https://example.com"

[[sidebar]]
label = "Getting Started"
items = [
    { label = "Introduction", slug = "introduction" },
    { label = "Intro Again", slug = "introduction" },
]
"#;
        let config = SiteConfig::from_str(doc).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("introduction"));
    }

    #[test]
    fn test_malformed_social_href_fails_load() {
        let doc = r#"[site.info]
title = "Docs"
url = "https://example.com"

[[site.social]]
icon = "github"
label = "GitHub"
href = "not-a-url"
"#;
        let config = SiteConfig::from_str(doc).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.social.href"));
    }

    #[test]
    fn test_all_errors_reported_at_once() {
        let doc = r#"[site.info]
title = ""
url = "not-a-url"

[deploy]
adapter = ""
"#;
        let config = SiteConfig::from_str(doc).unwrap();
        let err = config.validate().unwrap_err();
        let diag = err.downcast::<ConfigError>().unwrap();
        let ConfigError::Diagnostics(diag) = diag else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_load_from_file_sets_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(FULL_DOC.as_bytes()).unwrap();

        let config = SiteConfig::load_from(&path).unwrap();
        assert_eq!(config.get_root(), dir.path().canonicalize().unwrap());
        assert_eq!(
            config.style_paths(),
            vec![config.get_root().join("src/styles/global.css")]
        );
        let (light, dark) = config.logo_paths().unwrap();
        assert!(light.ends_with("assets/logo-light.svg"));
        assert!(dark.ends_with("assets/logo-dark.svg"));
    }

    #[test]
    fn test_load_from_rejects_invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(&path, "[site.info]\ntitle = \"Docs\"\nurl = \"not-a-url\"").unwrap();
        assert!(SiteConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ntitle = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.site.info.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(FULL_DOC).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_base_path() {
        let mut config = test_parse_config("");
        assert_eq!(config.base_path(), "");

        config.site.info.url = Some("https://example.github.io/docs".to_string());
        assert_eq!(config.base_path(), "docs");
    }

    #[test]
    fn test_starter_template_is_loadable() {
        let (config, ignored) = SiteConfig::parse_with_ignored(&starter_template()).unwrap();
        assert!(ignored.is_empty(), "template has unknown fields: {ignored:?}");
        // Template defaults are a valid document except for the empty
        // title/url placeholders the user must fill in.
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("site.info"));
    }
}
