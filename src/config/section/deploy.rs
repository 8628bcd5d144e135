//! `[deploy]` section configuration.
//!
//! Names the single deployment adapter the framework packages the build
//! output for. The id is opaque to this crate; the framework resolves it to
//! an adapter implementation (edge platform, node server, plain static
//! output, ...).
//!
//! # Example
//!
//! ```toml
//! [deploy]
//! adapter = "cloudflare"
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::util::check_identifier;

/// Deployment adapter selection. Singular by construction: the field is one
/// TOML string, not a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "deploy")]
pub struct DeployConfig {
    /// Target runtime adapter id (e.g., "cloudflare", "node", "static").
    #[config(default = "static", inline_doc)]
    pub adapter: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            adapter: "static".to_string(),
        }
    }
}

impl DeployConfig {
    /// Validate the adapter id is a plain identifier. Which ids exist is the
    /// framework's business, so no allow-list here.
    pub fn validate(&self, diag: &mut crate::config::ConfigDiagnostics) {
        check_identifier(&self.adapter, Self::FIELDS.adapter, diag);
    }
}
