//! `[[sidebar]]` section configuration.
//!
//! The navigation tree of the rendered site, top to bottom in declared order.
//! Three entry shapes exist, mirroring how they appear in `doclight.toml`:
//!
//! ```toml
//! [[sidebar]]
//! label = "Getting Started"
//! items = [
//!     { label = "Introduction", slug = "introduction" },
//!     { label = "Quick Start", slug = "quickstart" },
//! ]
//!
//! [[sidebar]]
//! label = "Guides"
//! autogenerate = { directory = "guides" }
//! ```
//!
//! Autogenerated groups name a content directory; their children are derived
//! by the framework at build time through [`DirectoryResolver`], never here.

mod resolve;

pub use resolve::{DirectoryResolver, NavNode, NavPage, expand};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field path for sidebar diagnostics (the tree is one TOML array, entries
/// are identified in messages by slug/label).
const SIDEBAR: FieldPath = FieldPath::new("sidebar");

// ============================================================================
// Sidebar entries
// ============================================================================

/// One entry of the sidebar tree.
///
/// Untagged: the TOML shape decides the variant. An entry with an
/// `autogenerate` key is an autogenerated group, one with `items` is an
/// explicit group, one with `slug` is a leaf page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarEntry {
    /// Group whose children come from a content directory at build time.
    Autogenerate {
        label: String,
        autogenerate: AutogenerateSource,
    },
    /// Group with explicitly listed children.
    Group {
        label: String,
        items: Vec<SidebarEntry>,
    },
    /// Leaf page mapping a label to a content slug.
    Page { label: String, slug: String },
}

impl SidebarEntry {
    /// Display label of this entry.
    pub fn label(&self) -> &str {
        match self {
            Self::Autogenerate { label, .. } | Self::Group { label, .. } | Self::Page { label, .. } => {
                label
            }
        }
    }
}

/// Source directory for an autogenerated group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutogenerateSource {
    /// Content directory scanned by the framework (relative to content root).
    pub directory: PathBuf,
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the sidebar tree.
///
/// # Checks
/// - labels are non-empty
/// - slugs are URL-path-safe and unique among siblings
/// - autogenerate directories are non-empty relative paths
///
/// Slug uniqueness is sibling-scoped: the same slug may appear under two
/// different groups (the framework routes per group prefix), but never twice
/// under the same parent.
pub fn validate(entries: &[SidebarEntry], diag: &mut ConfigDiagnostics) {
    validate_siblings(entries, "sidebar", diag);
}

fn validate_siblings(entries: &[SidebarEntry], context: &str, diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();

    for entry in entries {
        if entry.label().trim().is_empty() {
            diag.error(SIDEBAR, format!("entry under `{context}` has an empty label"));
        }

        match entry {
            SidebarEntry::Page { label, slug } => {
                if !is_valid_slug(slug) {
                    diag.error_with_hint(
                        SIDEBAR,
                        format!("page `{label}` has invalid slug '{slug}'"),
                        "slugs are '/'-separated segments of lowercase letters, digits, '-' or '_'",
                    );
                }
                if !seen.insert(slug.as_str()) {
                    diag.error(
                        SIDEBAR,
                        format!("duplicate slug `{slug}` among siblings under `{context}`"),
                    );
                }
            }
            SidebarEntry::Group { label, items } => {
                validate_siblings(items, label, diag);
            }
            SidebarEntry::Autogenerate { label, autogenerate } => {
                let dir = &autogenerate.directory;
                if dir.as_os_str().is_empty() {
                    diag.error(
                        SIDEBAR,
                        format!("autogenerated group `{label}` has an empty directory"),
                    );
                } else if dir.is_absolute() {
                    diag.error_with_hint(
                        SIDEBAR,
                        format!(
                            "autogenerated group `{label}` directory '{}' must be relative",
                            dir.display()
                        ),
                        "directories are resolved against the content root",
                    );
                }
            }
        }
    }
}

/// A slug is non-empty, `/`-separated, each segment made of lowercase ASCII
/// letters, digits, `-` or `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.split('/').all(|segment| {
            !segment.is_empty()
                && segment
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        })
}
