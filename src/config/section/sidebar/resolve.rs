//! Sidebar expansion against an external directory resolver.
//!
//! Autogenerated groups only name a directory in the config; the framework
//! owns the content tree and knows which pages live there. [`expand`] turns
//! the declared sidebar into a fully resolved [`NavNode`] tree by calling the
//! resolver for each autogenerated group, re-checking slug uniqueness on the
//! resolver output.

use std::path::Path;

use anyhow::Result;
use rustc_hash::FxHashSet;

use super::SidebarEntry;
use crate::config::{ConfigDiagnostics, ConfigError, FieldPath};

const SIDEBAR: FieldPath = FieldPath::new("sidebar");

/// Resolves a content directory to its navigation pages, in display order.
///
/// Implemented by the framework (directory scanning, frontmatter titles,
/// ordering rules all live there). Test code supplies fakes.
pub trait DirectoryResolver {
    fn resolve(&self, directory: &Path) -> Result<Vec<NavPage>>;
}

/// A page produced by a [`DirectoryResolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct NavPage {
    pub label: String,
    pub slug: String,
}

/// A fully resolved navigation node: no autogenerated groups remain.
#[derive(Debug, Clone, PartialEq)]
pub enum NavNode {
    Page { label: String, slug: String },
    Group { label: String, items: Vec<NavNode> },
}

impl NavNode {
    pub fn label(&self) -> &str {
        match self {
            Self::Page { label, .. } | Self::Group { label, .. } => label,
        }
    }
}

/// Expand the declared sidebar into a resolved tree.
///
/// Declared order is preserved; an autogenerated group becomes a regular
/// group whose children are the resolver's pages in resolver order. Fails if
/// the resolver reports an error or produces duplicate sibling slugs.
pub fn expand(entries: &[SidebarEntry], resolver: &dyn DirectoryResolver) -> Result<Vec<NavNode>> {
    let mut diag = ConfigDiagnostics::new();
    let nodes = expand_siblings(entries, resolver, &mut diag)?;
    diag.into_result().map_err(ConfigError::Diagnostics)?;
    Ok(nodes)
}

fn expand_siblings(
    entries: &[SidebarEntry],
    resolver: &dyn DirectoryResolver,
    diag: &mut ConfigDiagnostics,
) -> Result<Vec<NavNode>> {
    let mut nodes = Vec::with_capacity(entries.len());

    for entry in entries {
        match entry {
            SidebarEntry::Page { label, slug } => nodes.push(NavNode::Page {
                label: label.clone(),
                slug: slug.clone(),
            }),
            SidebarEntry::Group { label, items } => nodes.push(NavNode::Group {
                label: label.clone(),
                items: expand_siblings(items, resolver, diag)?,
            }),
            SidebarEntry::Autogenerate { label, autogenerate } => {
                let pages = resolver.resolve(&autogenerate.directory)?;
                check_resolved_slugs(label, &pages, diag);
                nodes.push(NavNode::Group {
                    label: label.clone(),
                    items: pages
                        .into_iter()
                        .map(|page| NavNode::Page {
                            label: page.label,
                            slug: page.slug,
                        })
                        .collect(),
                });
            }
        }
    }

    Ok(nodes)
}

/// Resolver output gets the same sibling-uniqueness rule as declared pages.
fn check_resolved_slugs(group: &str, pages: &[NavPage], diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for page in pages {
        if !seen.insert(page.slug.as_str()) {
            diag.error(
                SIDEBAR,
                format!(
                    "resolver produced duplicate slug `{}` in autogenerated group `{group}`",
                    page.slug
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::AutogenerateSource;
    use super::*;
    use crate::config::test_parse_config;
    use anyhow::bail;
    use std::path::PathBuf;

    /// Fake resolver mapping fixed directories to fixed page lists.
    struct FakeResolver;

    impl DirectoryResolver for FakeResolver {
        fn resolve(&self, directory: &Path) -> Result<Vec<NavPage>> {
            match directory.to_str() {
                Some("guides") => Ok(vec![
                    NavPage {
                        label: "Deploying".into(),
                        slug: "guides/deploying".into(),
                    },
                    NavPage {
                        label: "Theming".into(),
                        slug: "guides/theming".into(),
                    },
                ]),
                Some("reference") => Ok(vec![NavPage {
                    label: "Configuration".into(),
                    slug: "reference/configuration".into(),
                }]),
                _ => bail!("unknown content directory: {}", directory.display()),
            }
        }
    }

    /// Resolver returning colliding slugs.
    struct CollidingResolver;

    impl DirectoryResolver for CollidingResolver {
        fn resolve(&self, _directory: &Path) -> Result<Vec<NavPage>> {
            let page = NavPage {
                label: "Twice".into(),
                slug: "twice".into(),
            };
            Ok(vec![page.clone(), page])
        }
    }

    fn scenario_sidebar() -> Vec<SidebarEntry> {
        test_parse_config(
            r#"[[sidebar]]
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
"#,
        )
        .sidebar
    }

    #[test]
    fn test_expand_three_group_scenario() {
        let nodes = expand(&scenario_sidebar(), &FakeResolver).unwrap();

        // Exactly three top-level groups, declared order.
        assert_eq!(nodes.len(), 3);
        let labels: Vec<_> = nodes.iter().map(NavNode::label).collect();
        assert_eq!(labels, ["Getting Started", "Guides", "Reference"]);

        // First group keeps its two leaves, order and slugs unchanged.
        let NavNode::Group { items, .. } = &nodes[0] else {
            unreachable!()
        };
        assert_eq!(
            items,
            &[
                NavNode::Page {
                    label: "Introduction".into(),
                    slug: "introduction".into()
                },
                NavNode::Page {
                    label: "Quick Start".into(),
                    slug: "quickstart".into()
                },
            ]
        );

        // Autogenerated groups carry the resolver's pages in resolver order.
        let NavNode::Group { items, .. } = &nodes[1] else {
            unreachable!()
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label(), "Deploying");
    }

    #[test]
    fn test_expand_fails_on_resolver_error() {
        let sidebar = vec![SidebarEntry::Autogenerate {
            label: "Nowhere".into(),
            autogenerate: AutogenerateSource {
                directory: PathBuf::from("missing"),
            },
        }];
        assert!(expand(&sidebar, &FakeResolver).is_err());
    }

    #[test]
    fn test_expand_rejects_duplicate_resolved_slugs() {
        let sidebar = vec![SidebarEntry::Autogenerate {
            label: "Guides".into(),
            autogenerate: AutogenerateSource {
                directory: PathBuf::from("guides"),
            },
        }];
        let err = expand(&sidebar, &CollidingResolver).unwrap_err();
        assert!(err.to_string().contains("twice"));
    }
}
