//! Doclight - configuration layer for the doclight documentation site builder.
//!
//! This crate owns the `doclight.toml` schema: site metadata, logo and social
//! links, the sidebar navigation tree, theme and style sheets, integration
//! activations, and the deployment adapter selection. The document is loaded
//! once at startup, validated as a whole, and exposed read-only to the build
//! framework through [`config::cfg`].
//!
//! Rendering, routing, bundling and serving live in the framework, not here.
//! Autogenerated sidebar groups are resolved through the
//! [`config::DirectoryResolver`] collaborator so this crate never touches the
//! content tree itself.

pub mod config;
pub mod logger;
