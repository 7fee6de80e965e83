//! # Simple Docs
//!
//! A static documentation site generator. Your filesystem is the data source:
//! top-level directories become sidebar sections, nested directories become
//! collapsible groups, and markdown files become pages.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      docs-src/  →  Site         (filesystem → documents + navigation model)
//! 2. Generate  Site       →  dist/        (final HTML site)
//! ```
//!
//! Scanning builds the complete [`NavigationModel`](types::NavigationModel)
//! before any page is rendered. Every page then renders its own sidebar from
//! that one shared, read-only model, so the sidebar is identical on every page
//! apart from relative hrefs and the active marker.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: walks the source tree, resolves metadata, builds the navigation model |
//! | [`generate`] | Stage 2: renders every page in memory, then writes the site |
//! | [`config`] | `config.toml` loading, validation, and merging over stock defaults |
//! | [`content`] | Front matter parsing and markdown conversion behind swappable traits |
//! | [`metadata`] | Title, order, and link resolution from front matter and filenames |
//! | [`nav`] | Navigation model construction and subsection grouping |
//! | [`links`] | Relative href computation between output paths |
//! | [`sidebar`] | Per-page sidebar markup |
//! | [`page`] | Page shell and landing page |
//! | [`types`] | Documents, sections, and the navigation model |
//! | [`naming`] | Display titles from file and directory names |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Relative Links Everywhere
//!
//! Every href the generator emits is relative to the page it appears on. The
//! output works from `file://`, from a web root, and from any URL prefix
//! without a base-path setting.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Malformed markup is
//! a compile error and all interpolation is escaped, so titles from front
//! matter cannot inject markup into the sidebar.
//!
//! ## Active State at Build Time
//!
//! The current page is marked in the generated HTML by exact path comparison.
//! No script guesses it from the URL, so `setup.html` never lights up
//! `setup-advanced.html`.

pub mod config;
pub mod content;
pub mod generate;
pub mod links;
pub mod metadata;
pub mod nav;
pub mod naming;
pub mod output;
pub mod page;
pub mod scan;
pub mod sidebar;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
