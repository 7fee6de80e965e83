//! Page content: metadata headers and markdown conversion.
//!
//! - **Backend**: [`MetadataParser`] and [`MarkdownConverter`] traits
//! - **Front matter**: [`FrontMatterParser`], YAML between `---` lines
//! - **Markdown**: [`CmarkConverter`], `pulldown-cmark` with heading anchors

pub mod backend;
pub mod frontmatter;
pub mod markdown;

pub use backend::{Attributes, MarkdownConverter, MetadataParser, ParsedDocument};
pub use frontmatter::FrontMatterParser;
pub use markdown::CmarkConverter;
