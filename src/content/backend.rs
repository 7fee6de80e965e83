//! Collaborator traits for turning raw documents into page content.
//!
//! The build needs two things from each source file: its metadata header and
//! its body as HTML. Both are behind traits so the navigation pipeline never
//! depends on a particular front matter format or markdown flavour:
//!
//! - [`MetadataParser`]: raw document → attributes + body
//! - [`MarkdownConverter`]: markdown → HTML
//!
//! The production implementations are
//! [`FrontMatterParser`](super::frontmatter::FrontMatterParser) and
//! [`CmarkConverter`](super::markdown::CmarkConverter). Neither can fail: a
//! header that does not parse yields no attributes, and every string is valid
//! markdown.

use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata header values, keyed by attribute name.
pub type Attributes = BTreeMap<String, Value>;

/// A raw document split into its header attributes and its body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument<'a> {
    pub attributes: Attributes,
    pub body: &'a str,
}

impl<'a> ParsedDocument<'a> {
    /// A document with no header: the whole input is body.
    pub fn body_only(body: &'a str) -> Self {
        Self {
            attributes: Attributes::new(),
            body,
        }
    }
}

/// Extracts the metadata header from a raw document.
pub trait MetadataParser: Sync {
    fn parse<'a>(&self, raw: &'a str) -> ParsedDocument<'a>;
}

/// Converts a markdown body to an HTML fragment.
pub trait MarkdownConverter: Sync {
    fn convert(&self, markdown: &str) -> String;
}
