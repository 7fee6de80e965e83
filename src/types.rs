//! Shared types for the navigation model.
//!
//! A [`Document`] is one source file after front matter extraction. The
//! [`nav`](crate::nav) builder projects documents into [`NavItem`]s grouped by
//! [`Section`], producing the immutable [`NavigationModel`] every page is
//! rendered against.

use serde::Serialize;

/// Order assigned to anything without an explicit one. Sorts after every
/// explicit value.
pub const UNORDERED: i64 = i64::MAX;

/// One source document.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    /// Slash-separated path relative to the source root, e.g. `guides/setup/advanced.md`.
    pub logical_path: String,
    /// First path segment.
    pub section: String,
    /// Second path segment when the document sits below a section subdirectory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    pub title: String,
    pub order: i64,
    /// Converted HTML body. Empty for link documents.
    #[serde(skip_serializing)]
    pub body: String,
    /// Set when the document is only a URL: it becomes an external nav link
    /// and no page is generated for it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Document {
    /// Build a document from its logical path and already-resolved metadata.
    ///
    /// `section` and `subsection` come from the path: `a/b/c.md` is in section
    /// `a`, subsection `b`; `a/c.md` has no subsection; a root-level `c.md` is
    /// its own section keyed `c.md`.
    pub fn new(logical_path: &str, title: String, order: i64, body: String) -> Self {
        let segments: Vec<&str> = logical_path.split('/').collect();
        let section = segments.first().copied().unwrap_or_default().to_string();
        let subsection = (segments.len() > 2).then(|| segments[1].to_string());
        Self {
            logical_path: logical_path.to_string(),
            section,
            subsection,
            title,
            order,
            body,
            link: None,
        }
    }

    /// Turn this document into an external link entry.
    pub fn into_link(mut self, url: String) -> Self {
        self.body.clear();
        self.link = Some(url);
        self
    }

    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }
}

/// A document's entry in the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub title: String,
    /// Output path of the page (`.md` rewritten to `.html`), or the external
    /// URL of a link document.
    pub target_path: String,
    pub order: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subsection: Option<String>,
    /// Logical path of the document the item came from.
    pub source_path: String,
}

/// Top-level navigation grouping, one per first path segment.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub key: String,
    pub title: String,
    pub order: i64,
    pub items: Vec<NavItem>,
}

/// The complete, ordered navigation for one build.
///
/// Only [`nav::build_model`](crate::nav::build_model) constructs it, and it
/// exposes no mutation: every page sees the same fully-populated model.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavigationModel {
    sections: Vec<Section>,
}

impl NavigationModel {
    /// `sections` must already be sorted.
    pub(crate) fn from_sorted(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Sections in display order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
