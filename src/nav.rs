//! Navigation model construction.
//!
//! One pass over every document builds the sidebar for the whole site:
//!
//! ```text
//! getting-started/install.md        ┐
//! getting-started/quickstart.md     ├─ Getting Started: Install, Quickstart
//! guides/faq.md                     ┐
//! guides/setup/advanced.md          ├─ Guides: FAQ, [Setup: Advanced, Basic]
//! guides/setup/basic.md             ┘
//! ```
//!
//! Sections are created lazily the first time a document names them, items
//! are appended in whatever order the documents arrive, and a final sort
//! fixes the order:
//!
//! - items within a section by `(order, title)`, then output path for
//!   determinism
//! - sections by `(order, title)`, then key
//!
//! The resulting [`NavigationModel`] is immutable and is shared read-only by
//! every page render.

use crate::config::SectionConfig;
use crate::links::output_path;
use crate::naming::derive_title;
use crate::types::{Document, NavItem, NavigationModel, Section, UNORDERED};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Build the navigation model from the complete document set.
///
/// `sections` supplies titles and ordering per section key; keys missing
/// from it get a derived title and sort last. Nothing is rejected.
pub fn build_model(
    documents: &[Document],
    sections: &BTreeMap<String, SectionConfig>,
) -> NavigationModel {
    let mut by_key: BTreeMap<String, Section> = BTreeMap::new();

    for doc in documents {
        if doc.section.is_empty() {
            tracing::warn!(path = %doc.logical_path, "document has no section, skipping");
            continue;
        }
        let section = by_key
            .entry(doc.section.clone())
            .or_insert_with(|| new_section(&doc.section, sections.get(&doc.section)));
        section.items.push(nav_item(doc));
    }

    let mut ordered: Vec<Section> = by_key.into_values().collect();
    for section in &mut ordered {
        section.items.sort_by(compare_items);
    }
    ordered.sort_by(compare_sections);

    tracing::debug!(
        sections = ordered.len(),
        items = ordered.iter().map(|s| s.items.len()).sum::<usize>(),
        "built navigation model"
    );
    NavigationModel::from_sorted(ordered)
}

fn new_section(key: &str, config: Option<&SectionConfig>) -> Section {
    let title = config
        .and_then(|c| c.title.clone())
        .unwrap_or_else(|| derive_title(key));
    let order = config.and_then(|c| c.order).unwrap_or(UNORDERED);
    Section {
        key: key.to_string(),
        title,
        order,
        items: Vec::new(),
    }
}

fn nav_item(doc: &Document) -> NavItem {
    NavItem {
        title: doc.title.clone(),
        target_path: doc
            .link
            .clone()
            .unwrap_or_else(|| output_path(&doc.logical_path)),
        order: doc.order,
        subsection: doc.subsection.clone(),
        source_path: doc.logical_path.clone(),
    }
}

fn compare_items(a: &NavItem, b: &NavItem) -> Ordering {
    a.order
        .cmp(&b.order)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.target_path.cmp(&b.target_path))
}

fn compare_sections(a: &Section, b: &Section) -> Ordering {
    a.order
        .cmp(&b.order)
        .then_with(|| a.title.cmp(&b.title))
        .then_with(|| a.key.cmp(&b.key))
}

/// A section's items split for display.
#[derive(Debug)]
pub struct ItemGroups<'a> {
    /// Items directly in the section directory.
    pub direct: Vec<&'a NavItem>,
    /// One group per subsection, in order of first appearance.
    pub subsections: Vec<Subsection<'a>>,
}

/// Items sharing a subsection directory.
#[derive(Debug)]
pub struct Subsection<'a> {
    pub key: &'a str,
    pub title: String,
    pub items: Vec<&'a NavItem>,
}

/// Partition a section's (already sorted) items into direct items and
/// subsection groups, keeping the sorted order inside each group.
pub fn group_items(section: &Section) -> ItemGroups<'_> {
    let mut direct = Vec::new();
    let mut subsections: Vec<Subsection<'_>> = Vec::new();

    for item in &section.items {
        match item.subsection.as_deref() {
            None => direct.push(item),
            Some(key) => match subsections.iter_mut().find(|g| g.key == key) {
                Some(group) => group.items.push(item),
                None => subsections.push(Subsection {
                    key,
                    title: derive_title(key),
                    items: vec![item],
                }),
            },
        }
    }

    ItemGroups {
        direct,
        subsections,
    }
}
