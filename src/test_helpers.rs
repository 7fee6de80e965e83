//! Shared test utilities for the simple-docs test suite.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let scanned = scan(tmp.path()).unwrap();
//!
//! assert_nav_shape(&scanned.model, &[
//!     ("Getting Started", &["Install", "Quickstart"]),
//!     ("Guides", &["FAQ", "Setup/Basic", "Setup/Advanced"]),
//! ]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::nav::group_items;
use crate::types::{Document, NavItem, NavigationModel, Section};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/docs-src/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs-src");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// Write `content` to `root/rel`, creating parent directories.
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

// =========================================================================
// Builders
// =========================================================================

/// A document with an empty body.
pub fn doc(path: &str, title: &str, order: i64) -> Document {
    Document::new(path, title.to_string(), order, String::new())
}

// =========================================================================
// Lookups
// =========================================================================

/// Find a section by display title. Panics with the available titles.
pub fn find_section<'a>(model: &'a NavigationModel, title: &str) -> &'a Section {
    model
        .sections()
        .iter()
        .find(|s| s.title == title)
        .unwrap_or_else(|| {
            let titles: Vec<&str> = model.sections().iter().map(|s| s.title.as_str()).collect();
            panic!("section '{title}' not found, have: {titles:?}")
        })
}

/// Find an item by title within a section.
pub fn find_item<'a>(section: &'a Section, title: &str) -> &'a NavItem {
    section
        .items
        .iter()
        .find(|i| i.title == title)
        .unwrap_or_else(|| panic!("item '{title}' not found in '{}'", section.title))
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert the displayed sidebar shape: section titles in order, each with its
/// entries in display order. Subsection entries are written `Group/Item`.
pub fn assert_nav_shape(model: &NavigationModel, expected: &[(&str, &[&str])]) {
    let actual: Vec<(String, Vec<String>)> = model
        .sections()
        .iter()
        .map(|section| {
            let groups = group_items(section);
            let mut entries: Vec<String> =
                groups.direct.iter().map(|i| i.title.clone()).collect();
            for sub in &groups.subsections {
                entries.extend(sub.items.iter().map(|i| format!("{}/{}", sub.title, i.title)));
            }
            (section.title.clone(), entries)
        })
        .collect();

    let expected: Vec<(String, Vec<String>)> = expected
        .iter()
        .map(|(title, items)| {
            (
                title.to_string(),
                items.iter().map(|s| s.to_string()).collect(),
            )
        })
        .collect();

    assert_eq!(actual, expected, "navigation shape mismatch");
}
