//! CLI output formatting for the build stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every entity (section,
//! subsection, page) leads with its positional index and title, the way it
//! appears in the sidebar; filesystem paths follow as indented `Source:`
//! lines. Read top to bottom, the scan output *is* the sidebar.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Sections
//! 001 Getting Started
//!     001 Install
//!         Source: getting-started/install.md
//! 003 Guides
//!     001 FAQ
//!         Source: guides/faq.md
//!     002 Setup
//!         001 Basic Setup
//!             Source: guides/setup/basic.md
//! 005 Resources
//!     001 GitHub (link)
//!         Link: https://github.com/example/hivepro
//!
//! Config
//!     config.toml
//!     assets/
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! 001 Install → docs/getting-started/install.html
//! 002 Quickstart → docs/getting-started/quickstart.html
//!
//! Assets
//!     robots.txt
//!
//! Generated 9 pages, 1 asset
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout.

use crate::generate::GenerateSummary;
use crate::links::is_external;
use crate::nav::group_items;
use crate::page::LANDING;
use crate::scan::Site;
use crate::types::NavItem;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Header line plus context line for one nav item.
fn item_lines(index: usize, item: &NavItem, depth: usize) -> [String; 2] {
    let pad = indent(depth);
    if is_external(&item.target_path) {
        [
            format!("{pad}{} {} (link)", format_index(index), item.title),
            format!("{pad}    Link: {}", item.target_path),
        ]
    } else {
        [
            format!("{pad}{} {}", format_index(index), item.title),
            format!("{pad}    Source: {}", item.source_path),
        ]
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

/// Format scan output: the navigation tree as it will appear in the sidebar.
pub fn format_scan_output(site: &Site, source_root: &Path) -> Vec<String> {
    let mut lines = vec!["Sections".to_string()];

    for (i, section) in site.model.sections().iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), section.title));
        let groups = group_items(section);
        let mut position = 0;
        for item in &groups.direct {
            position += 1;
            lines.extend(item_lines(position, item, 1));
        }
        for sub in &groups.subsections {
            position += 1;
            lines.push(format!("{}{} {}", indent(1), format_index(position), sub.title));
            for (j, item) in sub.items.iter().enumerate() {
                lines.extend(item_lines(j + 1, item, 2));
            }
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push("    config.toml".to_string());
    }
    if source_root.join(&site.config.assets_dir).is_dir() {
        lines.push(format!("    {}/", site.config.assets_dir));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(site: &Site, source_root: &Path) {
    for line in format_scan_output(site, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate output: every written page with its output path.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = vec![format!("Home \u{2192} {LANDING}")];

    for (i, page) in summary.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            page.title,
            page.output
        ));
    }

    if !summary.assets.is_empty() {
        lines.push(String::new());
        lines.push("Assets".to_string());
        for asset in &summary.assets {
            lines.push(format!("    {asset}"));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}",
        plural(summary.pages.len(), "page", "pages"),
        plural(summary.assets.len(), "asset", "assets")
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}
