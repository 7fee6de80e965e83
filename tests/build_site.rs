//! End-to-end build of the fixture site through the CLI binary.
//!
//! Run with: `cargo test --test build_site`

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn fixture_source() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/docs-src")
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simple-docs"))
        .args(args)
        .output()
        .expect("failed to run simple-docs")
}

/// Build the fixture site once and share the output across tests.
fn built_site() -> &'static Path {
    static OUT: OnceLock<TempDir> = OnceLock::new();
    OUT.get_or_init(|| {
        let out = TempDir::new().unwrap();
        let output = run(&[
            "build",
            "--source",
            fixture_source().to_str().unwrap(),
            "--output",
            out.path().to_str().unwrap(),
        ]);
        assert!(
            output.status.success(),
            "build failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        out
    })
    .path()
}

fn page(rel: &str) -> String {
    std::fs::read_to_string(built_site().join(rel))
        .unwrap_or_else(|e| panic!("missing {rel}: {e}"))
}

/// Every `href` value in document order.
fn hrefs(html: &str) -> Vec<&str> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|s| s.split('"').next())
        .collect()
}

// ---------------------------------------------------------------------------
// Output tree
// ---------------------------------------------------------------------------

#[test]
fn site_layout() {
    let root = built_site();
    for rel in [
        "index.html",
        "styles.css",
        "script.js",
        "robots.txt",
        "docs/getting-started/install.html",
        "docs/getting-started/quickstart.html",
        "docs/core-concepts/architecture.html",
        "docs/core-concepts/data-model.html",
        "docs/guides/faq.html",
        "docs/guides/setup/basic.html",
        "docs/guides/setup/advanced.html",
        "docs/api-reference/overview.html",
        "docs/release-notes/v1.html",
    ] {
        assert!(root.join(rel).is_file(), "{rel} not generated");
    }
    assert!(!root.join("docs/resources/github.html").exists());
    assert!(!root.join("docs/.drafts").exists());
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

#[test]
fn sibling_link_is_bare_filename() {
    let html = page("docs/getting-started/install.html");
    assert!(hrefs(&html).contains(&"quickstart.html"));
}

#[test]
fn nested_page_links_back_up() {
    let html = page("docs/guides/setup/advanced.html");
    let links = hrefs(&html);
    assert!(links.contains(&"../../../index.html"));
    assert!(links.contains(&"../../../styles.css"));
    assert!(links.contains(&"../../getting-started/install.html"));
    assert!(links.contains(&"../faq.html"));
    assert!(links.contains(&"basic.html"));
}

#[test]
fn external_link_unchanged_everywhere() {
    for rel in [
        "docs/getting-started/install.html",
        "docs/guides/setup/basic.html",
    ] {
        assert!(hrefs(&page(rel)).contains(&"https://github.com/example/hivepro"));
    }
}

#[test]
fn landing_links_into_docs() {
    let links_html = page("index.html");
    let links = hrefs(&links_html);
    assert!(links.contains(&"styles.css"));
    assert!(links.contains(&"docs/getting-started/install.html"));
    assert!(links.contains(&"docs/guides/faq.html"));
}

// ---------------------------------------------------------------------------
// Sidebar
// ---------------------------------------------------------------------------

#[test]
fn exactly_one_active_item_per_page() {
    for rel in [
        "docs/getting-started/install.html",
        "docs/guides/faq.html",
        "docs/guides/setup/basic.html",
    ] {
        let html = page(rel);
        assert_eq!(html.matches("class=\"active\"").count(), 1, "{rel}");
    }
}

#[test]
fn section_order_matches_config() {
    let html = page("docs/guides/faq.html");
    let titles: Vec<&str> = html
        .split("<div class=\"sidebar-title\">")
        .skip(1)
        .filter_map(|s| s.split('<').next())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Getting Started",
            "Core Concepts",
            "Guides",
            "API Reference",
            "Resources",
            "Release Notes",
        ]
    );
}

#[test]
fn page_title_uses_site_title() {
    let html = page("docs/api-reference/overview.html");
    assert!(html.contains("<title>Overview - HivePro Documentation</title>"));
    assert!(html.contains("<table>"));
}

// ---------------------------------------------------------------------------
// Other commands
// ---------------------------------------------------------------------------

#[test]
fn scan_prints_json_model() {
    let output = run(&["scan", "--source", fixture_source().to_str().unwrap()]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sections = json["model"]["sections"].as_array().unwrap();
    assert_eq!(sections[0]["key"], "getting-started");
    assert_eq!(json["config"]["site_title"], "HivePro Documentation");
}

#[test]
fn check_writes_nothing() {
    let out = TempDir::new().unwrap();
    let target = out.path().join("dist");
    let output = run(&[
        "check",
        "--source",
        fixture_source().to_str().unwrap(),
        "--output",
        target.to_str().unwrap(),
    ]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Content is valid"));
    assert!(!target.exists());
}

#[test]
fn gen_config_prints_stock_config() {
    let output = run(&["gen-config"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("[sections.getting-started]"));
}

#[test]
fn missing_source_fails() {
    let out = TempDir::new().unwrap();
    let output = run(&[
        "build",
        "--source",
        out.path().join("nope").to_str().unwrap(),
        "--output",
        out.path().join("dist").to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope"));
}
