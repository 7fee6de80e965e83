//! HTML site generation.
//!
//! Stage 2 of the build. Takes the scanned [`Site`] and writes the final
//! static HTML site.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                    # Landing page (section cards)
//! ├── styles.css                    # Built-in stylesheet
//! ├── script.js                     # Mobile sidebar toggle
//! ├── robots.txt                    # Anything from assets/, copied verbatim
//! └── docs/                         # docs_dir, mirrors the source tree
//!     ├── getting-started/
//!     │   ├── install.html
//!     │   └── quickstart.html
//!     └── guides/
//!         ├── faq.html
//!         └── setup/
//!             └── basic.html
//! ```
//!
//! ## Ordering
//!
//! Every page is rendered in memory before anything touches the output
//! directory. The navigation model is already complete when rendering
//! starts, so page renders are independent and run on the rayon pool.
//!
//! The output directory is emptied before writing so pages whose source was
//! deleted do not linger. Files from the assets directory are copied last and
//! win over the built-in `styles.css`, `script.js` and `index.html`.

use crate::links::{directory_depth, join_under, output_path};
use crate::page::{self, Chrome, LANDING, SCRIPT, STYLESHEET};
use crate::scan::Site;
use crate::sidebar::render_nav;
use crate::types::Document;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Refusing to empty {path}: it contains the source directory {source_root}")]
    OutputContainsSource { path: PathBuf, source_root: PathBuf },
    #[error("Failed to copy assets from {path}: {source}")]
    Assets {
        path: PathBuf,
        source: std::io::Error,
    },
}

const CSS: &str = include_str!("../static/styles.css");
const JS: &str = include_str!("../static/script.js");

/// One generated page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub title: String,
    /// Source logical path, e.g. `guides/faq.md`.
    pub source: String,
    /// Path relative to the output root, e.g. `docs/guides/faq.html`.
    pub output: String,
}

/// What a build wrote, for CLI reporting.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Pages in source path order.
    pub pages: Vec<GeneratedPage>,
    /// Files copied from the assets directory, relative to it.
    pub assets: Vec<String>,
}

struct Rendered {
    page: GeneratedPage,
    html: String,
}

pub fn generate(
    site: &Site,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateSummary, GenerateError> {
    ensure_outside_source(source_root, output_dir)?;

    let chrome = Chrome::from_config(&site.config);
    let docs_dir = site.config.docs_dir.as_str();

    let documents: Vec<&Document> = site.pages().collect();
    let rendered: Vec<Rendered> = documents
        .par_iter()
        .map(|doc| render_document(site, &chrome, doc))
        .collect();
    let landing = page::render_landing(&chrome, &site.model, docs_dir).into_string();
    tracing::debug!(pages = rendered.len(), "rendered all pages");

    reset_dir(output_dir)?;

    write_output(&output_dir.join(STYLESHEET), CSS)?;
    write_output(&output_dir.join(SCRIPT), JS)?;
    write_output(&output_dir.join(LANDING), &landing)?;

    let mut pages = Vec::with_capacity(rendered.len());
    for Rendered { page, html } in rendered {
        let path = output_dir.join(&page.output);
        write_output(&path, &html)?;
        tracing::debug!(source = %page.source, output = %path.display(), "wrote page");
        pages.push(page);
    }

    let assets_dir = source_root.join(&site.config.assets_dir);
    let mut assets = Vec::new();
    if assets_dir.is_dir() {
        copy_dir_recursive(&assets_dir, output_dir, &assets_dir, &mut assets).map_err(
            |source| GenerateError::Assets {
                path: assets_dir.clone(),
                source,
            },
        )?;
        assets.sort();
    }

    Ok(GenerateSummary { pages, assets })
}

fn render_document(site: &Site, chrome: &Chrome<'_>, doc: &Document) -> Rendered {
    let target = output_path(&doc.logical_path);
    let output = join_under(&site.config.docs_dir, &target);
    let nav = render_nav(&site.model, &target);
    let html = page::compose_page(chrome, &doc.title, &doc.body, nav, directory_depth(&output))
        .into_string();
    Rendered {
        page: GeneratedPage {
            title: doc.title.clone(),
            source: doc.logical_path.clone(),
            output,
        },
        html,
    }
}

/// Refuse an output directory that is, or contains, the source root. It is
/// emptied before writing.
fn ensure_outside_source(source_root: &Path, output_dir: &Path) -> Result<(), GenerateError> {
    if !output_dir.exists() {
        return Ok(());
    }
    let canonical = |path: &Path| {
        fs::canonicalize(path).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })
    };
    let output = canonical(output_dir)?;
    let source = canonical(source_root)?;
    if source.starts_with(&output) {
        return Err(GenerateError::OutputContainsSource {
            path: output_dir.to_path_buf(),
            source_root: source_root.to_path_buf(),
        });
    }
    Ok(())
}

/// Empty `dir`, creating it if needed.
fn reset_dir(dir: &Path) -> Result<(), GenerateError> {
    let wrap = |source| GenerateError::Write {
        path: dir.to_path_buf(),
        source,
    };
    if dir.is_dir() {
        for entry in fs::read_dir(dir).map_err(wrap)? {
            let path = entry.map_err(wrap)?.path();
            let removed = if path.is_dir() {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            removed.map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;
        }
    }
    fs::create_dir_all(dir).map_err(wrap)
}

fn write_output(path: &Path, contents: &str) -> Result<(), GenerateError> {
    let wrap = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, contents).map_err(wrap)
}

fn copy_dir_recursive(
    src: &Path,
    dst: &Path,
    root: &Path,
    copied: &mut Vec<String>,
) -> std::io::Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path, root, copied)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
            if let Ok(rel) = src_path.strip_prefix(root) {
                copied.push(rel.to_string_lossy().replace('\\', "/"));
            }
        }
    }
    Ok(())
}
