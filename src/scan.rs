//! Source tree scanning.
//!
//! Stage 1 of the build. Walks the source directory, reads every markdown
//! document, resolves its metadata, converts its body, and builds the
//! navigation model once from the complete set.
//!
//! ## Directory Structure
//!
//! ```text
//! docs-src/                        # Source root
//! ├── config.toml                  # Site configuration (optional)
//! ├── assets/                      # Copied verbatim to the output root
//! ├── getting-started/             # Section
//! │   ├── install.md               # Item
//! │   └── quickstart.md
//! ├── guides/
//! │   ├── faq.md                   # Item directly in the section
//! │   └── setup/                   # Subsection (nested group in the sidebar)
//! │       ├── basic.md
//! │       └── advanced.md
//! ├── resources/
//! │   └── github.md                # URL-only body → external sidebar link
//! └── .drafts/                     # Hidden = ignored
//! ```
//!
//! ## Failure
//!
//! Any unreadable file aborts the scan with its path. Nothing is written
//! during this stage, so a failed scan never leaves a half-built site behind.

use crate::config::{self, SiteConfig};
use crate::content::{CmarkConverter, FrontMatterParser, MarkdownConverter, MetadataParser};
use crate::metadata;
use crate::nav;
use crate::types::{Document, NavigationModel};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Source directory not found: {0}")]
    MissingSource(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Everything the generate stage needs, fully resolved.
#[derive(Debug, Serialize)]
pub struct Site {
    pub config: SiteConfig,
    /// Documents in source path order.
    pub documents: Vec<Document>,
    pub model: NavigationModel,
}

impl Site {
    /// Documents that produce an HTML page (link documents do not).
    pub fn pages(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter().filter(|d| !d.is_link())
    }
}

/// A markdown file read from disk, before metadata extraction.
#[derive(Debug)]
struct SourceFile {
    logical_path: String,
    raw: String,
}

const SOURCE_EXTENSION: &str = "md";

/// Scan `root` with the stock front matter parser and markdown converter.
pub fn scan(root: &Path) -> Result<Site, ScanError> {
    let config = load_site_config(root)?;
    scan_with(root, config, &FrontMatterParser, &CmarkConverter)
}

/// Load `config.toml` from the source root, failing if the root is missing.
pub fn load_site_config(root: &Path) -> Result<SiteConfig, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingSource(root.to_path_buf()));
    }
    Ok(config::load_config(root)?)
}

/// Scan `root` with an already-loaded config and the given collaborators.
pub fn scan_with(
    root: &Path,
    config: SiteConfig,
    parser: &dyn MetadataParser,
    converter: &dyn MarkdownConverter,
) -> Result<Site, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingSource(root.to_path_buf()));
    }

    let sources = collect_sources(root, &config.assets_dir)?;
    tracing::debug!(count = sources.len(), "read source documents");

    let documents: Vec<Document> = sources
        .par_iter()
        .map(|source| build_document(source, parser, converter))
        .collect();

    let model = nav::build_model(&documents, &config.sections);

    Ok(Site {
        config,
        documents,
        model,
    })
}

/// Walk the source tree and read every markdown document, sorted by path.
fn collect_sources(root: &Path, assets_dir: &str) -> Result<Vec<SourceFile>, ScanError> {
    let assets = root.join(assets_dir);
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(is_hidden(e) || e.path() == assets));

    let mut sources = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| ScanError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(root) else {
            continue;
        };

        let raw = fs::read_to_string(entry.path()).map_err(|source| ScanError::Read {
            path: entry.path().to_path_buf(),
            source,
        })?;
        sources.push(SourceFile {
            logical_path: logical_path(rel),
            raw,
        });
    }
    Ok(sources)
}

fn build_document(
    source: &SourceFile,
    parser: &dyn MetadataParser,
    converter: &dyn MarkdownConverter,
) -> Document {
    let parsed = parser.parse(&source.raw);
    let filename = source
        .logical_path
        .rsplit('/')
        .next()
        .unwrap_or(&source.logical_path);
    let title = metadata::resolve_title(&parsed.attributes, filename);
    let order = metadata::resolve_order(&parsed.attributes);

    match metadata::detect_link(parsed.body) {
        Some(url) => {
            tracing::trace!(path = %source.logical_path, %url, "link document");
            Document::new(&source.logical_path, title, order, String::new()).into_link(url)
        }
        None => {
            let body = converter.convert(parsed.body);
            Document::new(&source.logical_path, title, order, body)
        }
    }
}

/// Slash-joined logical path, independent of the platform separator.
fn logical_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == SOURCE_EXTENSION)
}
