//! YAML front matter extraction.
//!
//! ```text
//! ---
//! title: Install
//! order: 1
//! ---
//! # Installing
//! ```
//!
//! The header must start on the first line (a UTF-8 BOM is tolerated) and ends
//! at the next `---` or `...` line. Without a closing delimiter the document
//! has no header. A header that is not a YAML mapping is dropped from the body
//! but contributes no attributes.

use super::backend::{Attributes, MetadataParser, ParsedDocument};
use serde_json::Value;

/// [`MetadataParser`] for `---`-delimited YAML front matter.
#[derive(Debug, Default, Clone, Copy)]
pub struct FrontMatterParser;

impl MetadataParser for FrontMatterParser {
    fn parse<'a>(&self, raw: &'a str) -> ParsedDocument<'a> {
        match split_front_matter(raw) {
            Some((yaml, body)) => ParsedDocument {
                attributes: parse_yaml_attributes(yaml),
                body,
            },
            None => ParsedDocument::body_only(raw),
        }
    }
}

/// Split `raw` into `(header, body)` if it opens with a delimited header.
fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let input = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let mut lines = input.split_inclusive('\n');

    let first = lines.next()?;
    if first.trim_end() != "---" {
        return None;
    }

    let header_start = first.len();
    let mut offset = header_start;
    for line in lines {
        let trimmed = line.trim_end();
        if trimmed == "---" || trimmed == "..." {
            return Some((&input[header_start..offset], &input[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

/// Parse a YAML mapping into JSON-compatible attributes.
fn parse_yaml_attributes(yaml: &str) -> Attributes {
    if yaml.trim().is_empty() {
        return Attributes::new();
    }
    let parsed = serde_yaml::from_str::<serde_yaml::Value>(yaml)
        .ok()
        .and_then(|v| serde_json::to_value(v).ok());
    match parsed {
        Some(Value::Object(map)) => map.into_iter().collect(),
        _ => {
            tracing::debug!("ignoring front matter that is not a YAML mapping");
            Attributes::new()
        }
    }
}
