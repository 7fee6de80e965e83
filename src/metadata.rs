//! Document metadata resolution.
//!
//! Each navigation field is resolved independently from the header
//! attributes, with an explicit fallback when the value is missing or
//! unusable:
//!
//! - **Title**: `title` attribute → title derived from the filename
//! - **Order**: `order` attribute → [`UNORDERED`]
//!
//! Malformed values never fail the build. `order: "3"` is read as 3,
//! `order: 0` is a real order (not "missing"), and `order: soon` falls back to
//! [`UNORDERED`].
//!
//! A document whose whole body is a single `http://` or `https://` URL is a
//! *link document*: it shows up in the sidebar pointing at that URL and gets
//! no page of its own.

use crate::content::Attributes;
use crate::naming::derive_title;
use crate::types::UNORDERED;
use serde_json::Value;

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value (after trimming).
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Title from the `title` attribute, else derived from `filename`.
pub fn resolve_title(attributes: &Attributes, filename: &str) -> String {
    let explicit = attributes.get("title").and_then(scalar_text);
    let derived = derive_title(filename);
    resolve(&[explicit.as_deref(), Some(&derived)]).unwrap_or(derived)
}

/// Order from the `order` attribute, else [`UNORDERED`].
pub fn resolve_order(attributes: &Attributes) -> i64 {
    match attributes.get("order") {
        None | Some(Value::Null) => UNORDERED,
        Some(value) => parse_order(value).unwrap_or_else(|| {
            tracing::debug!(%value, "ignoring non-integer order");
            UNORDERED
        }),
    }
}

/// The URL of a link document, if `body` is nothing but one.
pub fn detect_link(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let is_link = !trimmed.is_empty()
        && !trimmed.contains(char::is_whitespace)
        && (trimmed.starts_with("http://") || trimmed.starts_with("https://"));
    is_link.then(|| trimmed.to_string())
}

fn parse_order(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
