//! Display titles derived from file and directory names.
//!
//! Documents without a `title` in their front matter, sections missing from
//! the section table, and subsection groups all get their label from the same
//! rule, so one name always produces one title wherever it shows up:
//!
//! - `core-concepts.md` → "Core Concepts" (document)
//! - `api-reference` → "Api Reference" (section without configured title)
//! - `setup_guides` → "Setup Guides" (subsection)

/// Derive a display title from a file or directory name.
///
/// Strips a trailing `.md`, turns `-` and `_` into spaces, and upper-cases
/// the first character of every word. A word starts at any alphanumeric
/// character preceded by a non-alphanumeric one (or the start of the name),
/// so `api.v2` becomes "Api.V2". The rest of each word is left untouched:
/// `REST-api` stays "REST Api".
pub fn derive_title(name: &str) -> String {
    let stem = name.strip_suffix(".md").unwrap_or(name);
    let mut title = String::with_capacity(stem.len());
    let mut at_boundary = true;
    for c in stem.chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };
        if c.is_alphanumeric() {
            if at_boundary {
                title.extend(c.to_uppercase());
            } else {
                title.push(c);
            }
            at_boundary = false;
        } else {
            title.push(c);
            at_boundary = true;
        }
    }
    title
}
