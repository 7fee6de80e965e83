//! Relative hyperlink resolution between pages of the generated site.
//!
//! Every link the generator emits is relative, so the output can be opened
//! straight from disk or dropped under any URL prefix. All paths handled here
//! are *logical paths*: slash-separated, relative to the document root, with
//! no leading slash, e.g. `guides/setup/advanced.html`.
//!
//! ```text
//! from                          to                             href
//! getting-started/install.html  getting-started/quickstart.html  quickstart.html
//! guides/setup/advanced.html    index.html                     ../../index.html
//! guides/setup/advanced.html    guides/faq.html                ../faq.html
//! index.html                    guides/setup/advanced.html     guides/setup/advanced.html
//! ```
//!
//! Resolution is total: any two well-formed logical paths produce an href, and
//! joining that href onto the directory of `from` gives back `to`.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that cannot appear literally in one path segment of an href.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Extension of source documents.
pub const SOURCE_EXTENSION: &str = ".md";
/// Extension of generated pages.
pub const OUTPUT_EXTENSION: &str = ".html";

/// Compute the href that leads from the page at `from` to the page at `to`.
///
/// Targets that are already absolute URLs (`https://…`, `mailto:…`) are
/// returned unchanged.
pub fn resolve_link(from: &str, to: &str) -> String {
    if is_external(to) {
        return to.to_string();
    }

    let from_dirs = directories(from);
    let (to_dirs, filename) = split_filename(to);

    let common = from_dirs
        .iter()
        .zip(to_dirs.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut href = depth_prefix(from_dirs.len() - common);
    for dir in &to_dirs[common..] {
        href.push_str(dir);
        href.push('/');
    }
    href.push_str(filename);
    href
}

/// Whether `href` carries a URL scheme and must not be rewritten.
///
/// A scheme is a letter followed by letters, digits, `+`, `-` or `.`, then
/// `:`. Single-letter schemes are rejected so Windows drive letters never
/// qualify.
pub fn is_external(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    let starts_with_letter = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    starts_with_letter
        && scheme.len() > 1
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// The `href` attribute value for a link from `from` to `to`.
///
/// Same as [`resolve_link`], with every path segment percent-encoded so a
/// file named `c#-notes.md` is not cut short at the `#`. External targets are
/// returned unchanged.
pub fn page_href(from: &str, to: &str) -> String {
    if is_external(to) {
        return to.to_string();
    }
    encode_path(&resolve_link(from, to))
}

/// Percent-encode each `/`-separated segment of a relative path.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// `depth` repetitions of `../`.
pub fn depth_prefix(depth: usize) -> String {
    "../".repeat(depth)
}

/// Number of directories between the root and the file at `path`.
///
/// `index.html` → 0, `guides/setup/advanced.html` → 2.
pub fn directory_depth(path: &str) -> usize {
    directories(path).len()
}

/// Rewrite a source logical path to the path of its generated page.
///
/// Paths that do not end in `.md` are returned as-is, so output paths can be
/// passed through safely.
pub fn output_path(logical: &str) -> String {
    match logical.strip_suffix(SOURCE_EXTENSION) {
        Some(stem) => format!("{stem}{OUTPUT_EXTENSION}"),
        None => logical.to_string(),
    }
}

/// Join a logical path under a directory prefix (`docs` + `a/b.html` →
/// `docs/a/b.html`). An empty prefix leaves the path alone.
pub fn join_under(prefix: &str, path: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        path.to_string()
    } else {
        format!("{prefix}/{path}")
    }
}

/// Directory segments of `path`, without the filename.
///
/// Empty and `.` segments are ignored so `./a//b.md` reads as `a/b.md`.
fn directories(path: &str) -> Vec<&str> {
    split_filename(path).0
}

fn split_filename(path: &str) -> (Vec<&str>, &str) {
    let mut segments: Vec<&str> = path
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect();
    let filename = segments.pop().unwrap_or("");
    (segments, filename)
}
