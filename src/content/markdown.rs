//! Markdown to HTML via `pulldown-cmark`.
//!
//! Enabled extensions: tables, footnotes, strikethrough, task lists, smart
//! punctuation, and `{#id .class}` heading attributes. Raw HTML passes
//! through untouched.
//!
//! Every heading gets an id (explicit `{#id}` wins, otherwise a slug of its
//! text) and its content is wrapped in a self-link so readers can copy a
//! permalink:
//!
//! ```text
//! ## Quick Start  →  <h2 id="quick-start"><a class="header-anchor" href="#quick-start">Quick Start</a></h2>
//! ```
//!
//! Repeated slugs within one document get `-1`, `-2`, ... suffixes.

use super::backend::MarkdownConverter;
use pulldown_cmark::{CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd, html};
use std::collections::{HashMap, VecDeque};

/// [`MarkdownConverter`] backed by `pulldown-cmark`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CmarkConverter;

impl CmarkConverter {
    fn options() -> Options {
        Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES
    }
}

impl MarkdownConverter for CmarkConverter {
    fn convert(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Self::options());
        let events = HeadingAnchors::new(parser);
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events);
        out
    }
}

/// Generate a GitHub-style slug from heading text.
///
/// Lowercases ASCII alphanumerics, turns whitespace, `-` and `_` into single
/// dashes, and drops everything else.
pub fn slugify(text: &str) -> String {
    text.chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c.to_ascii_lowercase())
            } else if c.is_whitespace() || c == '-' || c == '_' {
                Some('-')
            } else {
                None
            }
        })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Event adapter that assigns heading ids and wraps heading content in an
/// anchor pointing at the heading itself.
struct HeadingAnchors<'a, I: Iterator<Item = Event<'a>>> {
    inner: I,
    pending: VecDeque<Event<'a>>,
    seen: HashMap<String, usize>,
}

impl<'a, I: Iterator<Item = Event<'a>>> HeadingAnchors<'a, I> {
    fn new(inner: I) -> Self {
        Self {
            inner,
            pending: VecDeque::with_capacity(8),
            seen: HashMap::new(),
        }
    }

    fn unique_id(&mut self, text: &str) -> String {
        let base = match slugify(text) {
            s if s.is_empty() => "section".to_string(),
            s => s,
        };
        let count = self.seen.entry(base.clone()).or_insert(0);
        let id = if *count == 0 {
            base
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        id
    }

    fn expand_heading(
        &mut self,
        level: HeadingLevel,
        id: Option<CowStr<'a>>,
        classes: Vec<CowStr<'a>>,
        attrs: Vec<(CowStr<'a>, Option<CowStr<'a>>)>,
    ) -> Event<'a> {
        let mut text = String::new();
        let mut content = Vec::new();
        for event in self.inner.by_ref() {
            if matches!(event, Event::End(TagEnd::Heading(_))) {
                break;
            }
            if let Event::Text(s) | Event::Code(s) = &event {
                text.push_str(s);
            }
            content.push(event);
        }

        let id = match id {
            Some(explicit) => {
                self.seen.entry(explicit.to_string()).or_insert(1);
                explicit.to_string()
            }
            None => self.unique_id(&text),
        };

        let open = format!(r#"<a class="header-anchor" href="{}">"#, fragment_href(&id));
        self.pending.push_back(Event::Html(open.into()));
        self.pending.extend(content);
        self.pending.push_back(Event::Html("</a>".into()));
        self.pending.push_back(Event::End(TagEnd::Heading(level)));

        Event::Start(Tag::Heading {
            level,
            id: Some(id.into()),
            classes,
            attrs,
        })
    }
}

/// `#id`, escaped for use inside a double-quoted attribute.
fn fragment_href(id: &str) -> String {
    maud::html! { "#" (id) }.into_string()
}

impl<'a, I: Iterator<Item = Event<'a>>> Iterator for HeadingAnchors<'a, I> {
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(event) = self.pending.pop_front() {
            return Some(event);
        }
        match self.inner.next()? {
            Event::Start(Tag::Heading {
                level,
                id,
                classes,
                attrs,
            }) => Some(self.expand_heading(level, id, classes, attrs)),
            event => Some(event),
        }
    }
}
