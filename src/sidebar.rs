//! Sidebar rendering.
//!
//! Renders the shared [`NavigationModel`] from the point of view of one page.
//! Structure and ordering are identical on every page; only the hrefs (which
//! are relative to the current page) and the active marker change.
//!
//! ```text
//! div.sidebar-section
//!   div.sidebar-title          Guides
//!   ul.sidebar-items
//!     li.sidebar-item          FAQ                  (direct item)
//!     li.sidebar-item
//!       details.sidebar-group  Setup                (subsection, open when it
//!         ul.sidebar-subsection                      holds the active page)
//!           li.sidebar-item    Basic Setup
//! ```

use crate::links::{is_external, output_path, page_href};
use crate::nav::group_items;
use crate::types::{NavItem, NavigationModel};
use maud::{Markup, html};

/// Render the sidebar for the page at `current`.
///
/// `current` may be the source (`.md`) or output (`.html`) path; it is
/// normalized to the output path before comparison. An item is active only
/// when its target equals that path exactly.
pub fn render_nav(model: &NavigationModel, current: &str) -> Markup {
    let current = output_path(current);
    html! {
        @for section in model.sections() {
            @let groups = group_items(section);
            div.sidebar-section {
                div.sidebar-title { (section.title) }
                ul.sidebar-items {
                    @for item in &groups.direct {
                        (render_item(item, &current))
                    }
                    @for sub in &groups.subsections {
                        @let has_active = sub.items.iter().any(|i| i.target_path == current);
                        li.sidebar-item {
                            details.sidebar-group open[has_active] {
                                summary { (sub.title) }
                                ul.sidebar-items.sidebar-subsection {
                                    @for item in &sub.items {
                                        (render_item(item, &current))
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_item(item: &NavItem, current: &str) -> Markup {
    let is_active = item.target_path == current;
    let href = page_href(current, &item.target_path);
    html! {
        li.sidebar-item {
            @if is_external(&item.target_path) {
                a href=(href) target="_blank" rel="noopener" { (item.title) }
            } @else {
                a href=(href)
                    class=[is_active.then_some("active")]
                    aria-current=[is_active.then_some("page")] {
                    (item.title)
                }
            }
        }
    }
}
