//! Page shell: head, header, sidebar, content, scripts.
//!
//! Every asset and header link is root-relative in config and gets rewritten
//! with one `../` per directory between the output root and the page, so a
//! page three levels deep loads `../../../styles.css`.

use crate::config::{BrandConfig, HeaderLink, SiteConfig};
use crate::links::{depth_prefix, is_external, join_under, page_href};
use crate::nav::group_items;
use crate::types::NavigationModel;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Stylesheet filename at the output root.
pub const STYLESHEET: &str = "styles.css";
/// Script filename at the output root.
pub const SCRIPT: &str = "script.js";
/// Landing page filename at the output root.
pub const LANDING: &str = "index.html";

/// Site-wide chrome shared by every page.
#[derive(Debug, Clone, Copy)]
pub struct Chrome<'a> {
    pub site_title: &'a str,
    pub brand: &'a BrandConfig,
    pub header_links: &'a [HeaderLink],
}

impl<'a> Chrome<'a> {
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            site_title: &config.site_title,
            brand: &config.brand,
            header_links: &config.header_links,
        }
    }
}

/// Wrap converted page content and its sidebar in the full page shell.
///
/// `depth` is the number of directories between the output root and the
/// page.
pub fn compose_page(
    chrome: &Chrome<'_>,
    title: &str,
    body: &str,
    nav: Markup,
    depth: usize,
) -> Markup {
    let content = html! {
        div.container {
            aside.sidebar #sidebar {
                (nav)
            }
            main.main-content {
                div.content-wrapper {
                    (PreEscaped(body))
                }
            }
        }
    };
    shell(chrome, title, &depth_prefix(depth), content)
}

/// Render the landing page at the output root: one card per section linking
/// to the first entry shown for it in the sidebar.
pub fn render_landing(chrome: &Chrome<'_>, model: &NavigationModel, docs_dir: &str) -> Markup {
    let content = html! {
        main.landing {
            h1 { (chrome.site_title) }
            div.section-grid {
                @for section in model.sections() {
                    @let groups = group_items(section);
                    @let first = groups
                        .direct
                        .first()
                        .or_else(|| groups.subsections.first().and_then(|g| g.items.first()));
                    @if let Some(item) = first {
                        a.section-card href=(landing_href(docs_dir, &item.target_path)) {
                            span.section-card-title { (section.title) }
                            span.section-card-count {
                                (section.items.len())
                                @if section.items.len() == 1 { " page" } @else { " pages" }
                            }
                        }
                    }
                }
            }
        }
    };
    shell(chrome, chrome.site_title, "", content)
}

fn landing_href(docs_dir: &str, target: &str) -> String {
    if is_external(target) {
        target.to_string()
    } else {
        page_href(LANDING, &join_under(docs_dir, target))
    }
}

/// Root-relative header links get the depth prefix; URLs and fragments do not.
fn header_href(href: &str, prefix: &str) -> String {
    if is_external(href) || href.starts_with('#') {
        href.to_string()
    } else {
        format!("{prefix}{}", href.trim_start_matches('/'))
    }
}

fn shell(chrome: &Chrome<'_>, title: &str, prefix: &str, content: Markup) -> Markup {
    let page_title = if title == chrome.site_title {
        title.to_string()
    } else {
        format!("{title} - {}", chrome.site_title)
    };
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page_title) }
                link rel="stylesheet" href={ (prefix) (STYLESHEET) };
            }
            body {
                header.header {
                    div.header-brand {
                        button.mobile-toggle type="button" aria-controls="sidebar" aria-label="Toggle navigation" {
                            "☰"
                        }
                        a.logo href={ (prefix) (LANDING) } {
                            span { (chrome.brand.prefix) }
                            (chrome.brand.name)
                        }
                    }
                    nav.header-nav {
                        @for link in chrome.header_links {
                            a href=(header_href(&link.href, prefix)) { (link.label) }
                        }
                    }
                }
                (content)
                script src={ (prefix) (SCRIPT) } {}
            }
        }
    }
}
