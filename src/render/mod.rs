//! HTML rendering.
//!
//! Every page is a pure function of the loaded [`Site`] and a view state
//! (filter criteria, selection, intro mode). The generator decides which
//! states exist; this module only turns one state into markup.
//!
//! ## Layout
//!
//! - **Header**: site name plus the five nav entries, with a checkbox-driven
//!   menu on narrow screens.
//! - **Main**: the page body.
//! - **Overlay**: present only when a selection is open. The backdrop and
//!   the close control are both links to the listing the overlay sits on.
//! - **Footer**: blurb, quick links, contact details, social links.
//!
//! ## CSS and JavaScript
//!
//! Embedded at compile time and inlined into every page:
//! - `static/style.css`: base styles (palette injected from config)
//! - `static/site.js`: intro curtain, Escape-to-close, embed load/retry,
//!   thumbnail fallback, contact form capture
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Interpolated values are escaped.

pub mod contact;
pub mod events;
pub mod gallery;
pub mod home;
pub mod performances;

use crate::config;
use crate::filter::{self, Criteria};
use crate::nav::{self, Location};
use crate::site::Site;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../../static/style.css");
const JS: &str = include_str!("../../static/site.js");

/// Shared inputs of every renderer.
pub struct Context<'a> {
    pub site: &'a Site,
    pub css: String,
}

impl<'a> Context<'a> {
    pub fn new(site: &'a Site) -> Self {
        let color_css = config::generate_color_css(&site.config.colors);
        Self {
            site,
            css: format!("{}\n\n{}", color_css, CSS_STATIC),
        }
    }

    pub fn page_title(&self, section: &str) -> String {
        format!("{} · {}", section, self.site.config.site.name)
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Renders the base HTML document structure
pub(crate) fn base_document(
    ctx: &Context,
    title: &str,
    location: &Location,
    body_class: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="generator" content={ "proscenium " (env!("CARGO_PKG_VERSION")) };
                title { (title) }
                style { (PreEscaped(&ctx.css)) }
            }
            body class=[body_class] {
                (site_header(ctx, location))
                (content)
                (site_footer(ctx))
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the fixed header with the navigation menu
fn site_header(ctx: &Context, location: &Location) -> Markup {
    let items = nav::items();
    html! {
        header.site-header {
            a.site-logo href="/" { (ctx.site.config.site.name) }
            input.nav-toggle type="checkbox" id="nav-toggle";
            label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                span.hamburger-line {}
                span.hamburger-line {}
                span.hamburger-line {}
            }
            nav.site-nav {
                ul {
                    @for item in &items {
                        li.current[item.is_active(location)] {
                            a href=(item.href) { (item.label) }
                        }
                    }
                }
            }
        }
    }
}

fn site_footer(ctx: &Context) -> Markup {
    let site = &ctx.site.config.site;
    let contact = &ctx.site.config.contact;
    html! {
        footer.site-footer {
            div.footer-grid {
                div.footer-about {
                    h3 { (site.name) }
                    p { (site.blurb) }
                }
                div.footer-links {
                    h4 { "Quick Links" }
                    ul {
                        @for item in nav::items() {
                            li { a href=(item.href) { (item.label) } }
                        }
                    }
                }
                @if !contact.email.is_empty() || !contact.phone.is_empty() || !contact.address.is_empty() {
                    div.footer-contact {
                        h4 { "Contact" }
                        ul {
                            @if !contact.email.is_empty() {
                                li { a href={ "mailto:" (contact.email) } { (contact.email) } }
                            }
                            @if !contact.phone.is_empty() {
                                li { a href=(contact::tel_href(&contact.phone)) { (contact.phone) } }
                            }
                            @for line in &contact.address {
                                li { (line) }
                            }
                        }
                    }
                }
                @if !ctx.site.config.social.is_empty() {
                    div.footer-social {
                        h4 { "Follow Us" }
                        ul {
                            @for link in &ctx.site.config.social {
                                li {
                                    a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.label) }
                                }
                            }
                        }
                    }
                }
            }
            p.footer-copyright {
                "©"
                @if let Some(year) = site.copyright_year {
                    " " (year)
                }
                " " (site.name) ". All rights reserved."
            }
        }
    }
}

// ============================================================================
// Shared listing components
// ============================================================================

/// One filter button: label, target listing, and whether it is the current state.
pub(crate) struct FilterOption {
    pub label: String,
    pub href: String,
    pub active: bool,
}

pub(crate) fn filter_group(name: &str, options: &[FilterOption]) -> Markup {
    html! {
        div.filter-group role="group" aria-label=(name) {
            @for option in options {
                a.filter-button.active[option.active]
                    href=(option.href)
                    aria-current=[option.active.then_some("true")] {
                    (option.label)
                }
            }
        }
    }
}

/// Category buttons for a listing, preserving every other criterion.
pub(crate) fn category_filter(
    categories: &[String],
    criteria: &Criteria,
    route: impl Fn(&Criteria) -> String,
) -> Markup {
    let options: Vec<FilterOption> = filter::category_options(categories)
        .into_iter()
        .map(|option| FilterOption {
            label: option.label().to_string(),
            active: option == criteria.category,
            href: route(&criteria.clone().with_category(option)),
        })
        .collect();
    filter_group("Category", &options)
}

/// The "no matches" state with its one-click reset.
pub(crate) fn empty_state(noun: &str, reset_href: &str) -> Markup {
    html! {
        div.empty-state {
            p { "No " (noun) " match the selected filters." }
            a.reset-filters href=(reset_href) { "Show all " (noun) }
        }
    }
}

/// Links the overlay needs: where dismissal goes, and the neighbouring items.
pub(crate) struct OverlayLinks {
    pub close: String,
    pub prev: Option<(String, String)>,
    pub next: Option<(String, String)>,
}

impl OverlayLinks {
    pub fn close_only(close: String) -> Self {
        Self {
            close,
            prev: None,
            next: None,
        }
    }
}

/// Detail overlay: nothing when `selected` is `None`, the full record otherwise.
///
/// The backdrop, the close control, and Escape (via `data-close`) all lead to
/// `links.close`. Prev/next lead straight to another detail page.
pub(crate) fn detail_overlay<T>(
    selected: Option<&T>,
    label: impl Fn(&T) -> String,
    links: &OverlayLinks,
    body: impl FnOnce(&T) -> Markup,
) -> Markup {
    let Some(item) = selected else {
        return html! {};
    };
    html! {
        div.overlay role="dialog" aria-modal="true" aria-label=(label(item)) data-close=(links.close) {
            a.overlay-backdrop href=(links.close) aria-label="Close" tabindex="-1" {}
            div.overlay-panel {
                a.overlay-close href=(links.close) aria-label="Close" { "×" }
                (body(item))
                @if links.prev.is_some() || links.next.is_some() {
                    nav.overlay-steps {
                        @if let Some((href, title)) = &links.prev {
                            a.overlay-prev href=(href) data-key="ArrowLeft" { "‹ " (title) }
                        }
                        @if let Some((href, title)) = &links.next {
                            a.overlay-next href=(href) data-key="ArrowRight" { (title) " ›" }
                        }
                    }
                }
            }
        }
    }
}

/// Convert markdown to HTML.
pub(crate) fn markdown(source: &str) -> Markup {
    let parser = pulldown_cmark::Parser::new(source);
    let mut body_html = String::new();
    pulldown_cmark::html::push_html(&mut body_html, parser);
    PreEscaped(body_html)
}

/// A bare document that sends the browser on to `to`.
pub(crate) fn redirect_page(to: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta http-equiv="refresh" content={ "0; url=" (to) };
                link rel="canonical" href=(to);
                title { "Redirecting" }
            }
            body {
                p { a href=(to) { "Continue to " (to) } }
            }
        }
    }
}
