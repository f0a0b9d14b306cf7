//! Home page: intro curtain, hero, about, highlights, gallery preview,
//! contact.
//!
//! ## Intro curtain
//!
//! [`IntroMode`] decides at build time whether the curtain is in the page at
//! all. When it is, `site.js` reads the session "visited" flag once on load:
//! a returning visitor gets the curtain removed before it paints, a first
//! visit sets the flag and lets the curtain rise. The flag is never read
//! again during the session.
//!
//! ## Highlights
//!
//! Upcoming events, in catalog order, capped at `home.highlights`. Each
//! slide is an anchor target (`#highlight-<i>`), and its prev/next/dot links
//! point at the wrapped neighbour indices, so the carousel works without
//! script.

use super::contact::contact_section;
use super::{Context, base_document, markdown};
use crate::carousel::Carousel;
use crate::filter::{self, Criteria, Criterion};
use crate::nav::Location;
use crate::reveal::{Effect, Step, stagger};
use crate::routes;
use crate::types::{Event, Status};
use maud::{Markup, html};

/// Whether the home page carries the curtain-rise intro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroMode {
    Curtain,
    Skip,
}

impl IntroMode {
    pub fn from_config(intro_curtain: bool) -> Self {
        if intro_curtain {
            IntroMode::Curtain
        } else {
            IntroMode::Skip
        }
    }

    /// Hero reveal steps: name, quote, call to action. With the curtain
    /// they start once it has risen.
    pub fn hero_steps(&self) -> [Step; 3] {
        let start = match self {
            IntroMode::Curtain => 2500,
            IntroMode::Skip => 200,
        };
        [
            Step::new(start, Effect::Zoom),
            Step::new(start, Effect::Rise).after(300),
            Step::new(start, Effect::Fade).after(600),
        ]
    }
}

/// The highlights shown on the home page: upcoming events, capped.
pub fn highlights<'a>(events: &'a [Event], cap: usize) -> Vec<&'a Event> {
    let upcoming = Criteria::all().with_status(Criterion::Only(Status::Upcoming));
    let mut selected = filter::apply(events, &upcoming);
    selected.truncate(cap);
    selected
}

pub fn home_page(ctx: &Context, intro: IntroMode) -> Markup {
    let site = &ctx.site.config.site;
    let home = &ctx.site.config.home;
    let [name_step, quote_step, cta_step] = intro.hero_steps();

    let content = html! {
        @if intro == IntroMode::Curtain {
            div.intro-curtain data-intro aria-hidden="true" {
                div.curtain-left {}
                div.curtain-right {}
                div.intro-title {
                    h1 { (site.name) }
                    p { (site.tagline) }
                }
            }
        }
        main.home-page {
            section.hero {
                @if let Some(video) = &home.hero_video {
                    video.hero-video src=(video) autoplay muted loop playsinline {}
                }
                div.hero-content {
                    h1 class=(name_step.class()) style=(name_step.style()) { (site.name) }
                    p class={ "hero-tagline " (name_step.class()) } style=(name_step.style()) {
                        (site.tagline)
                    }
                    blockquote class=(quote_step.class()) style=(quote_step.style()) {
                        (site.quote)
                    }
                    div class={ "hero-actions " (cta_step.class()) } style=(cta_step.style()) {
                        a.button href=(routes::EVENTS) { "Upcoming Events" }
                        a.button.button-outline href=(routes::performances_section()) {
                            "Watch Performances"
                        }
                    }
                }
            }
            section.about id="about" {
                h2.section-title { "About Us" }
                div.prose {
                    @match &ctx.site.home {
                        Some(body) => (markdown(body)),
                        None => p { (site.tagline) },
                    }
                }
            }
            (highlights_section(ctx))
            (gallery_preview(ctx))
            (contact_section(ctx))
        }
    };

    base_document(
        ctx,
        &site.name,
        &Location::page(routes::HOME),
        (intro == IntroMode::Curtain).then_some("has-intro"),
        content,
    )
}

fn highlights_section(ctx: &Context) -> Markup {
    let events = highlights(ctx.site.events.items(), ctx.site.config.home.highlights);
    let Some(carousel) = Carousel::new(events.len()) else {
        return html! {};
    };
    let upcoming = Criteria::all().with_status(Criterion::Only(Status::Upcoming));
    let steps = stagger(0, 150, events.len(), Effect::Rise);

    html! {
        section.highlights id="highlights" {
            h2.section-title { "Upcoming Highlights" }
            div.carousel {
                @for (position, event) in carousel.positions().zip(&events) {
                    article id={ "highlight-" (position.active()) }
                        class={ "slide " (steps[position.active()].class()) }
                        style=(steps[position.active()].style()) {
                        img src=(event.image) alt=(event.title) loading="lazy";
                        div.slide-body {
                            span.badge { (event.category) }
                            h3 { (event.title) }
                            p.card-meta { (event.date) " · " (event.location) }
                            p { (event.description) }
                            a.button href=(routes::event(&upcoming, &event.id)) { "Details" }
                        }
                        @if carousel.len() > 1 {
                            nav.slide-controls {
                                a.slide-prev href={ "#highlight-" (position.prev_index()) }
                                    aria-label="Previous" { "‹" }
                                @for dot in carousel.positions() {
                                    a.dot.active[dot.active() == position.active()]
                                        href={ "#highlight-" (dot.active()) }
                                        aria-label={ "Slide " (dot.active() + 1) } {}
                                }
                                a.slide-next href={ "#highlight-" (position.next_index()) }
                                    aria-label="Next" { "›" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn gallery_preview(ctx: &Context) -> Markup {
    let entries = ctx.site.gallery.items();
    let count = ctx.site.config.home.gallery_preview.min(entries.len());
    if count == 0 {
        return html! {};
    }
    html! {
        section.gallery-preview {
            h2.section-title { "From the Gallery" }
            div.photo-grid {
                @for entry in &entries[..count] {
                    a.photo-card href=(routes::gallery_entry(&Criteria::all(), &entry.id)) {
                        img src=(entry.image) alt=(entry.title) loading="lazy";
                        div.photo-caption { h3 { (entry.title) } }
                    }
                }
            }
            a.button.button-outline href=(routes::GALLERY) { "View Full Gallery" }
        }
    }
}
