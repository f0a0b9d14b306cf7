//! Events page.
//!
//! One page per (criteria, selection) state. The listing, the filter
//! buttons and the overlay are all derived from that state, so the page for
//! `/events/workshop/upcoming/2/` is the workshop/upcoming listing with
//! event 2 open above it.

use super::performances::{performances_section, video_overlay};
use super::{
    Context, FilterOption, OverlayLinks, base_document, category_filter, detail_overlay,
    empty_state, filter_group,
};
use crate::filter::{self, Criteria};
use crate::nav::Location;
use crate::routes;
use crate::selection::{Selection, neighbours};
use crate::types::{Event, Status};
use maud::{Markup, html};

/// What is open on top of the listing. At most one overlay at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventsOverlay {
    #[default]
    None,
    Event(Selection<u32>),
    Video(Selection<String>),
}

pub fn events_page(ctx: &Context, criteria: &Criteria, overlay: &EventsOverlay) -> Markup {
    let visible = filter::apply(ctx.site.events.items(), criteria);

    let status_options: Vec<FilterOption> = filter::status_options()
        .into_iter()
        .map(|option| FilterOption {
            label: option.label().to_string(),
            active: option == criteria.status,
            href: routes::events(&criteria.clone().with_status(option)),
        })
        .collect();

    let overlay_markup = match overlay {
        EventsOverlay::None => html! {},
        EventsOverlay::Event(selection) => event_overlay(ctx, criteria, &visible, selection),
        EventsOverlay::Video(selection) => video_overlay(ctx, selection),
    };
    let is_selected = |id: &u32| match overlay {
        EventsOverlay::Event(selection) => selection.is_selected(id),
        _ => false,
    };

    let content = html! {
        main.events-page {
            section.page-hero {
                h1 { "Events" }
                p { "Performances, workshops and festivals from " (ctx.site.config.site.name) "." }
            }
            (performances_section(ctx))
            section.listing {
                div.filters {
                    (category_filter(ctx.site.events.categories(), criteria, routes::events))
                    (filter_group("Status", &status_options))
                }
                @if visible.is_empty() {
                    (empty_state("events", routes::EVENTS))
                } @else {
                    div.card-grid {
                        @for event in &visible {
                            (event_card(criteria, event, is_selected(&event.id)))
                        }
                    }
                }
            }
        }
        (overlay_markup)
    };

    let body_class = (!matches!(overlay, EventsOverlay::None)).then_some("overlay-open");
    base_document(
        ctx,
        &ctx.page_title("Events"),
        &Location::page(&routes::events(criteria)),
        body_class,
        content,
    )
}

fn status_badge(status: Status) -> Markup {
    html! {
        span class={ "badge status status-" (status.as_str()) } { (status.label()) }
    }
}

/// `selected` marks the card whose overlay is open.
fn event_card(criteria: &Criteria, event: &Event, selected: bool) -> Markup {
    html! {
        a.card.event-card.selected[selected]
            href=(routes::event(criteria, &event.id))
            aria-current=[selected.then_some("true")] {
            div.card-image {
                img src=(event.image) alt=(event.title) loading="lazy";
                (status_badge(event.status))
            }
            div.card-body {
                span.badge { (event.category) }
                h3 { (event.title) }
                p.card-meta { (event.date) " · " (event.time) }
                p.card-meta { (event.location) }
                p.card-text { (event.description) }
            }
        }
    }
}

fn event_overlay(
    ctx: &Context,
    criteria: &Criteria,
    visible: &[&Event],
    selection: &Selection<u32>,
) -> Markup {
    let mut links = OverlayLinks::close_only(routes::events(criteria));
    if let Some(id) = selection.selected() {
        let (prev, next) = neighbours(visible, id);
        links.prev = prev.map(|e| (routes::event(criteria, &e.id), e.title.clone()));
        links.next = next.map(|e| (routes::event(criteria, &e.id), e.title.clone()));
    }
    detail_overlay(
        selection.resolve(&ctx.site.events),
        |event: &Event| event.title.clone(),
        &links,
        event_detail,
    )
}

fn event_detail(event: &Event) -> Markup {
    html! {
        article.event-detail {
            img.detail-image src=(event.image) alt=(event.title);
            div.detail-body {
                div.detail-badges {
                    span.badge { (event.category) }
                    (status_badge(event.status))
                }
                h2 { (event.title) }
                dl.detail-facts {
                    dt { "Date" } dd { (event.date) }
                    dt { "Time" } dd { (event.time) }
                    @if let Some(duration) = &event.duration {
                        dt { "Duration" } dd { (duration) }
                    }
                    dt { "Venue" } dd { (event.location) }
                    dt { "Capacity" } dd { (event.capacity) }
                }
                p { (event.description) }
                @if !event.artists.is_empty() {
                    h3 { "Featured Artists" }
                    ul.artists {
                        @for artist in &event.artists {
                            li { (artist) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Criterion;
    use crate::test_helpers::*;

    fn render(criteria: &Criteria, overlay: &EventsOverlay) -> String {
        let site = fixture_site();
        let ctx = Context::new(&site);
        events_page(&ctx, criteria, overlay).into_string()
    }

    #[test]
    fn unfiltered_listing_shows_every_event_in_order() {
        let html = render(&Criteria::all(), &EventsOverlay::None);
        assert_in_order(
            &html,
            &[
                "Romeo and Juliet",
                "Theatre Workshop: Method Acting",
                "Annual Drama Festival",
                "Hamlet: The Danish Prince",
            ],
        );
        assert!(!html.contains("role=\"dialog\""));
        assert!(!html.contains(r#"class="overlay-open""#));
    }

    #[test]
    fn category_filter_narrows_listing() {
        let criteria = Criteria::all().with_category(Criterion::category("Workshop"));
        let html = render(&criteria, &EventsOverlay::None);
        assert!(html.contains("Theatre Workshop: Method Acting"));
        assert!(!html.contains("Hamlet: The Danish Prince"));
        assert!(html.contains(r#"href="/events/workshop/all/2/""#));
    }

    #[test]
    fn combined_filters_can_be_empty() {
        let criteria = Criteria::all()
            .with_category(Criterion::category("Festival"))
            .with_status(Criterion::Only(Status::Past));
        let html = render(&criteria, &EventsOverlay::None);
        assert!(html.contains("No events match the selected filters."));
        assert!(html.contains(r#"class="reset-filters" href="/events/""#));
        assert!(!html.contains(r#"class="card-grid""#));
    }

    #[test]
    fn filter_buttons_mark_current_state_and_keep_other_criterion() {
        let criteria = Criteria::all().with_status(Criterion::Only(Status::Upcoming));
        let html = render(&criteria, &EventsOverlay::None);
        assert!(html.contains(r#"class="filter-button active" href="/events/all/upcoming/""#));
        assert!(html.contains(r#"href="/events/festival/upcoming/""#));
        assert!(html.contains(r#"href="/events/all/ongoing/""#));
        assert!(html.contains(r#"class="filter-button" href="/events/""#));
    }

    #[test]
    fn event_overlay_shows_full_record() {
        let overlay = EventsOverlay::Event(Selection::Open(4));
        let html = render(&Criteria::all(), &overlay);
        assert!(html.contains(r#"<body class="overlay-open">"#));
        assert!(html.contains("Featured Artists"));
        assert_in_order(&html, &[r#"role="dialog""#, "Michael Brown", "Sarah Wilson"]);
        assert!(html.contains("<dd>3 hours</dd>"));
        assert!(html.contains(r#"class="overlay-close" href="/events/""#));
    }

    #[test]
    fn open_event_card_is_marked_selected() {
        let overlay = EventsOverlay::Event(Selection::Open(4));
        let html = render(&Criteria::all(), &overlay);
        assert!(html.contains(
            r#"class="card event-card selected" href="/events/all/all/4/" aria-current="true""#
        ));
        assert_eq!(count_occurrences(&html, "event-card selected"), 1);

        let html = render(&Criteria::all(), &EventsOverlay::None);
        assert!(!html.contains("event-card selected"));
    }

    #[test]
    fn event_overlay_steps_within_filtered_subset() {
        let criteria = Criteria::all().with_category(Criterion::category("Theatre Play"));
        let overlay = EventsOverlay::Event(Selection::Open(1));
        let html = render(&criteria, &overlay);
        assert!(html.contains(r#"class="overlay-next" href="/events/theatre-play/all/4/""#));
        assert!(!html.contains(r#"class="overlay-prev""#));
        assert!(html.contains(r#"class="overlay-backdrop" href="/events/theatre-play/all/""#));
    }

    #[test]
    fn event_without_artists_or_duration_omits_them() {
        let overlay = EventsOverlay::Event(Selection::Open(3));
        let html = render(&Criteria::all(), &overlay);
        assert!(!html.contains("Featured Artists"));
        assert!(html.contains("<dd>5 days</dd>"));
    }

    #[test]
    fn video_overlay_sits_on_events_page() {
        let overlay = EventsOverlay::Video(Selection::Open("nukkad-natak".to_string()));
        let html = render(&Criteria::all(), &overlay);
        assert!(html.contains("https://www.youtube.com/embed/VIDEO_ID_1?autoplay=1"));
        assert!(html.contains("Featured Performances"));
        assert_eq!(count_occurrences(&html, r#"role="dialog""#), 1);
        assert!(html.contains(r#"<li class="current"><a href="/events/">Events</a>"#));
    }

    #[test]
    fn events_nav_entry_is_current() {
        let criteria = Criteria::all().with_category(Criterion::category("Festival"));
        let html = render(&criteria, &EventsOverlay::None);
        assert!(html.contains(r#"<li class="current"><a href="/events/">Events</a>"#));
    }
}
