//! Gallery page. Filters by category only.

use super::{
    Context, OverlayLinks, base_document, category_filter, detail_overlay, empty_state,
};
use crate::filter::{self, Criteria};
use crate::nav::Location;
use crate::routes;
use crate::selection::{Selection, neighbours};
use crate::types::GalleryEntry;
use maud::{Markup, html};

pub fn gallery_page(ctx: &Context, criteria: &Criteria, selection: &Selection<u32>) -> Markup {
    let visible = filter::apply(ctx.site.gallery.items(), criteria);

    let mut links = OverlayLinks::close_only(routes::gallery(criteria));
    if let Some(id) = selection.selected() {
        let (prev, next) = neighbours(&visible, id);
        links.prev = prev.map(|e| (routes::gallery_entry(criteria, &e.id), e.title.clone()));
        links.next = next.map(|e| (routes::gallery_entry(criteria, &e.id), e.title.clone()));
    }

    let content = html! {
        main.gallery-page {
            section.page-hero {
                h1 { "Gallery" }
                p { "Moments from our stage." }
            }
            section.listing {
                div.filters {
                    (category_filter(ctx.site.gallery.categories(), criteria, routes::gallery))
                }
                @if visible.is_empty() {
                    (empty_state("photos", routes::GALLERY))
                } @else {
                    div.photo-grid {
                        @for entry in &visible {
                            @let selected = selection.is_selected(&entry.id);
                            a.photo-card.selected[selected]
                                href=(routes::gallery_entry(criteria, &entry.id))
                                aria-current=[selected.then_some("true")] {
                                img src=(entry.image) alt=(entry.title) loading="lazy";
                                div.photo-caption {
                                    span.badge { (entry.category) }
                                    h3 { (entry.title) }
                                    p.card-meta { (entry.date) }
                                }
                            }
                        }
                    }
                }
            }
        }
        (detail_overlay(
            selection.resolve(&ctx.site.gallery),
            |entry: &GalleryEntry| entry.title.clone(),
            &links,
            entry_detail,
        ))
    };

    base_document(
        ctx,
        &ctx.page_title("Gallery"),
        &Location::page(&routes::gallery(criteria)),
        selection.is_open().then_some("overlay-open"),
        content,
    )
}

fn entry_detail(entry: &GalleryEntry) -> Markup {
    html! {
        article.gallery-detail {
            img.detail-image src=(entry.image) alt=(entry.title);
            div.detail-body {
                span.badge { (entry.category) }
                h2 { (entry.title) }
                p.card-meta { (entry.date) " · " (entry.location) }
                p { (entry.description) }
                @if !entry.participants.is_empty() {
                    h3 { "Participants" }
                    ul.participants {
                        @for name in &entry.participants {
                            li { (name) }
                        }
                    }
                }
            }
        }
    }
}
