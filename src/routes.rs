//! Site URLs.
//!
//! Every view state has its own URL, so the overlay state machine maps
//! directly onto links:
//!
//! ```text
//! /events/                               all categories, all statuses
//! /events/<category>/<status>/           filtered listing (`all` = inactive)
//! /events/<category>/<status>/<id>/      same listing, overlay open on <id>
//! /gallery/                              all categories
//! /gallery/<category>/                   filtered listing
//! /gallery/<category>/<id>/              overlay open on <id>
//! /performances/<id>/                    events page, video overlay open
//! ```
//!
//! `select` is a link to a detail URL, `clear` is a link to its listing.
//! Detail pages under the all-inactive state keep the explicit
//! `all/all/` segments so a category slug can never shadow an id. The bare
//! `/events/all/all/` and `/gallery/all/` directories redirect to the
//! canonical listings, so trimming an id off a detail URL never 404s.

use crate::filter::Criteria;
use crate::slug::slugify;
use std::fmt::Display;
use std::path::PathBuf;

pub const HOME: &str = "/";
pub const EVENTS: &str = "/events/";
pub const GALLERY: &str = "/gallery/";

/// Anchor of the featured performances section on the events page.
pub const PERFORMANCES_ANCHOR: &str = "performances";

pub fn events(criteria: &Criteria) -> String {
    if criteria.is_all() {
        EVENTS.to_string()
    } else {
        events_state(criteria)
    }
}

pub fn event(criteria: &Criteria, id: &u32) -> String {
    format!("{}{}/", events_state(criteria), id)
}

/// The explicit `<category>/<status>/` form, even for the all-inactive state.
pub fn events_state(criteria: &Criteria) -> String {
    format!(
        "{EVENTS}{}/{}/",
        criteria.category.slug(),
        criteria.status.slug()
    )
}

/// Gallery listings only filter by category.
pub fn gallery(criteria: &Criteria) -> String {
    if criteria.category.is_all() {
        GALLERY.to_string()
    } else {
        gallery_state(criteria)
    }
}

pub fn gallery_entry(criteria: &Criteria, id: &u32) -> String {
    format!("{}{}/", gallery_state(criteria), id)
}

/// The explicit `<category>/` form, even for the all-inactive state.
pub fn gallery_state(criteria: &Criteria) -> String {
    format!("{GALLERY}{}/", criteria.category.slug())
}

pub fn performance(id: &impl Display) -> String {
    format!("/performances/{}/", slugify(&id.to_string()))
}

/// Where closing a video overlay lands.
pub fn performances_section() -> String {
    format!("{EVENTS}#{PERFORMANCES_ANCHOR}")
}

/// Home page anchors.
pub fn home_section(anchor: &str) -> String {
    format!("{HOME}#{anchor}")
}

/// Output file for a URL, relative to the output directory.
///
/// `"/events/workshop/all/"` → `events/workshop/all/index.html`
pub fn output_path(url: &str) -> PathBuf {
    let mut path = PathBuf::new();
    for segment in url.split('/').filter(|s| !s.is_empty()) {
        path.push(segment);
    }
    path.push("index.html");
    path
}
