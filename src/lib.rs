//! # Proscenium
//!
//! A static site generator for theatre collectives. A small content
//! directory (a config file, three TOML catalogs and a markdown blurb)
//! becomes a complete site: home page, events, gallery, featured
//! performances and a contact form.
//!
//! # Architecture: Load, Plan, Render
//!
//! ```text
//! 1. Load     content/  →  Site        (config + immutable catalogs)
//! 2. Plan     Site      →  [Page]      (every filter × selection state)
//! 3. Render   [Page]    →  dist/       (Maud, in parallel, through the cache)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Loads the content directory into a [`site::Site`] |
//! | [`config`] | `config.toml` loading, validation, and CSS generation |
//! | [`types`] | Content records: events, gallery entries, videos, statuses |
//! | [`catalog`] | Ordered, validated, immutable collections of records |
//! | [`filter`] | Category/status criteria and the predicate engine |
//! | [`selection`] | The zero-or-one open item behind the detail overlay |
//! | [`routes`] | The URL of every view state |
//! | [`nav`] | Site navigation and its active-entry rules |
//! | [`media`] | Video provider URLs and the embed load/retry states |
//! | [`carousel`] | Wrapping index arithmetic for the highlights carousel |
//! | [`reveal`] | Declarative staged-reveal animation steps |
//! | [`render`] | Maud templates for every page |
//! | [`generate`] | Plans the page set, renders it, writes the output tree |
//! | [`cache`] | Skips unchanged pages, prunes removed ones |
//! | [`output`] | CLI output formatting |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Design Decisions
//!
//! ## Every State Is a Page
//!
//! The listing pages filter and the detail overlay opens on top. Instead of
//! doing that in the browser, each (criteria, selection) pair is rendered to
//! its own URL:
//!
//! ```text
//! /events/workshop/upcoming/      filtered listing
//! /events/workshop/upcoming/2/    same listing, overlay open on event 2
//! ```
//!
//! Selecting is following a link; closing the overlay (backdrop, close
//! control, Escape) is following the link back to the listing. Every state
//! is bookmarkable and the site works without JavaScript. The page count is
//! `(1 + categories) × 4 × (1 + events)` for events, which stays in the
//! hundreds for a real collective.
//!
//! ## Closed Category Sets
//!
//! Each catalog declares its categories up front. A typo in an item's
//! category fails the load instead of silently producing a filter button
//! with one item. Declared categories with no items still get a button and
//! render the "no matches" state.
//!
//! ## Status Is Authored, Not Derived
//!
//! An event's status (upcoming, ongoing, past) is written in the content
//! file and never compared with its date. Builds are reproducible: the same
//! content produces the same site on any day.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed templates are build errors, template
//! variables are Rust expressions, and all interpolation is auto-escaped.
//!
//! ## Minimal Script
//!
//! `static/site.js` only does what HTML cannot: reading the session flag
//! for the intro curtain, mapping Escape to the close link, tracking embed
//! load/failure with a retry, and logging contact form submissions.

pub mod cache;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod generate;
pub mod logging;
pub mod media;
pub mod nav;
pub mod output;
pub mod render;
pub mod reveal;
pub mod routes;
pub mod selection;
pub mod site;
pub mod slug;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
