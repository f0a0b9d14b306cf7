//! Static site generation.
//!
//! Every view state of the site becomes its own page. The generator first
//! plans the full set of states, renders them in parallel, then writes them
//! one by one through the page cache.
//!
//! ## Planned Pages
//!
//! - **Home** (`/`)
//! - **Event listings**: one per (category, status) pair, `All` included
//!   for both, so `(1 + categories) × 4` listings
//! - **Event details**: one per event visible in each listing
//! - **Performances**: one per video, the events page with the video open
//! - **Gallery listings**: `All` plus one per category
//! - **Gallery details**: one per entry visible in each listing
//! - **Redirects**: `/events/all/all/` and `/gallery/all/` point at the
//!   canonical unfiltered listings
//!
//! An empty listing is still generated: it is the "no matches" state and
//! its reset link must not 404.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── .build-cache.json
//! ├── robots.txt                        # from assets/
//! ├── events/
//! │   ├── index.html
//! │   ├── all/upcoming/index.html
//! │   ├── all/all/2/index.html
//! │   └── workshop/upcoming/2/index.html
//! ├── performances/
//! │   └── nukkad-natak/index.html
//! └── gallery/
//!     ├── index.html
//!     ├── festivals/index.html
//!     └── festivals/1/index.html
//! ```
//!
//! ## Parallel Rendering
//!
//! Pages are pure functions of the immutable [`Site`], so rendering uses
//! [rayon](https://docs.rs/rayon). Writes stay sequential so the cache
//! manifest has a single writer.

use crate::cache::{self, CacheManifest, CacheStats};
use crate::filter::{self, Criteria};
use crate::render::{Context, redirect_page};
use crate::render::events::{EventsOverlay, events_page};
use crate::render::gallery::gallery_page;
use crate::render::home::{IntroMode, home_page};
use crate::routes;
use crate::selection::Selection;
use crate::site::Site;
use crate::types::Status;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Asset walk failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Asset {0} would overwrite a generated page")]
    AssetCollision(String),
}

/// One view state of the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageState {
    Home(IntroMode),
    Events {
        criteria: Criteria,
        overlay: EventsOverlay,
    },
    Gallery {
        criteria: Criteria,
        selection: Selection<u32>,
    },
    /// A stand-in URL that sends the browser to `to`.
    Redirect { to: String },
}

impl PageState {
    pub fn kind(&self) -> PageKind {
        match self {
            PageState::Home(_) => PageKind::Home,
            PageState::Redirect { .. } => PageKind::Redirect,
            PageState::Events {
                overlay: EventsOverlay::None,
                ..
            }
            | PageState::Gallery {
                selection: Selection::Closed,
                ..
            } => PageKind::Listing,
            PageState::Events {
                overlay: EventsOverlay::Video(_),
                ..
            } => PageKind::Performance,
            PageState::Events { .. } | PageState::Gallery { .. } => PageKind::Detail,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Listing,
    Detail,
    Performance,
    Redirect,
}

/// A page to generate: its URL and the state it renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub url: String,
    pub state: PageState,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Skip unchanged pages using `.build-cache.json`.
    pub use_cache: bool,
}

/// What a build produced.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub listings: usize,
    pub details: usize,
    pub performances: usize,
    pub assets: usize,
    pub cache: CacheStats,
}

impl BuildReport {
    /// Pages written or left unchanged, home included.
    pub fn pages(&self) -> usize {
        self.cache.total() as usize
    }
}

/// Every page the site consists of, home first, then events, performances
/// and gallery, each in catalog order.
pub fn plan(site: &Site) -> Vec<Page> {
    let mut pages = vec![Page {
        url: routes::HOME.to_string(),
        state: PageState::Home(IntroMode::from_config(site.config.home.intro_curtain)),
    }];

    for criteria in Criteria::combinations(site.events.categories(), &Status::ALL) {
        let visible = filter::apply(site.events.items(), &criteria);
        for event in visible {
            pages.push(Page {
                url: routes::event(&criteria, &event.id),
                state: PageState::Events {
                    criteria: criteria.clone(),
                    overlay: EventsOverlay::Event(Selection::Open(event.id)),
                },
            });
        }
        if criteria.is_all() {
            pages.push(redirect(routes::events_state(&criteria), routes::events(&criteria)));
        }
        pages.push(Page {
            url: routes::events(&criteria),
            state: PageState::Events {
                criteria,
                overlay: EventsOverlay::None,
            },
        });
    }

    for video in site.videos.items() {
        pages.push(Page {
            url: routes::performance(&video.id),
            state: PageState::Events {
                criteria: Criteria::all(),
                overlay: EventsOverlay::Video(Selection::Open(video.id.clone())),
            },
        });
    }

    for criteria in Criteria::combinations(site.gallery.categories(), &[]) {
        let visible = filter::apply(site.gallery.items(), &criteria);
        for entry in visible {
            pages.push(Page {
                url: routes::gallery_entry(&criteria, &entry.id),
                state: PageState::Gallery {
                    criteria: criteria.clone(),
                    selection: Selection::Open(entry.id),
                },
            });
        }
        if criteria.is_all() {
            pages.push(redirect(routes::gallery_state(&criteria), routes::gallery(&criteria)));
        }
        pages.push(Page {
            url: routes::gallery(&criteria),
            state: PageState::Gallery {
                criteria,
                selection: Selection::Closed,
            },
        });
    }

    pages
}

fn redirect(url: String, to: String) -> Page {
    Page {
        url,
        state: PageState::Redirect { to },
    }
}

pub fn render_page(ctx: &Context, state: &PageState) -> String {
    let markup = match state {
        PageState::Home(intro) => home_page(ctx, *intro),
        PageState::Redirect { to } => redirect_page(to),
        PageState::Events { criteria, overlay } => events_page(ctx, criteria, overlay),
        PageState::Gallery {
            criteria,
            selection,
        } => gallery_page(ctx, criteria, selection),
    };
    markup.into_string()
}

/// Render every planned page into `output_dir`, copy the assets, and prune
/// pages left over from previous builds.
pub fn build(
    site: &Site,
    source: &Path,
    output_dir: &Path,
    options: BuildOptions,
) -> Result<BuildReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let pages = plan(site);
    info!(pages = pages.len(), "planned site");

    let assets = source.join(&site.config.assets_dir);
    if assets.is_dir() {
        let planned: HashSet<String> = pages.iter().map(|p| relative_path(&p.url)).collect();
        check_asset_collisions(&assets, &planned)?;
    }

    let ctx = Context::new(site);
    let rendered: Vec<(String, PageKind, String)> = pages
        .par_iter()
        .map(|page| {
            let path = relative_path(&page.url);
            (path, page.state.kind(), render_page(&ctx, &page.state))
        })
        .collect();

    let previous = CacheManifest::load(output_dir);
    let lookup = if options.use_cache {
        previous.clone()
    } else {
        CacheManifest::empty()
    };
    let mut manifest = CacheManifest::empty();
    let mut report = BuildReport::default();
    let mut current = HashSet::new();

    for (path, kind, html) in rendered {
        match kind {
            PageKind::Home | PageKind::Redirect => {}
            PageKind::Listing => report.listings += 1,
            PageKind::Detail => report.details += 1,
            PageKind::Performance => report.performances += 1,
        }
        let hash = cache::hash_content(html.as_bytes());
        if lookup.is_fresh(&path, &hash, output_dir) {
            debug!("unchanged {path}");
            report.cache.hit();
        } else {
            let target = output_dir.join(&path);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, html)?;
            debug!("wrote {path}");
            report.cache.miss();
        }
        manifest.insert(path.clone(), hash);
        current.insert(path);
    }

    for stale in previous.stale(&current) {
        let target = output_dir.join(&stale);
        if target.exists() {
            fs::remove_file(&target)?;
            remove_empty_parents(&target, output_dir);
        }
        debug!("removed {stale}");
        report.cache.prune();
    }
    manifest.save(output_dir)?;

    if assets.is_dir() {
        report.assets = copy_assets(&assets, output_dir)?;
    }

    info!(cache = %report.cache, assets = report.assets, "site generated at {}", output_dir.display());
    Ok(report)
}

/// Output path of a URL as a `/`-separated manifest key.
fn relative_path(url: &str) -> String {
    slash_path(&routes::output_path(url))
}

fn slash_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Fail before anything is written if an asset shares a path with a page.
fn check_asset_collisions(src: &Path, planned: &HashSet<String>) -> Result<(), GenerateError> {
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let key = slash_path(rel);
        if planned.contains(&key) {
            return Err(GenerateError::AssetCollision(key));
        }
    }
    Ok(())
}

/// Remove directories emptied by pruning, up to (not including) `root`.
fn remove_empty_parents(file: &Path, root: &Path) {
    let mut dir = file.parent();
    while let Some(d) = dir {
        if d == root || fs::remove_dir(d).is_err() {
            break;
        }
        dir = d.parent();
    }
}

/// Copy the assets directory verbatim. Returns the number of files copied.
fn copy_assets(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    let mut copied = 0;
    for entry in WalkDir::new(src).min_depth(1) {
        let entry = entry?;
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    debug!(copied, "copied assets from {}", src.display());
    Ok(copied)
}
