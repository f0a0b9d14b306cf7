//! Shared test utilities for the proscenium test suite.
//!
//! Provides fixture setup, lookup helpers that panic with the available
//! names on a miss, and small HTML assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let site = site::load(tmp.path()).unwrap();
//!
//! let hamlet = find_event(&site, 4);
//! assert_eq!(hamlet.status, Status::Past);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::site::{self, Site};
use crate::types::{Event, GalleryEntry, Video};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

/// Load the fixture site straight from the repository, read-only.
pub fn fixture_site() -> Site {
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    site::load(&fixtures).unwrap()
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Catalog lookups: panic with the available ids on a miss
// =========================================================================

/// Find an event by id. Panics if not found.
pub fn find_event(site: &Site, id: u32) -> &Event {
    site.events.get(&id).unwrap_or_else(|| {
        let ids: Vec<u32> = site.events.items().iter().map(|e| e.id).collect();
        panic!("event {id} not found. Available: {ids:?}")
    })
}

/// Find a gallery entry by id. Panics if not found.
pub fn find_entry(site: &Site, id: u32) -> &GalleryEntry {
    site.gallery.get(&id).unwrap_or_else(|| {
        let ids: Vec<u32> = site.gallery.items().iter().map(|e| e.id).collect();
        panic!("gallery entry {id} not found. Available: {ids:?}")
    })
}

/// Find a video by id. Panics if not found.
pub fn find_video<'a>(site: &'a Site, id: &str) -> &'a Video {
    site.videos.get(&id.to_string()).unwrap_or_else(|| {
        let ids: Vec<&str> = site.videos.items().iter().map(|v| v.id.as_str()).collect();
        panic!("video '{id}' not found. Available: {ids:?}")
    })
}

/// All event titles in catalog order.
pub fn event_titles(site: &Site) -> Vec<&str> {
    site.events.items().iter().map(|e| e.title.as_str()).collect()
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count_occurrences(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Assert that `needles` appear in `html` in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' missing or out of order in:\n{html}"),
        }
    }
}
