//! CLI output formatting.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every record is shown
//! by its positional index and title, with its identity (id, category,
//! status) as indented context lines. File paths only appear where the user
//! needs them to find something on disk.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Manchtantra
//!
//! Events (4)
//! 001 Romeo and Juliet: Modern Retelling
//!     Id: 1 · Theatre Play · Upcoming
//!     When: April 15, 2024, 7:00 PM
//!
//! Gallery (3)
//! 001 Annual Theatre Festival 2024
//!     Id: 1 · Festivals
//!
//! Videos (2)
//! 001 Nukkad Natak
//!     Id: nukkad-natak · Street Play
//!
//! Categories
//!     Events: Theatre Play, Workshop, Festival
//!     Gallery: Festivals, Productions, Workshops, Behind the Scenes
//!     Videos: Street Play, Stage Play
//! ```
//!
//! ## Build
//!
//! ```text
//! Home → index.html
//! Listings: 21
//! Detail pages: 27
//! Performances: 2
//! Pages: 51 written
//! Assets: 1 file
//! Site generated at dist
//! ```
//!
//! ## Query
//!
//! ```text
//! Filter: category=Workshop, status=All
//! 001 Theatre Workshop: Method Acting
//!     Id: 2 · Workshop · Upcoming
//! 1 of 4 match
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::catalog::{Catalog, CatalogItem};
use crate::filter::Criteria;
use crate::generate::BuildReport;
use crate::site::Site;
use crate::types::Event;
use std::path::Path;

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a section header with its item count.
///
/// ```text
/// Events (4)
/// ```
fn section_header(title: &str, count: usize) -> String {
    format!("{} ({})", title, count)
}

/// Identity line: id, category, and status when the record has one.
fn identity_line<T: CatalogItem>(item: &T) -> String {
    match item.status() {
        Some(status) => format!(
            "{}Id: {} · {} · {}",
            indent(1),
            item.id(),
            item.category(),
            status.label()
        ),
        None => format!("{}Id: {} · {}", indent(1), item.id(), item.category()),
    }
}

/// Header plus identity for one record.
fn item_lines<T: CatalogItem>(position: usize, item: &T) -> Vec<String> {
    vec![
        format!("{} {}", format_index(position), item.title()),
        identity_line(item),
    ]
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{} {}", n, one)
    } else {
        format!("{} {}", n, many)
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_load_output(site: &Site) -> Vec<String> {
    let mut lines = vec![site.config.site.name.clone()];

    lines.push(String::new());
    lines.push(section_header("Events", site.events.len()));
    for (i, event) in site.events.items().iter().enumerate() {
        lines.extend(item_lines(i + 1, event));
        lines.push(event_when(event));
    }

    lines.push(String::new());
    lines.push(section_header("Gallery", site.gallery.len()));
    for (i, entry) in site.gallery.items().iter().enumerate() {
        lines.extend(item_lines(i + 1, entry));
    }

    lines.push(String::new());
    lines.push(section_header("Videos", site.videos.len()));
    for (i, video) in site.videos.items().iter().enumerate() {
        lines.extend(item_lines(i + 1, video));
    }

    lines.push(String::new());
    lines.push("Categories".to_string());
    lines.push(category_line("Events", &site.events));
    lines.push(category_line("Gallery", &site.gallery));
    lines.push(category_line("Videos", &site.videos));

    if site.home.is_none() {
        lines.push(String::new());
        lines.push("No home.md: the about section shows the tagline".to_string());
    }

    lines
}

fn event_when(event: &Event) -> String {
    format!("{}When: {}, {}", indent(1), event.date, event.time)
}

fn category_line<T: CatalogItem>(label: &str, catalog: &Catalog<T>) -> String {
    if catalog.categories().is_empty() {
        format!("{}{}: (none)", indent(1), label)
    } else {
        format!("{}{}: {}", indent(1), label, catalog.categories().join(", "))
    }
}

/// Print check output to stdout.
pub fn print_load_output(site: &Site) {
    for line in format_load_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_generate_output(report: &BuildReport, output_dir: &Path) -> Vec<String> {
    vec![
        "Home \u{2192} index.html".to_string(),
        format!("Listings: {}", report.listings),
        format!("Detail pages: {}", report.details),
        format!("Performances: {}", report.performances),
        format!("Pages: {}", report.cache),
        format!("Assets: {}", plural(report.assets, "file", "files")),
        format!("Site generated at {}", output_dir.display()),
    ]
}

/// Print build output to stdout.
pub fn print_generate_output(report: &BuildReport, output_dir: &Path) {
    for line in format_generate_output(report, output_dir) {
        println!("{}", line);
    }
}

// ============================================================================
// Query
// ============================================================================

/// The filter state, the matches in catalog order, and either a count or
/// the "no matches" message with the reset hint.
pub fn format_query_output<T: CatalogItem>(
    criteria: &Criteria,
    matches: &[&T],
    total: usize,
    reset_hint: &str,
) -> Vec<String> {
    let mut lines = vec![format!(
        "Filter: category={}, status={}",
        criteria.category.label(),
        criteria.status.label()
    )];

    if matches.is_empty() {
        lines.push("No items match the selected filters.".to_string());
        lines.push(format!("{}Reset: {}", indent(1), reset_hint));
        return lines;
    }

    for (i, item) in matches.iter().enumerate() {
        lines.extend(item_lines(i + 1, *item));
    }
    lines.push(format!("{} of {} match", matches.len(), total));
    lines
}

/// Print query output to stdout.
pub fn print_query_output<T: CatalogItem>(
    criteria: &Criteria,
    matches: &[&T],
    total: usize,
    reset_hint: &str,
) {
    for line in format_query_output(criteria, matches, total, reset_hint) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================
