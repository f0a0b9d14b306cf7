//! Content loading.
//!
//! Reads the content directory into a [`Site`]: configuration, the three
//! catalogs, and the optional home page body.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── config.toml     # Site configuration (optional)
//! ├── home.md         # About section of the home page (optional)
//! ├── events.toml     # Events catalog (optional)
//! ├── gallery.toml    # Gallery catalog (optional)
//! ├── videos.toml     # Featured performances (optional)
//! └── assets/         # Copied verbatim to the output root (optional)
//! ```
//!
//! A missing catalog file is an empty catalog: a brand-new collective can
//! publish a site before its first event. A catalog file that exists but
//! breaks an invariant fails the load, naming the file.

use crate::catalog::{Catalog, CatalogError};
use crate::config::{self, SiteConfig};
use crate::types::{Event, GalleryEntry, Video};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const EVENTS_FILE: &str = "events.toml";
pub const GALLERY_FILE: &str = "gallery.toml";
pub const VIDEOS_FILE: &str = "videos.toml";
pub const HOME_FILE: &str = "home.md";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{path}: {source}")]
    Catalog {
        path: PathBuf,
        source: CatalogError,
    },
}

/// Everything a build needs, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Site {
    pub config: SiteConfig,
    pub events: Catalog<Event>,
    pub gallery: Catalog<GalleryEntry>,
    pub videos: Catalog<Video>,
    /// Raw markdown of `home.md`.
    pub home: Option<String>,
}

pub fn load(root: &Path) -> Result<Site, LoadError> {
    if !root.is_dir() {
        return Err(LoadError::MissingRoot(root.to_path_buf()));
    }

    let config = config::load_config(root)?;
    let events = load_catalog(&root.join(EVENTS_FILE))?;
    let gallery = load_catalog(&root.join(GALLERY_FILE))?;
    let videos = load_catalog(&root.join(VIDEOS_FILE))?;
    let home = read_optional(&root.join(HOME_FILE))?;

    info!(
        events = events.len(),
        gallery = gallery.len(),
        videos = videos.len(),
        "loaded content from {}",
        root.display()
    );

    Ok(Site {
        config,
        events,
        gallery,
        videos,
        home,
    })
}

fn load_catalog<T>(path: &Path) -> Result<Catalog<T>, LoadError>
where
    T: crate::catalog::CatalogItem + DeserializeOwned,
{
    match read_optional(path)? {
        Some(text) => Catalog::from_toml(&text).map_err(|source| LoadError::Catalog {
            path: path.to_path_buf(),
            source,
        }),
        None => {
            debug!("{} not found, using an empty catalog", path.display());
            Ok(Catalog::default())
        }
    }
}

fn read_optional(path: &Path) -> Result<Option<String>, LoadError> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use crate::types::Status;
    use tempfile::TempDir;

    #[test]
    fn loads_fixture_site() {
        let tmp = setup_fixtures();
        let site = load(tmp.path()).unwrap();

        assert_eq!(site.config.site.name, "Manchtantra");
        assert_eq!(event_titles(&site).len(), 4);
        assert_eq!(site.gallery.len(), 3);
        assert_eq!(site.videos.len(), 2);
        assert!(site.home.is_some());
    }

    #[test]
    fn preserves_authored_order() {
        let tmp = setup_fixtures();
        let site = load(tmp.path()).unwrap();
        assert_eq!(
            event_titles(&site),
            vec![
                "Romeo and Juliet: Modern Retelling",
                "Theatre Workshop: Method Acting",
                "Annual Drama Festival",
                "Hamlet: The Danish Prince",
            ]
        );
    }

    #[test]
    fn declared_categories_survive() {
        let tmp = setup_fixtures();
        let site = load(tmp.path()).unwrap();
        assert_eq!(
            site.gallery.categories(),
            ["Festivals", "Productions", "Workshops", "Behind the Scenes"]
        );
    }

    #[test]
    fn event_fields_round_through() {
        let tmp = setup_fixtures();
        let site = load(tmp.path()).unwrap();
        let hamlet = find_event(&site, 4);
        assert_eq!(hamlet.status, Status::Past);
        assert_eq!(hamlet.artists, vec!["Michael Brown", "Sarah Wilson"]);
        assert_eq!(hamlet.duration.as_deref(), Some("3 hours"));
    }

    #[test]
    fn empty_directory_is_an_empty_site() {
        let tmp = TempDir::new().unwrap();
        let site = load(tmp.path()).unwrap();
        assert!(site.events.is_empty());
        assert!(site.gallery.is_empty());
        assert!(site.videos.is_empty());
        assert!(site.home.is_none());
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = load(&tmp.path().join("nope")).unwrap_err();
        assert!(matches!(err, LoadError::MissingRoot(_)));
    }

    #[test]
    fn broken_catalog_names_the_file() {
        let tmp = setup_fixtures();
        fs::write(
            tmp.path().join(GALLERY_FILE),
            r#"
            categories = ["Festivals"]

            [[items]]
            id = 1
            title = "Stray"
            description = ""
            category = "Workshops"
            date = ""
            image = ""
            location = ""
            "#,
        )
        .unwrap();
        let err = load(tmp.path()).unwrap_err();
        match err {
            LoadError::Catalog { path, source } => {
                assert!(path.ends_with(GALLERY_FILE));
                assert!(matches!(source, CatalogError::UndeclaredCategory { .. }));
            }
            other => panic!("expected a catalog error, got {other}"),
        }
    }

    #[test]
    fn duplicate_event_id_fails_load() {
        let tmp = setup_fixtures();
        let events = fs::read_to_string(tmp.path().join(EVENTS_FILE)).unwrap();
        let duplicated = events.replace("id = 4", "id = 1");
        fs::write(tmp.path().join(EVENTS_FILE), duplicated).unwrap();
        assert!(matches!(
            load(tmp.path()),
            Err(LoadError::Catalog {
                source: CatalogError::DuplicateId(_),
                ..
            })
        ));
    }
}
