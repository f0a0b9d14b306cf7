//! Ordered, immutable item catalogs.
//!
//! A catalog file is a TOML document with an optional closed set of
//! categories and an array of items:
//!
//! ```toml
//! categories = ["Theatre Play", "Workshop", "Festival"]
//!
//! [[items]]
//! id = 1
//! title = "Romeo and Juliet: Modern Retelling"
//! category = "Theatre Play"
//! # ...
//! ```
//!
//! When `categories` is omitted the set is taken from the items, in order of
//! first appearance. When it is present it may list categories no item uses
//! yet (they still get a filter button), but every item must use a declared
//! category.
//!
//! ## Invariants
//!
//! Checked once by [`Catalog::new`]; nothing mutates a catalog afterwards.
//!
//! - Item ids are unique.
//! - Category labels are unique and every item category is declared.
//! - Category slugs are non-empty, unique, and never the reserved `all`.
//! - Item id slugs are non-empty and unique (ids become directory names).

use crate::slug::{self, slugify};
use crate::types::{Event, GalleryEntry, Status, Video};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate item id {0}")]
    DuplicateId(String),
    #[error("Duplicate category '{0}'")]
    DuplicateCategory(String),
    #[error("Item {id} uses undeclared category '{category}'")]
    UndeclaredCategory { id: String, category: String },
    #[error("Category '{0}' has no usable URL slug")]
    EmptySlug(String),
    #[error("Categories '{0}' and '{1}' map to the same URL slug")]
    SlugCollision(String, String),
    #[error("Item id '{0}' has no usable URL slug")]
    EmptyIdSlug(String),
    #[error("Item ids '{0}' and '{1}' map to the same URL slug")]
    IdSlugCollision(String, String),
}

/// What the filter engine and the overlay need from a record.
pub trait CatalogItem {
    type Id: Clone + Eq + Hash + fmt::Display + fmt::Debug;

    fn id(&self) -> &Self::Id;
    fn title(&self) -> &str;
    fn category(&self) -> &str;

    /// Only events carry a status.
    fn status(&self) -> Option<Status> {
        None
    }
}

impl CatalogItem for Event {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn category(&self) -> &str {
        &self.category
    }
    fn status(&self) -> Option<Status> {
        Some(self.status)
    }
}

impl CatalogItem for GalleryEntry {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn category(&self) -> &str {
        &self.category
    }
}

impl CatalogItem for Video {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn category(&self) -> &str {
        &self.category
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile<T> {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// An ordered collection of records with a closed category set.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    categories: Vec<String>,
    items: Vec<T>,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            items: Vec::new(),
        }
    }
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, checking every invariant listed in the module docs.
    ///
    /// An empty `categories` list means "derive from the items".
    pub fn new(categories: Vec<String>, items: Vec<T>) -> Result<Self, CatalogError> {
        let categories = if categories.is_empty() {
            let mut derived: Vec<String> = Vec::new();
            for item in &items {
                if !derived.iter().any(|c| c == item.category()) {
                    derived.push(item.category().to_string());
                }
            }
            derived
        } else {
            categories
        };

        let mut seen_labels = HashSet::new();
        let mut seen_slugs: Vec<(String, &str)> = Vec::new();
        for label in &categories {
            if !seen_labels.insert(label.as_str()) {
                return Err(CatalogError::DuplicateCategory(label.clone()));
            }
            let slug = slugify(label);
            if slug.is_empty() {
                return Err(CatalogError::EmptySlug(label.clone()));
            }
            if slug == slug::ALL {
                return Err(CatalogError::SlugCollision(label.clone(), "All".into()));
            }
            if let Some((_, other)) = seen_slugs.iter().find(|(s, _)| *s == slug) {
                return Err(CatalogError::SlugCollision(
                    (*other).to_string(),
                    label.clone(),
                ));
            }
            seen_slugs.push((slug, label));
        }

        let mut seen_ids = HashSet::new();
        let mut id_slugs: Vec<(String, String)> = Vec::new();
        for item in &items {
            if !seen_ids.insert(item.id()) {
                return Err(CatalogError::DuplicateId(item.id().to_string()));
            }
            let id = item.id().to_string();
            let id_slug = slugify(&id);
            if id_slug.is_empty() {
                return Err(CatalogError::EmptyIdSlug(id));
            }
            if let Some((_, other)) = id_slugs.iter().find(|(s, _)| *s == id_slug) {
                return Err(CatalogError::IdSlugCollision(other.clone(), id));
            }
            id_slugs.push((id_slug, id));
            if !seen_labels.contains(item.category()) {
                return Err(CatalogError::UndeclaredCategory {
                    id: item.id().to_string(),
                    category: item.category().to_string(),
                });
            }
        }

        Ok(Self { categories, items })
    }

    /// Parse a catalog file.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError>
    where
        T: DeserializeOwned,
    {
        let file: CatalogFile<T> = toml::from_str(text)?;
        Self::new(file.categories, file.items)
    }

    /// Items in authored order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The closed category set, in authored order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Resolve a category slug back to its label.
    pub fn category_for_slug(&self, slug: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|label| slugify(label) == slug)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: u32, category: &str) -> GalleryEntry {
        GalleryEntry {
            id,
            title: format!("Entry {id}"),
            description: String::new(),
            category: category.to_string(),
            date: String::new(),
            image: String::new(),
            location: String::new(),
            participants: vec![],
        }
    }

    #[test]
    fn derives_categories_in_first_appearance_order() {
        let catalog = Catalog::new(
            vec![],
            vec![entry(1, "Workshops"), entry(2, "Festivals"), entry(3, "Workshops")],
        )
        .unwrap();
        assert_eq!(catalog.categories(), ["Workshops", "Festivals"]);
    }

    #[test]
    fn declared_categories_may_be_unused() {
        let catalog = Catalog::new(
            vec!["Festivals".into(), "Behind the Scenes".into()],
            vec![entry(1, "Festivals")],
        )
        .unwrap();
        assert_eq!(catalog.categories().len(), 2);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = Catalog::new(vec![], vec![entry(1, "A"), entry(1, "B")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn undeclared_category_rejected() {
        let err = Catalog::new(vec!["Festivals".into()], vec![entry(4, "Workshops")]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UndeclaredCategory { ref id, ref category }
                if id == "4" && category == "Workshops"
        ));
    }

    #[test]
    fn duplicate_category_rejected() {
        let err = Catalog::<GalleryEntry>::new(vec!["A".into(), "A".into()], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn slug_collision_rejected() {
        let err = Catalog::<GalleryEntry>::new(vec!["Street Play".into(), "street-play".into()], vec![])
            .unwrap_err();
        assert!(matches!(err, CatalogError::SlugCollision(a, b) if a == "Street Play" && b == "street-play"));
    }

    #[test]
    fn reserved_all_slug_rejected() {
        let err = Catalog::<GalleryEntry>::new(vec!["ALL".into()], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::SlugCollision(..)));
    }

    #[test]
    fn devanagari_category_accepted() {
        let catalog = Catalog::new(
            vec!["नाटक".into(), "Festivals".into()],
            vec![entry(1, "नाटक")],
        )
        .unwrap();
        assert_eq!(catalog.categories(), ["नाटक", "Festivals"]);
        assert_eq!(catalog.category_for_slug("नाटक"), Some("नाटक"));
    }

    #[test]
    fn empty_slug_rejected() {
        let err = Catalog::<GalleryEntry>::new(vec!["???".into()], vec![]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptySlug(_)));
    }

    #[test]
    fn id_slug_collision_rejected() {
        let video = |id: &str| Video {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            video_id: String::new(),
            date: String::new(),
            category: "Street Play".into(),
        };
        let err = Catalog::new(vec![], vec![video("Act One"), video("act-one")]).unwrap_err();
        assert!(matches!(err, CatalogError::IdSlugCollision(a, b) if a == "Act One" && b == "act-one"));

        let err = Catalog::new(vec![], vec![video("***")]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyIdSlug(_)));
    }

    #[test]
    fn lookup_by_id_and_slug() {
        let catalog = Catalog::new(
            vec!["Behind the Scenes".into()],
            vec![entry(7, "Behind the Scenes")],
        )
        .unwrap();
        assert_eq!(catalog.get(&7).map(|e| e.title.as_str()), Some("Entry 7"));
        assert!(catalog.get(&8).is_none());
        assert_eq!(
            catalog.category_for_slug("behind-the-scenes"),
            Some("Behind the Scenes")
        );
        assert_eq!(catalog.category_for_slug("nope"), None);
    }

    #[test]
    fn parses_catalog_file() {
        let catalog: Catalog<Video> = Catalog::from_toml(
            r#"
            categories = ["Street Play"]

            [[items]]
            id = "1"
            title = "Nukkad Natak"
            description = "A street play."
            video_id = "abc123"
            date = "March 15, 2024"
            category = "Street Play"
            "#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.items()[0].video_id, "abc123");
    }

    #[test]
    fn empty_file_is_empty_catalog() {
        let catalog: Catalog<Event> = Catalog::from_toml("").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.categories().is_empty());
    }

    #[test]
    fn unknown_top_level_key_rejected() {
        let result: Result<Catalog<Event>, _> = Catalog::from_toml("event = []");
        assert!(matches!(result, Err(CatalogError::Toml(_))));
    }
}
